use std::io::Write;

/// A named user that can greet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    name: String,
}

impl User {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The greeting line, without a trailing newline
    pub fn greeting(&self) -> String {
        format!("Hello, {}", self.name())
    }

    /// Write the greeting as a single line
    pub fn say_hello<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "{}", self.greeting())
    }
}
