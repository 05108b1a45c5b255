use crate::{
    config::{Config, OutputFormat},
    math,
    user::User,
    Args,
};
use anyhow::Result;
use std::io::Write;

/// Effective settings after layering defaults, config files and CLI flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub name: String,
    pub n: i64,
    pub format: OutputFormat,
}

impl Settings {
    /// CLI flags override config values
    pub fn resolve(args: &Args, config: &Config) -> Result<Self> {
        let format = match &args.format {
            Some(s) => OutputFormat::from_str(s)
                .ok_or_else(|| anyhow::anyhow!("Invalid format: {}. Use: text, json", s))?,
            None => config.format(),
        };

        Ok(Self {
            name: args
                .name
                .clone()
                .unwrap_or_else(|| config.name().to_string()),
            n: args.number.unwrap_or_else(|| config.n()),
            format,
        })
    }
}

/// Validate the config values still in effect, then resolve settings.
///
/// Fields overridden by a CLI flag are not validated.
pub fn prepare(args: &Args, config: &Config) -> Result<Settings> {
    let mut effective = config.clone();
    if args.name.is_some() {
        effective.user.name = None;
    }
    if args.number.is_some() {
        effective.factorial.n = None;
    }
    if args.format.is_some() {
        effective.output.format = None;
    }

    if let Err(errors) = effective.validate() {
        for err in &errors {
            eprintln!("Config error {}", err);
        }
        return Err(anyhow::anyhow!(
            "Invalid configuration ({} error(s))",
            errors.len()
        ));
    }

    Settings::resolve(args, config)
}

/// Greet the user, then print the factorial
pub fn run<W: Write>(settings: &Settings, out: &mut W) -> Result<()> {
    let user = User::new(settings.name.as_str());

    match settings.format {
        OutputFormat::Text => {
            user.say_hello(out)?;
            let value = math::factorial(settings.n)?;
            writeln!(out, "{}", value)?;
        }
        OutputFormat::Json => {
            let line = serde_json::json!({ "greeting": user.greeting() });
            writeln!(out, "{}", line)?;
            let value = math::factorial(settings.n)?;
            let line = serde_json::json!({ "n": settings.n, "factorial": value.to_string() });
            writeln!(out, "{}", line)?;
        }
    }

    out.flush()?;
    Ok(())
}
