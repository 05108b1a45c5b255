use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::math::MAX_FACTORIAL_INPUT;

pub const DEFAULT_NAME: &str = "Alice";
pub const DEFAULT_N: i64 = 5;

/// A validation error in the configuration
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]: {}", self.field, self.message)
    }
}

/// How results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Some(Self::Text),
            "json" | "jsonl" => Some(Self::Json),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct UserConfig {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct FactorialConfig {
    #[serde(default)]
    pub n: Option<i64>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: Option<String>,
}

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub user: UserConfig,
    #[serde(default)]
    pub factorial: FactorialConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Config file locations, lowest priority first:
    /// user (~/.factgreet/config.toml) < project (.factgreet/config.toml)
    /// < local (.factgreet/config.local.toml)
    pub fn default_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".factgreet").join("config.toml"));
        }
        let project_dir = Path::new(".factgreet");
        paths.push(project_dir.join("config.toml"));
        paths.push(project_dir.join("config.local.toml"));
        paths
    }

    /// Load configuration from the default paths
    pub fn load() -> Result<Self> {
        Self::load_layered(&Self::default_paths())
    }

    /// Merge every existing file in `paths`, later files winning
    pub fn load_layered(paths: &[PathBuf]) -> Result<Self> {
        let mut config = Self::default();
        for path in paths {
            if path.exists() {
                let layer = Self::load_from(path)?;
                config.merge(layer);
            }
        }
        Ok(config)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
        Ok(config)
    }

    /// Merge another config into this one (values set in other take priority)
    pub fn merge(&mut self, other: Config) {
        if other.user.name.is_some() {
            self.user.name = other.user.name;
        }
        if other.factorial.n.is_some() {
            self.factorial.n = other.factorial.n;
        }
        if other.output.format.is_some() {
            self.output.format = other.output.format;
        }
    }

    pub fn name(&self) -> &str {
        self.user.name.as_deref().unwrap_or(DEFAULT_NAME)
    }

    pub fn n(&self) -> i64 {
        self.factorial.n.unwrap_or(DEFAULT_N)
    }

    /// Output format, falling back to text if unset or unrecognized
    pub fn format(&self) -> OutputFormat {
        self.output
            .format
            .as_deref()
            .and_then(OutputFormat::from_str)
            .unwrap_or_default()
    }

    /// Validate configuration and return any errors found
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Some(n) = self.factorial.n {
            if !(0..=MAX_FACTORIAL_INPUT).contains(&n) {
                errors.push(ValidationError {
                    field: "factorial.n".to_string(),
                    message: format!("Must be between 0 and {}, got {}", MAX_FACTORIAL_INPUT, n),
                });
            }
        }

        if let Some(format) = &self.output.format {
            if OutputFormat::from_str(format).is_none() {
                errors.push(ValidationError {
                    field: "output.format".to_string(),
                    message: format!("Invalid format '{}', expected 'text' or 'json'", format),
                });
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
