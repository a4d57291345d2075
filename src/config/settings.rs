use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{AppError, Result};

/// Prefix of environment overrides, e.g. `CALCULATOR_DEMO__A=4`.
pub const ENV_PREFIX: &str = "CALCULATOR";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub demo: DemoConfig,
    pub output: OutputConfig,
}

/// Operands used by the demo run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    pub a: f64,
    pub b: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// Parsed case-insensitively from every source, serialized lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(AppError::invalid_input(format!(
                "Unsupported format: {other}. Use 'text' or 'json'"
            ))),
        }
    }
}

impl TryFrom<String> for OutputFormat {
    type Error = AppError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            demo: DemoConfig { a: 10.0, b: 3.0 },
            output: OutputConfig {
                format: OutputFormat::Text,
            },
        }
    }
}

impl Config {
    /// Load defaults, the user config file if present, then environment overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Like [`Config::load`], but an explicit `path` replaces the user config
    /// file and must exist.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let defaults = Self::default();

        let mut builder = config::Config::builder()
            .set_default("demo.a", defaults.demo.a)?
            .set_default("demo.b", defaults.demo.b)?
            .set_default("output.format", defaults.output.format.as_str())?;

        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(AppError::Config(config::ConfigError::Message(format!(
                        "Config file not found: {}",
                        path.display()
                    ))));
                }
                debug!("Loading config from {}", path.display());
                builder = builder.add_source(config::File::from(path));
            }
            None => {
                if let Some(default_path) = Self::default_config_path() {
                    if default_path.exists() {
                        debug!("Loading config from {}", default_path.display());
                        builder = builder.add_source(config::File::from(default_path));
                    }
                }
            }
        }

        let settings = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let config: Config = settings.try_deserialize()?;
        debug!("Effective config: {config:?}");
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;

        Ok(())
    }

    /// `~/.calculator/config.json`, if a home directory can be determined.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".calculator").join("config.json"))
    }
}
