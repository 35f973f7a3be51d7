use crate::pudelko::{FormatSpec, Unit};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name looked up in the working directory when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "pudelko.toml";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    // Format used when printing boxes
    #[serde(default)]
    pub default_format: FormatSpec,

    // Unit applied to `new` when no --unit is given
    #[serde(default)]
    pub default_unit: Unit,

    #[serde(default)]
    pub output: OutputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    #[default]
    Text,
    Json,
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Load `path` if given, otherwise `pudelko.toml` when it exists, otherwise defaults
    pub fn discover(path: Option<&str>) -> Result<Self, Box<dyn std::error::Error>> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }

        let fallback = Path::new(DEFAULT_CONFIG_FILE);
        if !fallback.exists() {
            return Ok(Self::empty());
        }

        match Self::load_from_file(fallback) {
            Ok(config) => Ok(config),
            Err(e) => {
                log::warn!("Ignoring {}: {}", DEFAULT_CONFIG_FILE, e);
                Ok(Self::empty())
            }
        }
    }

    pub fn empty() -> Self {
        Self {
            default_format: FormatSpec::Meter,
            default_unit: Unit::Meter,
            output: OutputMode::Text,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::empty()
    }
}
