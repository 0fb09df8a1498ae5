//! Configuration loading
//!
//! Sources, lowest priority first: built-in defaults, a TOML file
//! (`--config <path>` or `./numerologia.toml`), then `NUMEROLOGIA_*`
//! environment variables.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::calendar::MonthNameStyle;
use crate::error::{NumerologyError, NumerologyResult};

pub const DEFAULT_CONFIG_FILE: &str = "numerologia.toml";
pub const DEFAULT_BIND: &str = "0.0.0.0:3000";

pub const ENV_MONTH_NAMES: &str = "NUMEROLOGIA_MONTH_NAMES";
pub const ENV_BIND: &str = "NUMEROLOGIA_BIND";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub report: ReportConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Spelling of Hebrew month names in reports
    pub month_names: MonthNameStyle,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind: DEFAULT_BIND.to_string(),
        }
    }
}

impl Config {
    /// Parse a TOML config file
    pub fn load(path: &Path) -> NumerologyResult<Config> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> NumerologyResult<Config> {
        toml::from_str(content).map_err(|e| NumerologyError::Config {
            file: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Explicit file if given (must exist), else `./numerologia.toml` when
    /// present, else defaults. Environment overrides are applied last.
    pub fn load_or_default(explicit: Option<&Path>) -> NumerologyResult<Config> {
        let config = match explicit {
            Some(path) => Self::load(path)?,
            None => {
                let local = PathBuf::from(DEFAULT_CONFIG_FILE);
                if local.exists() {
                    Self::load(&local)?
                } else {
                    Config::default()
                }
            }
        };

        Ok(config.with_overrides(|key| std::env::var(key).ok()))
    }

    /// Apply `NUMEROLOGIA_*` overrides read through `lookup`
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Config {
        if let Some(style) = lookup(ENV_MONTH_NAMES) {
            match style.parse::<MonthNameStyle>() {
                Ok(style) => self.report.month_names = style,
                Err(e) => warn!(var = ENV_MONTH_NAMES, error = %e, "ignoring override"),
            }
        }

        if let Some(bind) = lookup(ENV_BIND) {
            if bind.trim().is_empty() {
                warn!(var = ENV_BIND, "ignoring empty override");
            } else {
                self.server.bind = bind.trim().to_string();
            }
        }

        self
    }
}
