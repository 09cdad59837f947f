use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{NextverError, Result};

/// File name looked up in the current directory and the user config directory.
pub const CONFIG_FILE_NAME: &str = "nextver.toml";

/// Settings that can live in `nextver.toml`.
///
/// Command-line flags take precedence, see [`Config::merge_cli`].
#[derive(Debug, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Only tags starting with this prefix are considered; also printed
    /// in front of the result.
    #[serde(default)]
    pub prefix: String,

    /// Report skipped tags and the detected current version on stderr.
    #[serde(default)]
    pub verbose: bool,
}

impl Config {
    /// Apply command-line values on top of the file values.
    ///
    /// A given prefix replaces the configured one; verbosity is enabled if
    /// either source enables it.
    pub fn merge_cli(mut self, prefix: Option<String>, verbose: bool) -> Self {
        if let Some(prefix) = prefix {
            self.prefix = prefix;
        }
        self.verbose |= verbose;
        self
    }
}

/// Parse configuration from TOML text.
pub fn parse_config(content: &str) -> Result<Config> {
    toml::from_str(content).map_err(|e| NextverError::config(e.to_string()))
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `nextver.toml` in current directory
/// 3. `nextver.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let local = Path::new(".").join(CONFIG_FILE_NAME);

    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)
            .map_err(|e| NextverError::config(format!("cannot read {}: {}", path, e)))?
    } else if local.exists() {
        fs::read_to_string(&local)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}
