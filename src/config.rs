use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::parser::MetadataSplit;

/// Name of the project-local configuration file
pub const LOCAL_CONFIG_FILE: &str = "semver.toml";

/// Name of the per-user configuration file inside the config directory
pub const USER_CONFIG_FILE: &str = ".semver.toml";

/// Represents the complete configuration for the semver tool.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub parser: ParserConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// How raw version strings are cut into fields.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct ParserConfig {
    #[serde(default)]
    pub metadata_split: MetadataSplit,
}

/// How results are reported by the command line shell.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct OutputConfig {
    /// Exit with a non-zero status when a command produces an empty result
    #[serde(default)]
    pub strict: bool,
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `semver.toml` in current directory
/// 3. `.semver.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new(LOCAL_CONFIG_FILE).exists() {
        fs::read_to_string(LOCAL_CONFIG_FILE)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(USER_CONFIG_FILE);
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

/// Parses configuration from TOML text; missing sections take defaults.
pub fn parse_config(config_str: &str) -> Result<Config> {
    let config: Config = toml::from_str(config_str)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.parser.metadata_split, MetadataSplit::First);
        assert!(!config.output.strict);
    }

    #[test]
    fn test_parse_empty_config() {
        assert_eq!(parse_config("").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_full_config() {
        let config = parse_config(
            r#"
[parser]
metadata_split = "last"

[output]
strict = true
"#,
        )
        .unwrap();
        assert_eq!(config.parser.metadata_split, MetadataSplit::Last);
        assert!(config.output.strict);
    }

    #[test]
    fn test_parse_rejects_unknown_split() {
        let err = parse_config("[parser]\nmetadata_split = \"middle\"\n").unwrap_err();
        assert!(err.to_string().starts_with("Config parse error"));
    }
}
