use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Result, ShipitError};

/// Represents the complete configuration for shipit.
///
/// Contains release naming templates and the changelog location. Every field
/// has a default, so a missing configuration file is not an error.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub release: ReleaseConfig,

    #[serde(default)]
    pub changelog: ChangelogConfig,
}

fn default_tag_pattern() -> String {
    "v{version}".to_string()
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_commit_message() -> String {
    "Release version {version}".to_string()
}

fn default_tag_message() -> String {
    "Version {version}".to_string()
}

fn default_release_title() -> String {
    "{package} {version}".to_string()
}

fn default_changelog_path() -> String {
    "CHANGELOG.md".to_string()
}

/// Configuration for commit, tag, and release naming.
///
/// Templates may use `{version}` and `{package}` placeholders, substituted
/// when the release is created.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ReleaseConfig {
    #[serde(default = "default_tag_pattern")]
    pub tag_pattern: String,

    #[serde(default = "default_remote")]
    pub remote: String,

    #[serde(default = "default_commit_message")]
    pub commit_message: String,

    #[serde(default = "default_tag_message")]
    pub tag_message: String,

    #[serde(default = "default_release_title")]
    pub title: String,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        ReleaseConfig {
            tag_pattern: default_tag_pattern(),
            remote: default_remote(),
            commit_message: default_commit_message(),
            tag_message: default_tag_message(),
            title: default_release_title(),
        }
    }
}

/// Configuration for the changelog file location.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ChangelogConfig {
    #[serde(default = "default_changelog_path")]
    pub path: String,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        ChangelogConfig {
            path: default_changelog_path(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            release: ReleaseConfig::default(),
            changelog: ChangelogConfig::default(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `shipit.toml` in current directory
/// 3. `.shipit.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./shipit.toml").exists() {
        fs::read_to_string("./shipit.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".shipit.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)
        .map_err(|e| ShipitError::config(format!("invalid configuration file: {}", e)))?;
    Ok(config)
}
