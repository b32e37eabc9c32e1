use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::filter::FilterSet;

/// Configuration for changelog-gen.
///
/// Currently holds the default filter-family toggles; CLI flags override
/// these per invocation.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub filters: FiltersConfig,
}

fn default_enabled() -> bool {
    true
}

/// Default enabled/disabled state per filter family.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct FiltersConfig {
    #[serde(default = "default_enabled")]
    pub feat: bool,

    #[serde(default = "default_enabled")]
    pub fix: bool,

    #[serde(default = "default_enabled")]
    pub chore: bool,

    #[serde(default = "default_enabled")]
    pub docs: bool,

    #[serde(default = "default_enabled")]
    pub merge: bool,
}

impl Default for FiltersConfig {
    fn default() -> Self {
        FiltersConfig {
            feat: true,
            fix: true,
            chore: true,
            docs: true,
            merge: true,
        }
    }
}

impl FiltersConfig {
    pub fn to_filter_set(&self) -> FilterSet {
        FilterSet {
            feat: self.feat,
            fix: self.fix,
            chore: self.chore,
            docs: self.docs,
            merge: self.merge,
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `changelog.toml` in current directory
/// 3. `~/.config/.changelog.toml` in user config directory
/// 4. Default configuration if no file found
pub fn load_config(config_path: Option<&str>) -> Result<Config, Box<dyn std::error::Error>> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./changelog.toml").exists() {
        fs::read_to_string("./changelog.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".changelog.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}
