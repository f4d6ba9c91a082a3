use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Represents the complete configuration for release-tiers.
///
/// Everything is optional; with no configuration file present the tool reads
/// `GITHUB_REF_NAME`, collects assets from the component directory and
/// publishes all three release tiers.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub assets: AssetsConfig,

    #[serde(default)]
    pub publish: PublishConfig,
}

/// Configuration for the triggering input.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct InputConfig {
    /// Environment variable holding the reference name
    #[serde(default = "default_env_var")]
    pub env_var: String,
}

fn default_env_var() -> String {
    "GITHUB_REF_NAME".to_string()
}

impl Default for InputConfig {
    fn default() -> Self {
        InputConfig {
            env_var: default_env_var(),
        }
    }
}

/// Configuration for asset collection.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct AssetsConfig {
    /// Directory to collect assets from; defaults to the component name
    #[serde(default)]
    pub dir: Option<String>,
}

/// Configuration for release publishing behavior.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PublishConfig {
    /// Whether the floating major/major.minor aliases are published
    #[serde(default = "default_aliases")]
    pub aliases: bool,
}

fn default_aliases() -> bool {
    true
}

impl Default for PublishConfig {
    fn default() -> Self {
        PublishConfig {
            aliases: default_aliases(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input: InputConfig::default(),
            assets: AssetsConfig::default(),
            publish: PublishConfig::default(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `releasetiers.toml` in current directory
/// 3. `~/.config/.releasetiers.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config, Box<dyn std::error::Error>> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./releasetiers.toml").exists() {
        fs::read_to_string("./releasetiers.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".releasetiers.toml");
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
