use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Runtime settings for a harvest run
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    /// Path of the page definitions file
    #[serde(default = "default_sources_file")]
    pub sources_file: String,
    /// Path of the persisted store
    #[serde(default = "default_store_file")]
    pub store_file: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// User agent presented to listing pages
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sources_file: default_sources_file(),
            store_file: default_store_file(),
            timeout: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

// Default value functions
fn default_sources_file() -> String {
    "sources.json".to_string()
}

fn default_store_file() -> String {
    "gui-config.json".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".to_string()
}

impl Settings {
    /// Load settings from file and environment variables
    ///
    /// Settings are loaded with the following priority (highest to lowest):
    /// 1. Environment variables with HARVEST_ prefix
    /// 2. harvest.toml file in current directory
    /// 3. Default values
    pub fn load() -> Result<Self, ConfigError> {
        load_settings()
    }
}

/// Load settings from file and environment variables
///
/// Settings are loaded with the following priority (highest to lowest):
/// 1. Environment variables with HARVEST_ prefix (e.g. HARVEST_STORE_FILE)
/// 2. harvest.toml file in current directory
/// 3. Default values
pub fn load_settings() -> Result<Settings, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("harvest").required(false))
        .add_source(Environment::with_prefix("HARVEST").try_parsing(true))
        .build()?;

    settings.try_deserialize()
}
