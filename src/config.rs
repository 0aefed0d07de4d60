use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    /// Recipes API settings
    #[serde(default)]
    pub api: ApiConfig,
}

/// Where recipes come from and where their detail pages live
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Recipes list endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Prefix the recipe id is appended to for each card's link
    #[serde(default = "default_detail_base_url")]
    pub detail_base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            detail_base_url: default_detail_base_url(),
            timeout: default_timeout(),
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

// Default value functions
fn default_endpoint() -> String {
    "https://dummyjson.com/recipes".to_string()
}

fn default_detail_base_url() -> String {
    "https://dummyjson.com/recipes/".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// See [`load_config`].
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        load_config(path)
    }

    /// Parse configuration from an inline TOML document, without consulting
    /// the environment
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}

/// Load configuration from file and environment variables
///
/// Configuration is loaded with the following priority (highest to lowest):
/// 1. Environment variables with RECIPE_GRID__ prefix
/// 2. The given file, or recipe-grid.toml in the current directory if present
/// 3. Default values
///
/// Environment variable format: RECIPE_GRID__API__ENDPOINT
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let file = match path {
        // An explicit path must exist
        Some(path) => File::from(path).required(true),
        None => File::with_name("recipe-grid").required(false),
    };

    let settings = Config::builder()
        .add_source(file)
        // Use double underscore for nested: RECIPE_GRID__API__TIMEOUT
        .add_source(
            Environment::with_prefix("RECIPE_GRID")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
