use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_RESULTS_PER_PAGE: usize = 10;

/// Settings for the recipe API, pagination and local storage
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Base endpoint of the recipe API
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// API credential appended as `?key=`; omitted from requests when unset
    #[serde(default)]
    pub key: Option<String>,
    /// Number of search results per page
    #[serde(default = "default_results_per_page")]
    pub results_per_page: usize,
    /// HTTP request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Directory holding the persisted bookmarks
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            key: None,
            results_per_page: default_results_per_page(),
            timeout: default_timeout(),
            data_dir: default_data_dir(),
        }
    }
}

// Default value functions
fn default_api_url() -> String {
    "https://forkify-api.herokuapp.com/api/v2/recipes".to_string()
}

fn default_results_per_page() -> usize {
    DEFAULT_RESULTS_PER_PAGE
}

fn default_timeout() -> u64 {
    30
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".recipe-book")
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_BOOK__ prefix
    /// 2. recipe-book.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_BOOK__KEY, RECIPE_BOOK__RESULTS_PER_PAGE
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("recipe-book").required(false))
            // No try_parsing: `key` is opaque and must stay a string
            .add_source(
                Environment::with_prefix("RECIPE_BOOK")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.results_per_page == 0 {
            return Err(ConfigError::Message(
                "results_per_page must be greater than zero".to_string(),
            ));
        }
        if self.api_url.trim().is_empty() {
            return Err(ConfigError::Message("api_url must not be empty".to_string()));
        }
        Ok(())
    }
}
