use anyhow::{anyhow, Result};
use log::{debug, info};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Top-level configuration structure containing all config sections
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub app: AppInfo,
}

/// Marketplace API connection configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub base_url_internal: String,

    #[serde(default = "default_confirm_path")]
    pub confirm_path: String,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    #[serde(default = "default_user_id")]
    pub user_id: String,
}

fn default_confirm_path() -> String {
    "/api/placeorder/confirm".to_string()
}

fn default_timeout_ms() -> u64 {
    5000
}

fn default_user_id() -> String {
    crate::domain::constants::DEFAULT_USER_ID.to_string()
}

/// Application information
#[derive(Debug, Clone, Deserialize)]
pub struct AppInfo {
    pub rust_running_in_docker: bool,
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let config_str = fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file '{}': {}", path.display(), e))?;

        let config: AppConfig = toml::from_str(&config_str)
            .map_err(|e| anyhow!("Failed to parse config file '{}': {}", path.display(), e))?;

        info!("Loaded configuration from {}", path.display());
        debug!("Running in Docker: {}", config.app.rust_running_in_docker);

        Ok(config)
    }

    /// Helper to get the appropriate API base URL based on Docker status
    pub fn api_base_url(&self) -> &str {
        if self.app.rust_running_in_docker {
            &self.api.base_url_internal
        } else {
            &self.api.base_url
        }
    }
}
