//! Application configuration.
//!
//! Resolution order: environment variables > config file > defaults.

use crate::error::AppError;
use crate::services::companion_server::CompanionConfig;
use crate::services::menu_client::MenuClientConfig;
use crate::services::retry::RetryPolicy;
use serde::Deserialize;
use std::path::Path;

/// Environment variable naming the config file.
pub const CONFIG_PATH_ENV: &str = "MENU_CONFIG";

/// Config file used when `MENU_CONFIG` is unset.
pub const DEFAULT_CONFIG_PATH: &str = "nav_menu.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub menu: MenuClientConfig,
    pub retry: RetryPolicy,
    pub companion: CompanionConfig,
}

impl AppConfig {
    /// Load from the file named by `MENU_CONFIG` (or the default path), then
    /// apply environment overrides.
    pub fn load() -> Result<Self, AppError> {
        let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());
        let mut config = Self::from_file(Path::new(&path))?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Parse a config file. A missing file yields the defaults.
    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        if !path.exists() {
            log::info!(
                "[config] {} not found, using defaults",
                path.display()
            );
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            AppError::config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config: Self = toml::from_str(&content)?;
        log::info!("[config] Loaded {}", path.display());
        Ok(config)
    }

    /// Apply `MENU_*` overrides from the given lookup.
    pub fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), AppError> {
        if let Some(endpoint) = lookup("MENU_ENDPOINT") {
            self.menu.endpoint = endpoint;
        }
        if let Some(rest_api) = lookup("MENU_REST_API") {
            self.menu.rest_api = rest_api;
        }
        if let Some(platform) = lookup("MENU_PLATFORM") {
            self.menu.platform = platform;
        }
        if let Some(token) = lookup("MENU_AUTH_TOKEN") {
            self.menu.auth_token = token;
        }
        if let Some(port) = lookup("MENU_PORT") {
            self.companion.port = port.parse().map_err(|_| {
                AppError::config_field(format!("Invalid port: {}", port), "MENU_PORT")
            })?;
        }
        Ok(())
    }
}
