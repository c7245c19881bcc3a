use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use super::{NotificationsConfig, ServerConfig};

/// Provides the default value for database_url.
fn default_database_url() -> String {
    "sqlite://carelog.db".to_string()
}

/// Application configuration for Carelog.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Database URL for the SQLite blob store.
    #[serde(default = "default_database_url")]
    pub database_url: String,

    /// HTTP server configuration.
    #[serde(default)]
    pub server: ServerConfig,

    /// Notification relay configuration.
    #[serde(default)]
    pub notifications: NotificationsConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            server: ServerConfig::default(),
            notifications: NotificationsConfig::default(),
        }
    }
}

impl AppConfig {
    /// Creates a new `AppConfig` by reading from the configuration directory.
    ///
    /// The file source is optional; every field carries a default, so the
    /// application starts with an empty configuration directory. Environment
    /// variables prefixed with `CARELOG` override file values.
    pub fn new(config_dir: Option<&str>) -> Result<Self, ConfigError> {
        let config_dir_str = config_dir.unwrap_or("configs");
        let s = Config::builder()
            .add_source(File::with_name(&format!("{}/app.yaml", config_dir_str)).required(false))
            .add_source(Environment::with_prefix("CARELOG").separator("__"))
            .build()?;
        s.try_deserialize()
    }
}
