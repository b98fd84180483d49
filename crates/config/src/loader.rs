use super::defaults::DEFAULT_CONFIG_TEMPLATE;
use super::errors::ConfigError;
use super::migration::migrate_config_if_needed;
use super::models::Config;
use std::path::Path;
use std::sync::Arc;

impl Config {
    /// Loads configuration from a file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        Self::from_file_with_events(path, None).await
    }

    /// Loads configuration from a file with optional event bus for notifications
    pub async fn from_file_with_events<P: AsRef<Path>>(
        path: P,
        events: Option<&Arc<motdcard_events::EventBus>>,
    ) -> anyhow::Result<Self> {
        let path = path.as_ref();

        // Create default config if it doesn't exist
        if !path.exists() {
            create_default_config(path).await?;
        }

        // Migrate config if needed
        migrate_config_if_needed(path, events).await?;

        // Read and parse config
        let content = tokio::fs::read_to_string(path).await?;
        let config = Self::from_toml_str(&content)?;

        Ok(config)
    }

    /// Parses and validates configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidConfig("server.port must not be 0".to_string()));
        }
        if self.server.max_concurrent_requests == 0 {
            return Err(ConfigError::InvalidConfig(
                "server.max_concurrent_requests must be at least 1".to_string(),
            ));
        }
        if self.query.connect_timeout_ms == 0 || self.query.read_timeout_ms == 0 {
            return Err(ConfigError::InvalidConfig("query timeouts must be positive".to_string()));
        }
        if self.query.default_port == 0 {
            return Err(ConfigError::InvalidConfig("query.default_port must not be 0".to_string()));
        }
        if !self.render.max_scale.is_finite() || self.render.max_scale <= 0.0 {
            return Err(ConfigError::InvalidConfig(format!(
                "render.max_scale must be a positive number, got {}",
                self.render.max_scale
            )));
        }
        Ok(())
    }
}

/// Creates a default configuration file
async fn create_default_config<P: AsRef<Path>>(path: P) -> anyhow::Result<()> {
    tokio::fs::write(path, DEFAULT_CONFIG_TEMPLATE).await?;
    Ok(())
}
