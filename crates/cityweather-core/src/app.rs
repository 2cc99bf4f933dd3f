use anyhow::Result;
use std::sync::Arc;

use crate::Config;

/// Application lifecycle manager.
///
/// Owns the validated configuration for the session. Nothing is persisted
/// when the application shuts down.
pub struct App {
    config: Arc<Config>,
    initialized: bool,
}

impl App {
    /// Create a new application instance from a loaded configuration
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            initialized: false,
        }
    }

    /// Validate configuration and mark the application ready
    pub fn initialize(&mut self) -> Result<()> {
        let validation = self.config.validate();
        if !validation.is_valid() {
            anyhow::bail!(
                "Configuration validation failed: {}",
                validation.error_summary()
            );
        }

        for warning in &validation.warnings {
            tracing::warn!("Config warning: {}", warning);
        }

        tracing::info!(
            page_size = self.config.cities.page_size,
            viewport_rows = self.config.ui.viewport_rows,
            "Application initialized successfully"
        );
        self.initialized = true;
        Ok(())
    }

    /// Shutdown the application gracefully
    pub fn shutdown(&mut self) -> Result<()> {
        tracing::info!("Shutting down application");
        self.initialized = false;
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Shared handle to the application config
    pub fn shared_config(&self) -> Arc<Config> {
        self.config.clone()
    }
}
