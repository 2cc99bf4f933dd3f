use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

/// Environment variable consulted when no weather API key is configured.
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Get a user-friendly message summarizing all errors
    pub fn error_summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Remote city source
    #[serde(default)]
    pub cities: CitiesConfig,

    /// Remote weather source
    #[serde(default)]
    pub weather: WeatherConfig,

    /// Terminal front end preferences
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CitiesConfig {
    /// Records search endpoint
    pub endpoint: String,

    /// Dataset identifier passed as the `dataset` query parameter
    pub dataset: String,

    /// Rows requested per page
    pub page_size: u32,

    /// HTTP timeout in seconds
    #[serde(default = "default_cities_timeout")]
    pub timeout_secs: u64,
}

fn default_cities_timeout() -> u64 {
    30
}

impl Default for CitiesConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://public.opendatasoft.com/api/records/1.0/search/".to_string(),
            dataset: "geonames-all-cities-with-a-population-1000".to_string(),
            page_size: 1000,
            timeout_secs: default_cities_timeout(),
        }
    }
}

/// Measurement system requested from the weather source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    Standard,
    #[default]
    Metric,
    Imperial,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Current weather endpoint
    pub endpoint: String,

    /// API key; falls back to the `OPENWEATHER_API_KEY` environment variable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Measurement system
    #[serde(default)]
    pub units: Units,

    /// HTTP timeout in seconds
    #[serde(default = "default_weather_timeout")]
    pub timeout_secs: u64,
}

fn default_weather_timeout() -> u64 {
    10
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.openweathermap.org/data/2.5/weather".to_string(),
            api_key: None,
            units: Units::default(),
            timeout_secs: default_weather_timeout(),
        }
    }
}

impl WeatherConfig {
    /// The configured key, or the one from the environment.
    pub fn resolved_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| std::env::var(API_KEY_ENV).ok().filter(|k| !k.trim().is_empty()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Rows visible in the listing at once
    pub viewport_rows: usize,

    /// Maximum number of search suggestions
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,

    /// Prefix for links opened in a new browsing context
    #[serde(default = "default_detail_url_base")]
    pub detail_url_base: String,

    /// Width, in CSS pixels, the detail backdrop is laid out for
    #[serde(default = "default_viewport_width")]
    pub viewport_width: u32,

    /// Widths at or below this use the narrow backdrop sizing
    #[serde(default = "default_narrow_width")]
    pub narrow_width_threshold: u32,
}

fn default_suggestion_limit() -> usize {
    5
}

fn default_detail_url_base() -> String {
    "/weather/".to_string()
}

fn default_viewport_width() -> u32 {
    1024
}

fn default_narrow_width() -> u32 {
    768
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            viewport_rows: 20,
            suggestion_limit: default_suggestion_limit(),
            detail_url_base: default_detail_url_base(),
            viewport_width: default_viewport_width(),
            narrow_width_threshold: default_narrow_width(),
        }
    }
}

impl Config {
    /// Load configuration from the default location, creating it if missing
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    /// Load configuration from a specific file, creating a default one if missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Self::default();
            config.save_to(path)?;
            tracing::info!("Wrote default configuration to {}", path.display());
            return Ok(config);
        }

        let contents = std::fs::read_to_string(path).context("Failed to read config file")?;

        let config: Config = toml::from_str(&contents).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        self.validate_url(&self.cities.endpoint, "cities.endpoint", &mut result);
        self.validate_url(&self.weather.endpoint, "weather.endpoint", &mut result);

        if self.cities.dataset.trim().is_empty() {
            result.add_error("cities.dataset", "Dataset must not be empty");
        }

        if self.cities.page_size == 0 {
            result.add_error("cities.page_size", "Page size must be greater than 0");
        } else if self.cities.page_size > 10_000 {
            result.add_warning("cities.page_size", "Page size is unusually large (>10000)");
        }

        if self.weather.resolved_api_key().is_none() {
            result.add_warning(
                "weather.api_key",
                format!("No API key configured and {} is unset - weather lookups will fail", API_KEY_ENV),
            );
        }

        if self.ui.viewport_rows == 0 {
            result.add_error("ui.viewport_rows", "Viewport must show at least one row");
        }

        if self.ui.suggestion_limit == 0 || self.ui.suggestion_limit > 50 {
            result.add_error("ui.suggestion_limit", "Suggestion limit must be between 1 and 50");
        }

        if self.ui.viewport_width == 0 {
            result.add_error("ui.viewport_width", "Viewport width must be greater than 0");
        }

        result
    }

    /// Validate a URL field
    fn validate_url(&self, url_str: &str, field_name: &str, result: &mut ValidationResult) {
        match Url::parse(url_str) {
            Ok(url) => {
                if url.scheme() != "http" && url.scheme() != "https" {
                    result.add_error(
                        field_name,
                        format!("URL must use http or https scheme, got: {}", url.scheme()),
                    );
                }

                if url.host().is_none() {
                    result.add_error(field_name, "URL must have a host");
                }
            }
            Err(e) => {
                result.add_error(field_name, format!("Invalid URL: {}", e));
            }
        }
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(path, contents).context("Failed to write config file")?;

        Ok(())
    }

    /// Get the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to get config directory")?
            .join("cityweather");

        Ok(config_dir.join("config.toml"))
    }
}
