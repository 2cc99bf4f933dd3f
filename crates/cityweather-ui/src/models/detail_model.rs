use cityweather_core::AppError;
use cityweather_weather::{WeatherData, WeatherStore};

use crate::services::WeatherServiceError;

/// State of the weather detail screen for one city.
///
/// Weather data itself lives in the page-owned `WeatherStore`; this model
/// only tracks loading and the inline error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailModel {
    city: String,
    loading: bool,
    error_message: Option<String>,
}

impl DetailModel {
    pub fn new(city: &str) -> Self {
        Self {
            city: city.to_string(),
            loading: false,
            error_message: None,
        }
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Mark a fetch as started. Returns the city to fetch.
    pub fn begin_fetch(&mut self) -> String {
        self.loading = true;
        self.city.clone()
    }

    /// Apply a finished fetch. Results for another city are dropped.
    pub fn on_fetch_done(
        &mut self,
        city: &str,
        result: Result<WeatherData, WeatherServiceError>,
        store: &mut WeatherStore,
    ) {
        if city != self.city {
            tracing::debug!(stale = %city, current = %self.city, "Dropping weather for another city");
            return;
        }

        self.loading = false;
        match result {
            Ok(data) => {
                tracing::info!(city = %city, "Weather data fetched successfully");
                store.update(data);
                self.error_message = None;
            }
            Err(e) => {
                let app_error = AppError::from(e);
                tracing::error!("Error fetching weather data: {}", app_error);
                self.error_message = Some(app_error.user_message().to_string());
            }
        }
    }
}
