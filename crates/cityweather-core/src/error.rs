//! Centralized error types for CityWeather.
//!
//! Every failure the application recognises is a fetch failure of some kind;
//! the hierarchy below keeps the full context for logging while exposing a
//! short message that is safe to show in the UI.

use thiserror::Error;

/// Top-level application error type.
///
/// Use `user_message()` to get a UI-appropriate message.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("City source error: {0}")]
    Cities(#[from] CityError),

    #[error("Weather service error: {0}")]
    Weather(#[from] WeatherError),
}

impl AppError {
    /// Returns a user-friendly message suitable for display in the UI.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Cities(e) => e.user_message(),
            AppError::Weather(e) => e.user_message(),
        }
    }
}

/// City page fetch errors.
///
/// These are logged only; the listing never shows them to the user.
#[derive(Debug, Error)]
pub enum CityError {
    #[error("Page {page} fetch failed: {message}")]
    PageFetchFailed { page: u32, message: String },

    #[error("Service unavailable")]
    ServiceUnavailable,
}

impl CityError {
    pub fn user_message(&self) -> &'static str {
        match self {
            CityError::PageFetchFailed { .. } => "Some cities could not be loaded.",
            CityError::ServiceUnavailable => "City list unavailable. Please try again later.",
        }
    }
}

/// Weather service errors.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Weather API error: {0}")]
    ApiError(String),

    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("City not found: {0}")]
    CityNotFound(String),

    #[error("Service unavailable")]
    ServiceUnavailable,
}

impl WeatherError {
    /// Every weather failure surfaces as the same inline message.
    pub fn user_message(&self) -> &'static str {
        "Error fetching weather data. Please try again."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages_are_non_empty() {
        let messages = [
            CityError::ServiceUnavailable.user_message(),
            WeatherError::ServiceUnavailable.user_message(),
        ];

        for message in messages {
            assert!(!message.is_empty());
        }
    }

    #[test]
    fn test_app_error_conversion() {
        let weather_err = WeatherError::InvalidApiKey;
        let app_err: AppError = weather_err.into();
        assert!(matches!(app_err, AppError::Weather(WeatherError::InvalidApiKey)));
    }

    #[test]
    fn test_city_errors_stay_in_cities_variant() {
        let app_err: AppError = CityError::PageFetchFailed {
            page: 2,
            message: "reset".into(),
        }
        .into();
        assert!(matches!(app_err, AppError::Cities(CityError::PageFetchFailed { page: 2, .. })));
        assert_eq!(app_err.user_message(), "Some cities could not be loaded.");
    }

    #[test]
    fn test_weather_user_message_is_fixed() {
        let app_err = AppError::Weather(WeatherError::CityNotFound("Atlantis".into()));
        assert_eq!(
            app_err.user_message(),
            "Error fetching weather data. Please try again."
        );
        assert_eq!(
            WeatherError::ApiError("boom".into()).user_message(),
            WeatherError::InvalidApiKey.user_message()
        );
    }
}
