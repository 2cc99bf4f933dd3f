//! Weather backend: async weather fetching.
//! All network work runs on the tokio runtime; results sent via mpsc.

use std::sync::Arc;

use cityweather_weather::{WeatherData, WeatherError, WeatherProvider};
use tokio::sync::mpsc::UnboundedSender;

/// Error type for weather operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WeatherServiceError {
    Network(String),
    NotFound(String),
    Unauthorized,
    NotInitialized,
}

impl std::fmt::Display for WeatherServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeatherServiceError::Network(s) => write!(f, "Weather error: {}", s),
            WeatherServiceError::NotFound(city) => write!(f, "Weather error: no city named {}", city),
            WeatherServiceError::Unauthorized => write!(f, "Weather error: API key rejected or missing"),
            WeatherServiceError::NotInitialized => write!(f, "Weather service not initialized"),
        }
    }
}

impl std::error::Error for WeatherServiceError {}

impl From<WeatherError> for WeatherServiceError {
    fn from(e: WeatherError) -> Self {
        match e {
            WeatherError::CityNotFound(city) => WeatherServiceError::NotFound(city),
            WeatherError::InvalidApiKey | WeatherError::MissingApiKey => {
                WeatherServiceError::Unauthorized
            }
            other => WeatherServiceError::Network(other.to_string()),
        }
    }
}

/// Messages sent from async operations back to the event loop
#[derive(Debug)]
pub enum WeatherServiceMessage {
    /// Result of fetching weather data for `city`
    FetchDone {
        city: String,
        result: Result<WeatherData, WeatherServiceError>,
    },
}

/// Request to fetch weather data asynchronously.
/// Sends `FetchDone` on the channel when complete.
pub fn request_fetch(
    tx: &UnboundedSender<WeatherServiceMessage>,
    provider: Arc<WeatherProvider>,
    city: String,
) {
    let tx = tx.clone();
    let runtime = match tokio::runtime::Handle::try_current() {
        Ok(r) => r,
        Err(_) => {
            let _ = tx.send(WeatherServiceMessage::FetchDone {
                city,
                result: Err(WeatherServiceError::NotInitialized),
            });
            return;
        }
    };

    runtime.spawn(async move {
        let result = provider
            .fetch(&city)
            .await
            .map_err(WeatherServiceError::from);
        let _ = tx.send(WeatherServiceMessage::FetchDone { city, result });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weather_error_display() {
        assert!(format!("{}", WeatherServiceError::Network("timeout".into())).contains("Weather"));
        assert!(format!("{}", WeatherServiceError::NotFound("Atlantis".into())).contains("Atlantis"));
        assert!(format!("{}", WeatherServiceError::NotInitialized).contains("not initialized"));
    }

    #[test]
    fn provider_errors_are_classified() {
        assert_eq!(
            WeatherServiceError::from(WeatherError::MissingApiKey),
            WeatherServiceError::Unauthorized
        );
        assert_eq!(
            WeatherServiceError::from(WeatherError::CityNotFound("X".into())),
            WeatherServiceError::NotFound("X".into())
        );
        assert!(matches!(
            WeatherServiceError::from(WeatherError::Parse("bad".into())),
            WeatherServiceError::Network(_)
        ));
    }
}
