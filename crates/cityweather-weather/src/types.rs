use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Measurement system passed to the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    Standard,
    #[default]
    Metric,
    Imperial,
}

impl Units {
    /// Value of the `units` query parameter
    pub fn query_value(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Metric => "metric",
            Self::Imperial => "imperial",
        }
    }

    pub fn temperature_symbol(&self) -> &'static str {
        match self {
            Self::Standard => "K",
            Self::Metric => "°C",
            Self::Imperial => "°F",
        }
    }
}

/// Condition groups the detail view distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    Clear,
    Clouds,
    Rain,
    Mist,
    #[default]
    Other,
}

impl WeatherCondition {
    /// Map the API's `weather[].main` group name
    pub fn from_main(main: &str) -> Self {
        match main {
            "Clear" => Self::Clear,
            "Clouds" => Self::Clouds,
            "Rain" => Self::Rain,
            "Mist" => Self::Mist,
            _ => Self::Other,
        }
    }

    /// Background image file for this condition
    pub fn background_image(&self) -> &'static str {
        match self {
            Self::Clear => "ClearSky.jpg",
            Self::Clouds => "Clouds.jpg",
            Self::Rain | Self::Mist => "Rainy.jpg",
            Self::Other => "Sunny.jpg",
        }
    }
}

/// `main` block of the response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Readings {
    pub temp: f64,
    pub humidity: f64,
    pub pressure: f64,
}

/// One entry of the response's `weather` array
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conditions {
    pub main: String,
    pub description: String,
}

/// Raw current-weather response; extra fields are ignored
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CurrentWeatherResponse {
    pub main: Readings,
    #[serde(default)]
    pub weather: Vec<Conditions>,
}

/// Current weather for one city
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherData {
    pub city: String,
    pub readings: Readings,
    /// First entry of the `weather` array
    pub conditions: Conditions,
    pub units: Units,
    pub fetched_at: DateTime<Utc>,
}

impl WeatherData {
    pub fn condition(&self) -> WeatherCondition {
        WeatherCondition::from_main(&self.conditions.main)
    }
}

/// Weather provider errors
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
    #[error("City not found: {0}")]
    CityNotFound(String),
    #[error("Invalid API key")]
    InvalidApiKey,
    #[error("No API key configured")]
    MissingApiKey,
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
    #[error("Parse error: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_mapping() {
        assert_eq!(WeatherCondition::from_main("Clear"), WeatherCondition::Clear);
        assert_eq!(WeatherCondition::from_main("Clouds"), WeatherCondition::Clouds);
        assert_eq!(WeatherCondition::from_main("Rain"), WeatherCondition::Rain);
        assert_eq!(WeatherCondition::from_main("Mist"), WeatherCondition::Mist);
        assert_eq!(WeatherCondition::from_main("Snow"), WeatherCondition::Other);
        assert_eq!(WeatherCondition::from_main("clear"), WeatherCondition::Other);
    }

    #[test]
    fn test_background_images() {
        assert_eq!(WeatherCondition::Clear.background_image(), "ClearSky.jpg");
        assert_eq!(WeatherCondition::Clouds.background_image(), "Clouds.jpg");
        assert_eq!(WeatherCondition::Rain.background_image(), "Rainy.jpg");
        assert_eq!(WeatherCondition::Mist.background_image(), "Rainy.jpg");
        assert_eq!(WeatherCondition::Other.background_image(), "Sunny.jpg");
    }

    #[test]
    fn test_units() {
        assert_eq!(Units::default(), Units::Metric);
        assert_eq!(Units::Metric.query_value(), "metric");
        assert_eq!(Units::Metric.temperature_symbol(), "°C");
        assert_eq!(Units::Imperial.temperature_symbol(), "°F");
    }

    #[test]
    fn test_response_ignores_extra_fields() {
        let json = serde_json::json!({
            "coord": {"lon": 2.35, "lat": 48.85},
            "weather": [{"id": 800, "main": "Clear", "description": "clear sky", "icon": "01d"}],
            "main": {"temp": 18.5, "feels_like": 17.9, "humidity": 60, "pressure": 1015},
            "name": "Paris"
        });
        let response: CurrentWeatherResponse = serde_json::from_value(json).unwrap();
        assert_eq!(response.main.humidity, 60.0);
        assert_eq!(response.weather[0].description, "clear sky");
    }
}
