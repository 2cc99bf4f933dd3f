use crate::types::{CurrentWeatherResponse, Units, WeatherData, WeatherError};
use chrono::Utc;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;
use url::Url;

#[derive(Clone)]
pub struct WeatherProvider {
    client: Arc<Client>,
    endpoint: Url,
    api_key: Option<String>,
    units: Units,
}

impl WeatherProvider {
    pub fn new(
        endpoint: &str,
        api_key: Option<String>,
        units: Units,
        timeout: Duration,
    ) -> Result<Self, WeatherError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client: Arc::new(client),
            endpoint: Url::parse(endpoint)?,
            api_key,
            units,
        })
    }

    pub fn units(&self) -> Units {
        self.units
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Fetch current weather for a city by name.
    #[instrument(skip(self), level = "info")]
    pub async fn fetch(&self, city: &str) -> Result<WeatherData, WeatherError> {
        let api_key = self.api_key.as_deref().ok_or(WeatherError::MissingApiKey)?;

        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[
                ("q", city),
                ("appid", api_key),
                ("units", self.units.query_value()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(match status.as_u16() {
                401 => WeatherError::InvalidApiKey,
                404 => WeatherError::CityNotFound(city.to_string()),
                code => WeatherError::Api {
                    status: code,
                    message,
                },
            });
        }

        let bytes = response.bytes().await?;
        let body: CurrentWeatherResponse =
            serde_json::from_slice(&bytes).map_err(|e| WeatherError::Parse(e.to_string()))?;

        let conditions = body
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| WeatherError::Parse("response has no weather conditions".into()))?;

        tracing::debug!(condition = %conditions.main, "Weather fetched");

        Ok(WeatherData {
            city: city.to_string(),
            readings: body.main,
            conditions,
            units: self.units,
            fetched_at: Utc::now(),
        })
    }
}

impl std::fmt::Debug for WeatherProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherProvider")
            .field("endpoint", &self.endpoint.as_str())
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("units", &self.units)
            .finish()
    }
}
