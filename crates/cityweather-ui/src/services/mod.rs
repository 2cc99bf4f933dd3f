pub mod city_service;
pub mod weather_service;

use std::sync::Arc;

use cityweather_cities::CityClient;
use cityweather_weather::WeatherProvider;
use tokio::sync::mpsc::UnboundedSender;

use crate::models::Effect;

pub use city_service::{request_page, CityServiceError, CityServiceMessage};
pub use weather_service::{
    request_fetch as request_weather_fetch, WeatherServiceError, WeatherServiceMessage,
};

/// Clients and channel senders used to carry out controller effects.
#[derive(Clone)]
pub struct ServiceHub {
    pub city_client: Arc<CityClient>,
    pub weather_provider: Arc<WeatherProvider>,
    pub city_tx: UnboundedSender<CityServiceMessage>,
    pub weather_tx: UnboundedSender<WeatherServiceMessage>,
}

impl ServiceHub {
    /// Start the work each effect asks for. Returns immediately.
    pub fn dispatch(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchPage(cursor) => {
                    request_page(&self.city_tx, self.city_client.clone(), cursor);
                }
                Effect::FetchWeather(city) => {
                    request_weather_fetch(&self.weather_tx, self.weather_provider.clone(), city);
                }
                Effect::OpenExternal(link) => open_external(&link),
            }
        }
    }
}

/// Open absolute links in the system browser; relative ones are only logged.
fn open_external(link: &str) {
    match url::Url::parse(link) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {
            if let Err(e) = webbrowser::open(url.as_str()) {
                tracing::warn!("Failed to open {} in browser: {}", url, e);
            }
        }
        _ => tracing::info!("Secondary selection link: {}", link),
    }
}
