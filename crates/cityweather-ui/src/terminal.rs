//! Line-oriented event loop.
//!
//! Reads commands from stdin and service results from the channels, feeds
//! both to the `PageController`, dispatches the resulting effects and
//! redraws after every event.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use cityweather_cities::CityClient;
use cityweather_core::Config;
use cityweather_weather::{Units, WeatherProvider};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::{self, UnboundedSender};

use crate::command::{parse_command, Command, CommandError, HELP};
use crate::models::{PageController, UiSettings};
use crate::render::render;
use crate::services::{CityServiceMessage, ServiceHub, WeatherServiceMessage};

pub fn weather_units(units: cityweather_core::Units) -> Units {
    match units {
        cityweather_core::Units::Standard => Units::Standard,
        cityweather_core::Units::Metric => Units::Metric,
        cityweather_core::Units::Imperial => Units::Imperial,
    }
}

/// Build the HTTP clients from configuration.
pub fn build_hub(
    config: &Config,
    city_tx: UnboundedSender<CityServiceMessage>,
    weather_tx: UnboundedSender<WeatherServiceMessage>,
) -> Result<ServiceHub> {
    let city_client = CityClient::new(
        &config.cities.endpoint,
        &config.cities.dataset,
        config.cities.page_size,
        Duration::from_secs(config.cities.timeout_secs),
    )
    .context("Failed to create city client")?;

    let api_key = config.weather.resolved_api_key();
    if api_key.is_none() {
        tracing::warn!("No weather API key configured; weather lookups will fail");
    }
    let weather_provider = WeatherProvider::new(
        &config.weather.endpoint,
        api_key,
        weather_units(config.weather.units),
        Duration::from_secs(config.weather.timeout_secs),
    )
    .context("Failed to create weather provider")?;

    Ok(ServiceHub {
        city_client: Arc::new(city_client),
        weather_provider: Arc::new(weather_provider),
        city_tx,
        weather_tx,
    })
}

/// Run the front end until `quit` or end of input.
pub async fn run(config: Arc<Config>) -> Result<()> {
    let (city_tx, mut city_rx) = mpsc::unbounded_channel();
    let (weather_tx, mut weather_rx) = mpsc::unbounded_channel();
    let hub = build_hub(&config, city_tx, weather_tx)?;

    let settings = UiSettings::from_config(&config.ui, weather_units(config.weather.units));
    let mut controller = PageController::new(settings);

    println!("CityWeather - type `help` for commands");
    hub.dispatch(controller.mount());
    println!("{}", render(&controller));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read input")? else {
                    tracing::info!("End of input");
                    break;
                };
                match parse_command(&line) {
                    Ok(Command::Quit) => break,
                    Ok(Command::Help) => {
                        println!("{}", HELP);
                        continue;
                    }
                    Ok(command) => hub.dispatch(controller.handle_command(command)),
                    Err(CommandError::Empty) => {}
                    Err(e) => {
                        println!("{}", e);
                        continue;
                    }
                }
            }
            Some(message) = city_rx.recv() => {
                hub.dispatch(controller.on_city_message(message));
            }
            Some(message) = weather_rx.recv() => {
                controller.on_weather_message(message);
            }
        }

        println!("{}", render(&controller));
    }

    tracing::info!("Front end stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn units_follow_config() {
        assert_eq!(weather_units(cityweather_core::Units::Imperial), Units::Imperial);
        assert_eq!(weather_units(cityweather_core::Units::default()), Units::Metric);
    }

    #[tokio::test]
    async fn hub_builds_from_default_config() {
        let (city_tx, _city_rx) = mpsc::unbounded_channel();
        let (weather_tx, _weather_rx) = mpsc::unbounded_channel();
        let hub = build_hub(&Config::default(), city_tx, weather_tx).unwrap();
        assert_eq!(hub.city_client.page_size(), 1000);
    }

    #[test]
    fn bad_endpoint_is_reported() {
        let mut config = Config::default();
        config.cities.endpoint = "nope".into();
        let (city_tx, _city_rx) = mpsc::unbounded_channel();
        let (weather_tx, _weather_rx) = mpsc::unbounded_channel();
        assert!(build_hub(&config, city_tx, weather_tx).is_err());
    }
}
