pub mod app;
pub mod config;
pub mod error;
pub mod view_state;

pub use app::App;
pub use config::{CitiesConfig, Config, UiConfig, Units, ValidationResult, WeatherConfig};
pub use error::{AppError, CityError, WeatherError};
pub use view_state::ViewState;

use anyhow::Result;

/// Initialize logging for the application.
///
/// Output goes to stderr so it never interleaves with the rendered table.
/// If a global subscriber is already installed it is kept, and the failure
/// is reported through it.
pub fn init() -> Result<()> {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    if let Err(e) = installed {
        tracing::warn!("Logging already initialized, keeping existing subscriber: {}", e);
        return Ok(());
    }

    tracing::info!("CityWeather core initialized");
    Ok(())
}
