use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use cityweather_core::{App, Config};

#[derive(Parser)]
#[command(name = "cityweather")]
#[command(about = "Browse world cities and check their current weather", long_about = None)]
#[command(version)]
struct Args {
    /// Config file (defaults to the user config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Cities requested per page
    #[arg(long)]
    page_size: Option<u32>,

    /// OpenWeatherMap API key (overrides config and OPENWEATHER_API_KEY)
    #[arg(long)]
    api_key: Option<String>,

    /// Listing rows shown at once
    #[arg(long)]
    viewport_rows: Option<usize>,

    /// Layout width used to size the weather backdrop
    #[arg(long)]
    width: Option<u32>,
}

impl Args {
    fn apply(self, config: &mut Config) {
        if let Some(page_size) = self.page_size {
            config.cities.page_size = page_size;
        }
        if let Some(api_key) = self.api_key {
            config.weather.api_key = Some(api_key);
        }
        if let Some(rows) = self.viewport_rows {
            config.ui.viewport_rows = rows;
        }
        if let Some(width) = self.width {
            config.ui.viewport_width = width;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize core
    cityweather_core::init()?;

    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    args.apply(&mut config);

    let mut app = App::new(config);
    app.initialize()?;

    tracing::info!("CityWeather started");

    let result = cityweather_ui::run(app.shared_config()).await;

    // Graceful shutdown
    app.shutdown()?;

    result
}
