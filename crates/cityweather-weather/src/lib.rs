//! Weather service for CityWeather
//!
//! Provides current conditions for a named city via the OpenWeatherMap API,
//! an owned store for the latest result, and backdrop selection for the
//! detail view.

pub mod backdrop;
pub mod provider;
pub mod store;
pub mod types;

pub use backdrop::Backdrop;
pub use provider::WeatherProvider;
pub use store::WeatherStore;
pub use types::*;
