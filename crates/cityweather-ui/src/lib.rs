//! Terminal front end for CityWeather.
//!
//! `models` hold all listing and detail state and are driven by discrete
//! events; `services` run fetches on the tokio runtime and post results back
//! over channels; `terminal` owns the event loop that ties them together.

pub mod command;
pub mod error_mapping;
pub mod models;
pub mod render;
pub mod services;
pub mod terminal;

pub use command::{parse_command, Command, CommandError};
pub use models::{Effect, PageController, UiSettings};
pub use terminal::run;
