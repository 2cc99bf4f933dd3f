//! City listing for CityWeather
//!
//! Loads pages of cities from the geonames records API, accumulates them in
//! an append-only collection, and derives the filtered, suggested and sorted
//! views the listing renders.

pub mod client;
pub mod collection;
pub mod cursor;
pub mod derive;
pub mod error;
pub mod scroll;
pub mod types;

pub use client::CityClient;
pub use collection::CityCollection;
pub use cursor::PageCursor;
pub use derive::{
    derive_exact_matches, derive_filtered_view, derive_sorted_view, derive_suggestions,
    SUGGESTION_LIMIT,
};
pub use error::CityError;
pub use scroll::{BoundaryEvent, RowKey, ScrollBoundaryWatcher};
pub use types::*;
