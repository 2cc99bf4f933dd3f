//! Owned holder for the most recent weather result.
//!
//! The page controller owns the store. The detail view only ever sees a
//! shared reference; the fetch completion path is the single writer.

use crate::types::WeatherData;

#[derive(Debug, Default)]
pub struct WeatherStore {
    data: Option<WeatherData>,
}

impl WeatherStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<&WeatherData> {
        self.data.as_ref()
    }

    /// Data for `city`, if that is what the store currently holds.
    pub fn get_for(&self, city: &str) -> Option<&WeatherData> {
        self.data.as_ref().filter(|d| d.city == city)
    }

    pub fn update(&mut self, data: WeatherData) {
        tracing::debug!(city = %data.city, "Weather store updated");
        self.data = Some(data);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Conditions, Readings, Units};
    use chrono::Utc;

    fn sample(city: &str) -> WeatherData {
        WeatherData {
            city: city.to_string(),
            readings: Readings {
                temp: 20.0,
                humidity: 50.0,
                pressure: 1013.0,
            },
            conditions: Conditions {
                main: "Clear".into(),
                description: "clear sky".into(),
            },
            units: Units::Metric,
            fetched_at: Utc::now(),
        }
    }

    #[test]
    fn empty_by_default() {
        let store = WeatherStore::new();
        assert!(store.get().is_none());
    }

    #[test]
    fn update_replaces_previous() {
        let mut store = WeatherStore::new();
        store.update(sample("Paris"));
        store.update(sample("Parma"));
        assert_eq!(store.get().map(|d| d.city.as_str()), Some("Parma"));
        assert!(store.get_for("Paris").is_none());
        assert!(store.get_for("Parma").is_some());
    }
}
