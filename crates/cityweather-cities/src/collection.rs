use crate::types::City;

/// Append-only list of every city loaded so far, in arrival order.
#[derive(Debug, Clone, Default)]
pub struct CityCollection {
    cities: Vec<City>,
}

impl CityCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one page. Earlier entries are never touched.
    pub fn append(&mut self, page: impl IntoIterator<Item = City>) -> usize {
        let before = self.cities.len();
        self.cities.extend(page);
        self.cities.len() - before
    }

    pub fn as_slice(&self) -> &[City] {
        &self.cities
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}
