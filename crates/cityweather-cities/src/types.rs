use serde::{Deserialize, Serialize};

/// A single row of the listing.
///
/// `name` is the only identity a city has; two pages can legitimately carry
/// the same name and both rows are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    pub country: String,
    pub timezone: String,
}

impl City {
    pub fn new(
        name: impl Into<String>,
        country: impl Into<String>,
        timezone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            country: country.into(),
            timezone: timezone.into(),
        }
    }

    /// Raw value of the given column.
    pub fn field(&self, key: SortKey) -> &str {
        match key {
            SortKey::Name => &self.name,
            SortKey::Country => &self.country,
            SortKey::Timezone => &self.timezone,
        }
    }
}

/// Sortable column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Name,
    Country,
    Timezone,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Name, SortKey::Country, SortKey::Timezone];

    /// Column header label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "City Name",
            Self::Country => "Country",
            Self::Timezone => "Timezone",
        }
    }
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" | "city" => Ok(Self::Name),
            "country" => Ok(Self::Country),
            "timezone" | "tz" => Ok(Self::Timezone),
            other => Err(format!("unknown column: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Header indicator for one column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
    Unsorted,
    Ascending,
    Descending,
}

impl SortIndicator {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Unsorted => "↕",
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }
}

/// Last sort the user asked for. `None` until a column is clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    pub active: Option<(SortKey, SortDirection)>,
}

impl SortState {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self {
            active: Some((key, direction)),
        }
    }

    pub fn key(&self) -> Option<SortKey> {
        self.active.map(|(key, _)| key)
    }

    pub fn direction(&self) -> Option<SortDirection> {
        self.active.map(|(_, direction)| direction)
    }

    /// State after clicking `key`.
    ///
    /// Ascending on the same key flips to descending; anything else starts
    /// over at ascending on the clicked key.
    pub fn toggled(self, key: SortKey) -> Self {
        match self.active {
            Some((current, SortDirection::Ascending)) if current == key => {
                Self::new(key, SortDirection::Descending)
            }
            _ => Self::new(key, SortDirection::Ascending),
        }
    }

    pub fn indicator(&self, key: SortKey) -> SortIndicator {
        match self.active {
            Some((current, SortDirection::Ascending)) if current == key => SortIndicator::Ascending,
            Some((current, SortDirection::Descending)) if current == key => {
                SortIndicator::Descending
            }
            _ => SortIndicator::Unsorted,
        }
    }
}

/// Records search response envelope
#[derive(Debug, Deserialize)]
pub(crate) struct RecordsResponse {
    #[serde(default)]
    pub records: Vec<Record>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Record {
    #[serde(default)]
    pub fields: RecordFields,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RecordFields {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub cou_name_en: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
}

impl From<RecordFields> for City {
    fn from(fields: RecordFields) -> Self {
        Self {
            name: fields.name.unwrap_or_default(),
            country: fields.cou_name_en.unwrap_or_default(),
            timezone: fields.timezone.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_from_unsorted_is_ascending() {
        let state = SortState::default().toggled(SortKey::Name);
        assert_eq!(state, SortState::new(SortKey::Name, SortDirection::Ascending));
    }

    #[test]
    fn test_toggle_same_key_flips_to_descending() {
        let state = SortState::new(SortKey::Name, SortDirection::Ascending).toggled(SortKey::Name);
        assert_eq!(state.direction(), Some(SortDirection::Descending));
    }

    #[test]
    fn test_toggle_descending_resets_to_ascending() {
        let state = SortState::new(SortKey::Name, SortDirection::Descending).toggled(SortKey::Name);
        assert_eq!(state, SortState::new(SortKey::Name, SortDirection::Ascending));
    }

    #[test]
    fn test_toggle_other_key_resets_to_ascending() {
        let state =
            SortState::new(SortKey::Name, SortDirection::Ascending).toggled(SortKey::Country);
        assert_eq!(state, SortState::new(SortKey::Country, SortDirection::Ascending));
    }

    #[test]
    fn test_indicators() {
        let state = SortState::new(SortKey::Country, SortDirection::Descending);
        assert_eq!(state.indicator(SortKey::Country), SortIndicator::Descending);
        assert_eq!(state.indicator(SortKey::Name), SortIndicator::Unsorted);
        assert_eq!(SortState::default().indicator(SortKey::Timezone), SortIndicator::Unsorted);
    }

    #[test]
    fn test_sort_key_parse() {
        assert_eq!("Name".parse::<SortKey>(), Ok(SortKey::Name));
        assert_eq!("tz".parse::<SortKey>(), Ok(SortKey::Timezone));
        assert!("population".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_record_mapping() {
        let json = serde_json::json!({
            "records": [
                {"fields": {"name": "Paris", "cou_name_en": "France", "timezone": "Europe/Paris", "population": 2138551}},
                {"fields": {"name": "Nowhere"}}
            ]
        });
        let response: RecordsResponse = serde_json::from_value(json).unwrap();
        let cities: Vec<City> = response.records.into_iter().map(|r| r.fields.into()).collect();

        assert_eq!(cities[0], City::new("Paris", "France", "Europe/Paris"));
        assert_eq!(cities[1], City::new("Nowhere", "", ""));
    }
}
