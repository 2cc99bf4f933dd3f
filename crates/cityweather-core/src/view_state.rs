//! Page-level view state machine (listing vs. weather detail).
//!
//! There is no transition back to `Listing`; the detail view is terminal
//! for the lifetime of the session.

/// Which screen the application is showing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Listing,
    Detail(String),
}

impl ViewState {
    /// True while the city table is on screen.
    pub fn is_listing(&self) -> bool {
        matches!(self, ViewState::Listing)
    }

    /// City shown by the detail view, if any.
    pub fn selected_city(&self) -> Option<&str> {
        match self {
            ViewState::Listing => None,
            ViewState::Detail(name) => Some(name),
        }
    }

    /// State after a primary click on a row.
    ///
    /// Only valid from `Listing`; once in `Detail` the state does not change.
    pub fn on_primary_select(self, city_name: &str) -> Self {
        match self {
            ViewState::Listing => ViewState::Detail(city_name.to_string()),
            detail @ ViewState::Detail(_) => detail,
        }
    }
}
