//! Background styling for the weather detail view.

use crate::types::WeatherCondition;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Backdrop {
    pub image: &'static str,
    pub size: &'static str,
    pub position: &'static str,
    pub repeat: &'static str,
}

impl Backdrop {
    /// Backdrop for `condition` on a viewport `width` units wide.
    pub fn for_condition(
        condition: WeatherCondition,
        width: u32,
        narrow_threshold: u32,
    ) -> Self {
        let size = if width <= narrow_threshold { "420%" } else { "220%" };
        Self {
            image: condition.background_image(),
            size,
            position: "center",
            repeat: "repeat",
        }
    }
}
