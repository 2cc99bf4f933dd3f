//! Plain-text rendering of the page controller.

use cityweather_cities::SortKey;
use cityweather_core::ViewState;
use cityweather_weather::{Backdrop, WeatherData};

use crate::models::{CityTableModel, DetailModel, PageController, UiSettings};

const NAME_WIDTH: usize = 32;
const COUNTRY_WIDTH: usize = 24;

/// Render whichever screen the controller is on.
pub fn render(controller: &PageController) -> String {
    let mut lines = match controller.view_state() {
        ViewState::Listing => render_listing(controller.table()),
        ViewState::Detail(city) => match controller.detail() {
            Some(detail) => render_detail(
                detail,
                controller.store().get_for(city),
                controller.settings(),
            ),
            None => vec![format!("{} Weather", city)],
        },
    };
    if let Some(notice) = controller.notice() {
        lines.push(notice.to_string());
    }
    lines.join("\n")
}

pub fn render_listing(table: &CityTableModel) -> Vec<String> {
    let mut lines = vec![format!("Search: {}", table.search_term())];

    for (i, city) in table.suggestions().iter().enumerate() {
        lines.push(format!("  [{}] {}", i + 1, city.name));
    }

    let header = |key: SortKey| format!("{} {}", key.label(), table.sort_indicator(key).symbol());
    lines.push(format!(
        "{:>6}  {:<nw$} {:<cw$} {}",
        "#",
        header(SortKey::Name),
        header(SortKey::Country),
        header(SortKey::Timezone),
        nw = NAME_WIDTH,
        cw = COUNTRY_WIDTH,
    ));

    for (index, city) in table.visible_rows() {
        lines.push(format!(
            "{:>6}  {:<nw$} {:<cw$} {}",
            index + 1,
            city.name,
            city.country,
            city.timezone,
            nw = NAME_WIDTH,
            cw = COUNTRY_WIDTH,
        ));
    }

    let viewport = table.viewport();
    let shown = table.rows().len();
    let last_visible = (viewport.offset + viewport.rows).min(shown);
    lines.push(format!(
        "Rows {}-{} of {} ({} loaded, page {})",
        if shown == 0 { 0 } else { viewport.offset + 1 },
        last_visible,
        shown,
        table.loaded_count(),
        table.cursor(),
    ));
    lines
}

pub fn render_detail(
    detail: &DetailModel,
    weather: Option<&WeatherData>,
    settings: &UiSettings,
) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(message) = detail.error_message() {
        lines.push(message.to_string());
        return lines;
    }

    let Some(data) = weather else {
        lines.push(format!("{} Weather", detail.city()));
        return lines;
    };

    let backdrop = Backdrop::for_condition(
        data.condition(),
        settings.viewport_width,
        settings.narrow_width_threshold,
    );
    lines.push(format!(
        "[{} | {} {} {}]",
        backdrop.image, backdrop.size, backdrop.position, backdrop.repeat
    ));
    lines.push(format!("{} Weather", detail.city()));
    lines.push(format!(
        "Temperature: {} {}",
        data.readings.temp,
        data.units.temperature_symbol()
    ));
    lines.push(format!("Humidity: {}%", data.readings.humidity));
    lines.push(format!("Pressure: {} hPa", data.readings.pressure));
    lines.push(format!(
        "Weather: {} - {}",
        data.conditions.main, data.conditions.description
    ));
    lines
}
