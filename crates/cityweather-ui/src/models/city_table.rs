//! Listing state: search, suggestions, sort, infinite scroll and row selection.
//!
//! Every handler updates state, re-derives the views, re-attaches the scroll
//! watcher to the new last row and returns the effects the event loop must
//! carry out.

use cityweather_cities::{
    derive_exact_matches, derive_filtered_view, derive_sorted_view, derive_suggestions, City,
    CityCollection, PageCursor, RowKey, ScrollBoundaryWatcher, SortIndicator, SortKey, SortState,
};

use crate::services::CityServiceError;

/// Work the listing asks the event loop to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEffect {
    FetchPage(PageCursor),
    /// Primary click on a row
    OpenDetail(String),
    /// Secondary click on a row
    OpenExternal(String),
}

/// Window of rendered rows the user can currently see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub offset: usize,
    pub rows: usize,
}

impl Viewport {
    pub fn contains(&self, index: usize) -> bool {
        index >= self.offset && index < self.offset + self.rows
    }
}

#[derive(Debug)]
pub struct CityTableModel {
    collection: CityCollection,
    /// Filtered view, reordered in place by sort clicks
    view: Vec<City>,
    suggestions: Vec<City>,
    search_term: String,
    suggestion_clicked: bool,
    sort: SortState,
    cursor: PageCursor,
    watcher: ScrollBoundaryWatcher,
    viewport: Viewport,
    suggestion_limit: usize,
    detail_url_base: String,
}

impl CityTableModel {
    pub fn new(viewport_rows: usize, suggestion_limit: usize, detail_url_base: &str) -> Self {
        let mut watcher = ScrollBoundaryWatcher::new();
        watcher.on_boundary_reached(|event| {
            tracing::debug!(row = %event.row.name, index = event.row.index, "Last row visible");
        });

        Self {
            collection: CityCollection::new(),
            view: Vec::new(),
            suggestions: Vec::new(),
            search_term: String::new(),
            suggestion_clicked: false,
            sort: SortState::default(),
            cursor: PageCursor::FIRST,
            watcher,
            viewport: Viewport {
                offset: 0,
                rows: viewport_rows.max(1),
            },
            suggestion_limit,
            detail_url_base: detail_url_base.to_string(),
        }
    }

    /// Initial page request.
    pub fn mount(&mut self) -> Vec<TableEffect> {
        tracing::info!(page = self.cursor.page(), "City table mounted");
        vec![TableEffect::FetchPage(self.cursor)]
    }

    /// The user typed into the search box.
    pub fn on_search_input(&mut self, term: &str) -> Vec<TableEffect> {
        self.search_term = term.to_string();
        self.suggestion_clicked = false;
        self.viewport.offset = 0;
        self.recompute();
        self.after_render()
    }

    /// The user clicked suggestion `index` (0-based).
    pub fn on_suggestion_click(&mut self, index: usize) -> Vec<TableEffect> {
        let Some(name) = self.suggestions.get(index).map(|c| c.name.clone()) else {
            tracing::warn!(index, "No suggestion at index");
            return Vec::new();
        };

        self.search_term = name;
        self.suggestion_clicked = true;
        self.viewport.offset = 0;
        self.recompute();
        self.after_render()
    }

    /// The user clicked a column header.
    pub fn on_sort(&mut self, key: SortKey) -> Vec<TableEffect> {
        self.sort = self.sort.toggled(key);
        self.view = derive_sorted_view(&self.view, self.sort);
        tracing::debug!(sort = ?self.sort, "Sorted city view");
        self.after_render()
    }

    /// A page request finished. Rows are appended in arrival order.
    pub fn on_page_loaded(
        &mut self,
        cursor: PageCursor,
        result: Result<Vec<City>, CityServiceError>,
    ) -> Vec<TableEffect> {
        match result {
            Ok(page) => {
                let added = self.collection.append(page);
                tracing::info!(
                    page = cursor.page(),
                    added,
                    total = self.collection.len(),
                    "City page appended"
                );
                self.recompute();
                self.after_render()
            }
            Err(e) => {
                let app_error = cityweather_core::AppError::from(e);
                tracing::error!(page = cursor.page(), "Error fetching city data: {}", app_error);
                // No rows arrived, so the last row is unchanged; let the next
                // scroll onto it request the following page.
                self.watcher.rearm();
                Vec::new()
            }
        }
    }

    /// Move the viewport by `delta` rows and report what became visible.
    pub fn scroll_by(&mut self, delta: isize) -> Vec<TableEffect> {
        let target = if delta.is_negative() {
            self.viewport.offset.saturating_sub(delta.unsigned_abs())
        } else {
            self.viewport.offset.saturating_add(delta.unsigned_abs())
        };
        self.viewport.offset = target.min(self.max_offset());
        self.check_boundary()
    }

    /// Primary click on rendered row `index` (0-based).
    pub fn on_row_primary(&self, index: usize) -> Vec<TableEffect> {
        match self.view.get(index) {
            Some(city) => vec![TableEffect::OpenDetail(city.name.clone())],
            None => Vec::new(),
        }
    }

    /// Secondary click on rendered row `index` (0-based).
    pub fn on_row_secondary(&self, index: usize) -> Vec<TableEffect> {
        match self.view.get(index) {
            Some(city) => vec![TableEffect::OpenExternal(format!(
                "{}{}",
                self.detail_url_base, city.name
            ))],
            None => Vec::new(),
        }
    }

    pub fn rows(&self) -> &[City] {
        &self.view
    }

    /// Rows inside the viewport with their absolute index.
    pub fn visible_rows(&self) -> impl Iterator<Item = (usize, &City)> {
        self.view
            .iter()
            .enumerate()
            .skip(self.viewport.offset)
            .take(self.viewport.rows)
    }

    pub fn suggestions(&self) -> &[City] {
        &self.suggestions
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn sort_state(&self) -> SortState {
        self.sort
    }

    /// Header indicator for `key`, taken from the last sort click.
    pub fn sort_indicator(&self, key: SortKey) -> SortIndicator {
        self.sort.indicator(key)
    }

    pub fn cursor(&self) -> PageCursor {
        self.cursor
    }

    pub fn loaded_count(&self) -> usize {
        self.collection.len()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn recompute(&mut self) {
        let source = self.collection.as_slice();
        self.view = if self.suggestion_clicked {
            derive_exact_matches(source, &self.search_term)
        } else {
            derive_filtered_view(source, &self.search_term)
        };
        self.suggestions = derive_suggestions(
            &self.view,
            &self.search_term,
            self.suggestion_clicked,
            self.suggestion_limit,
        );
    }

    fn max_offset(&self) -> usize {
        self.view.len().saturating_sub(self.viewport.rows)
    }

    /// Re-attach the watcher to the current last row, then check visibility.
    fn after_render(&mut self) -> Vec<TableEffect> {
        self.viewport.offset = self.viewport.offset.min(self.max_offset());
        let last = self
            .view
            .len()
            .checked_sub(1)
            .map(|index| RowKey::new(self.view[index].name.clone(), index));
        self.watcher.observe(last);
        self.check_boundary()
    }

    fn check_boundary(&mut self) -> Vec<TableEffect> {
        let Some(boundary) = self.watcher.boundary().cloned() else {
            return Vec::new();
        };
        if !self.viewport.contains(boundary.index) {
            return Vec::new();
        }

        match self.watcher.report_visible(&boundary) {
            Some(_) => {
                self.cursor = self.cursor.next();
                tracing::debug!(page = self.cursor.page(), "Scroll boundary reached");
                vec![TableEffect::FetchPage(self.cursor)]
            }
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cityweather_cities::SortDirection;

    fn paris() -> City {
        City::new("Paris", "France", "Europe/Paris")
    }

    fn parma() -> City {
        City::new("Parma", "Italy", "Europe/Rome")
    }

    fn numbered(prefix: &str, n: usize) -> Vec<City> {
        (0..n)
            .map(|i| City::new(format!("{} {:03}", prefix, i), "Country", "Etc/UTC"))
            .collect()
    }

    /// Table with a large first page so the boundary is off screen.
    fn loaded_table() -> CityTableModel {
        let mut table = CityTableModel::new(5, 5, "/weather/");
        table.mount();
        let mut page = vec![paris(), parma()];
        page.extend(numbered("Town", 20));
        let effects = table.on_page_loaded(PageCursor::FIRST, Ok(page));
        assert!(effects.is_empty());
        table
    }

    #[test]
    fn mount_requests_first_page() {
        let mut table = CityTableModel::new(5, 5, "/weather/");
        assert_eq!(table.mount(), vec![TableEffect::FetchPage(PageCursor::FIRST)]);
    }

    #[test]
    fn search_scenario_keeps_order_and_suggests() {
        let mut table = CityTableModel::new(5, 5, "/weather/");
        table.on_page_loaded(PageCursor::FIRST, Ok(vec![paris(), parma()]));

        table.on_search_input("Par");

        assert_eq!(table.rows(), &[paris(), parma()]);
        assert_eq!(table.suggestions(), &[paris(), parma()]);
    }

    #[test]
    fn empty_search_shows_everything_without_suggestions() {
        let mut table = loaded_table();
        table.on_search_input("par");
        table.on_search_input("");
        assert_eq!(table.rows().len(), 22);
        assert!(table.suggestions().is_empty());
    }

    #[test]
    fn suggestion_click_narrows_to_exact_name() {
        let mut table = loaded_table();
        table.on_page_loaded(
            PageCursor::FIRST.next(),
            Ok(vec![City::new("paris", "United States", "America/Chicago")]),
        );
        table.on_search_input("pari");
        assert_eq!(table.suggestions().len(), 2);

        table.on_suggestion_click(0);

        assert_eq!(table.search_term(), "Paris");
        assert!(table.suggestions().is_empty());
        assert_eq!(table.rows().len(), 2);
        assert!(table.rows().iter().all(|c| c.name.to_lowercase() == "paris"));
    }

    #[test]
    fn suggestions_stay_hidden_until_typing() {
        let mut table = loaded_table();
        table.on_search_input("Par");
        table.on_suggestion_click(1);
        assert_eq!(table.rows(), &[parma()]);

        table.on_page_loaded(PageCursor::FIRST.next(), Ok(vec![City::new("Parma", "US", "America/New_York")]));
        assert!(table.suggestions().is_empty());
        assert_eq!(table.rows().len(), 2);

        table.on_search_input("Parm");
        assert_eq!(table.suggestions().len(), 2);
    }

    #[test]
    fn invalid_suggestion_index_is_ignored() {
        let mut table = loaded_table();
        table.on_search_input("Par");
        assert!(table.on_suggestion_click(9).is_empty());
        assert_eq!(table.search_term(), "Par");
    }

    #[test]
    fn sort_toggles_and_resets() {
        let mut table = CityTableModel::new(5, 5, "/weather/");
        table.on_page_loaded(PageCursor::FIRST, Ok(vec![parma(), paris()]));

        table.on_sort(SortKey::Name);
        assert_eq!(table.rows(), &[paris(), parma()]);
        assert_eq!(table.sort_indicator(SortKey::Name), SortIndicator::Ascending);

        table.on_sort(SortKey::Name);
        assert_eq!(table.rows(), &[parma(), paris()]);
        assert_eq!(table.sort_indicator(SortKey::Name), SortIndicator::Descending);

        table.on_sort(SortKey::Country);
        assert_eq!(table.rows(), &[paris(), parma()]);
        assert_eq!(table.sort_indicator(SortKey::Country), SortIndicator::Ascending);
        assert_eq!(table.sort_indicator(SortKey::Name), SortIndicator::Unsorted);
    }

    #[test]
    fn refilter_drops_sorted_order() {
        let mut table = CityTableModel::new(5, 5, "/weather/");
        table.on_page_loaded(PageCursor::FIRST, Ok(vec![parma(), paris()]));
        table.on_sort(SortKey::Name);

        table.on_search_input("par");

        assert_eq!(table.rows(), &[parma(), paris()]);
        // The indicator follows the sort state, not the row order.
        assert_eq!(table.sort_indicator(SortKey::Name), SortIndicator::Ascending);
        assert_eq!(table.sort_indicator(SortKey::Country), SortIndicator::Unsorted);
        // The click memory survives, so the next click flips direction.
        table.on_sort(SortKey::Name);
        assert_eq!(table.sort_state().direction(), Some(SortDirection::Descending));
    }

    #[test]
    fn scrolling_to_last_row_requests_next_page_once() {
        let mut table = loaded_table();
        assert_eq!(table.cursor(), PageCursor::FIRST);

        let effects = table.scroll_by(100);
        let expected = PageCursor::FIRST.next();
        assert_eq!(effects, vec![TableEffect::FetchPage(expected)]);
        assert_eq!(table.cursor().page(), 2);
        assert_eq!(table.cursor().offset(1000), 2000);

        assert!(table.scroll_by(-1).is_empty());
        assert!(table.scroll_by(1).is_empty());
    }

    #[test]
    fn new_last_row_rearms_boundary() {
        let mut table = loaded_table();
        table.scroll_by(100);

        let effects = table.on_page_loaded(PageCursor::FIRST.next(), Ok(numbered("Village", 10)));
        assert!(effects.is_empty());
        assert_eq!(table.rows().len(), 32);

        let effects = table.scroll_by(100);
        assert_eq!(effects, vec![TableEffect::FetchPage(PageCursor::FIRST.next().next())]);
    }

    #[test]
    fn short_filtered_view_triggers_immediately() {
        let mut table = loaded_table();
        let effects = table.on_search_input("Parm");
        assert_eq!(effects, vec![TableEffect::FetchPage(PageCursor::FIRST.next())]);

        // Same last row: no second request.
        assert!(table.on_search_input("Parma").is_empty());
    }

    #[test]
    fn failed_page_leaves_collection_untouched() {
        let mut table = loaded_table();
        let before = table.rows().to_vec();

        let effects = table.on_page_loaded(
            PageCursor::FIRST.next(),
            Err(CityServiceError::Fetch {
                page: 2,
                message: "connection reset".into(),
            }),
        );

        assert!(effects.is_empty());
        assert_eq!(table.rows(), before.as_slice());
        assert_eq!(table.loaded_count(), 22);
    }

    #[test]
    fn scroll_after_failed_page_requests_following_page() {
        let mut table = loaded_table();
        let second = PageCursor::FIRST.next();
        assert_eq!(table.scroll_by(100), vec![TableEffect::FetchPage(second)]);

        table.on_page_loaded(
            second,
            Err(CityServiceError::Fetch {
                page: 2,
                message: "connection reset".into(),
            }),
        );

        assert!(table.scroll_by(-3).is_empty());
        assert_eq!(
            table.scroll_by(3),
            vec![TableEffect::FetchPage(second.next())]
        );
        assert_eq!(table.cursor().page(), 3);
        assert_eq!(table.loaded_count(), 22);
    }

    #[test]
    fn late_page_is_appended_in_arrival_order() {
        let mut table = loaded_table();
        let second = PageCursor::FIRST.next();
        let third = second.next();

        table.on_page_loaded(third, Ok(vec![City::new("Zagreb", "Croatia", "Europe/Zagreb")]));
        table.on_page_loaded(second, Ok(vec![City::new("Oslo", "Norway", "Europe/Oslo")]));

        let tail: Vec<&str> = table.rows()[22..].iter().map(|c| c.name.as_str()).collect();
        assert_eq!(tail, vec!["Zagreb", "Oslo"]);
    }

    #[test]
    fn row_clicks() {
        let table = loaded_table();
        assert_eq!(table.on_row_primary(1), vec![TableEffect::OpenDetail("Parma".into())]);
        assert_eq!(
            table.on_row_secondary(0),
            vec![TableEffect::OpenExternal("/weather/Paris".into())]
        );
        assert!(table.on_row_primary(500).is_empty());
    }

    #[test]
    fn visible_rows_follow_viewport() {
        let mut table = loaded_table();
        table.scroll_by(3);
        let visible: Vec<usize> = table.visible_rows().map(|(i, _)| i).collect();
        assert_eq!(visible, vec![3, 4, 5, 6, 7]);

        table.scroll_by(-10);
        assert_eq!(table.viewport().offset, 0);
    }
}
