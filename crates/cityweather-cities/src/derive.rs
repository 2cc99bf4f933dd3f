//! Pure derivations from the loaded collection to what the listing shows.
//!
//! The table model calls these after every state transition; nothing here
//! holds state of its own.

use crate::types::{City, SortDirection, SortState};

/// Default number of suggestions shown under the search box.
pub const SUGGESTION_LIMIT: usize = 5;

/// Cities whose name contains `term`, ignoring case, in source order.
///
/// An empty term keeps every city. Only the name is searched.
pub fn derive_filtered_view(collection: &[City], term: &str) -> Vec<City> {
    if term.is_empty() {
        return collection.to_vec();
    }

    let needle = term.to_lowercase();
    collection
        .iter()
        .filter(|city| city.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Cities whose name equals `clicked`, ignoring case.
///
/// Used after a suggestion click; can return several rows when more than
/// one loaded page carries the same name.
pub fn derive_exact_matches(collection: &[City], clicked: &str) -> Vec<City> {
    let wanted = clicked.to_lowercase();
    collection
        .iter()
        .filter(|city| city.name.to_lowercase() == wanted)
        .cloned()
        .collect()
}

/// Leading entries of the filtered view offered as suggestions.
///
/// Empty when there is no term or the user just picked a suggestion.
pub fn derive_suggestions(
    filtered: &[City],
    term: &str,
    suggestion_clicked: bool,
    limit: usize,
) -> Vec<City> {
    if term.is_empty() || suggestion_clicked {
        return Vec::new();
    }

    filtered.iter().take(limit).cloned().collect()
}

/// The view reordered by the active sort, or unchanged when none is set.
///
/// Plain string comparison on the raw column value. Equal keys keep their
/// relative order.
pub fn derive_sorted_view(view: &[City], sort: SortState) -> Vec<City> {
    let mut sorted = view.to_vec();
    if let Some((key, direction)) = sort.active {
        sorted.sort_by(|a, b| {
            let ordering = a.field(key).cmp(b.field(key));
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }
    sorted
}
