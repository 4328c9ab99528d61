//! Fixed popular-city list and suggestion filtering
//!
//! The suggestion list is always derived from this table, never mutated
//! independently: re-filtering on every query change keeps it consistent
//! by construction.

/// Quick-select cities, in display order.
pub const POPULAR_CITIES: [&str; 10] = [
    "London",
    "New York",
    "Tokyo",
    "Paris",
    "Sydney",
    "Dubai",
    "Singapore",
    "Mumbai",
    "Toronto",
    "Berlin",
];

/// Case-insensitive substring filter over the popular-city list.
///
/// An empty query matches every city; whether the dropdown is shown for an
/// empty query is the render layer's call, not this function's.
pub fn filter_suggestions(query: &str) -> Vec<String> {
    let needle = query.to_lowercase();
    POPULAR_CITIES
        .iter()
        .filter(|city| city.to_lowercase().contains(&needle))
        .map(|city| (*city).to_string())
        .collect()
}

/// Position of `city` in the popular list, if present.
pub fn position(city: &str) -> Option<usize> {
    POPULAR_CITIES.iter().position(|c| *c == city)
}
