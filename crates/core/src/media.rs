//! Gallery category filtering.
//!
//! The public gallery shows one media set filterable by category label. The
//! sentinel label "الكل" (all) selects the full set. Filtering preserves the
//! relative order of the input.

/// Sentinel category label meaning "all categories".
pub const CATEGORY_ALL: &str = "الكل";

/// Returns `true` when the selection means "no filtering".
///
/// Both an absent selection and the explicit all-sentinel select everything.
pub fn is_all_selection(selection: Option<&str>) -> bool {
    match selection {
        None => true,
        Some(s) => s.trim().is_empty() || s == CATEGORY_ALL,
    }
}

/// Filter media items by category label, preserving relative order.
///
/// `category_of` extracts the category label from an item; items whose label
/// equals the selection are kept. The all-sentinel returns the input as-is.
pub fn filter_by_category<T>(
    items: Vec<T>,
    selection: Option<&str>,
    category_of: impl Fn(&T) -> &str,
) -> Vec<T> {
    if is_all_selection(selection) {
        return items;
    }
    let wanted = selection.unwrap_or_default();
    items
        .into_iter()
        .filter(|item| category_of(item) == wanted)
        .collect()
}
