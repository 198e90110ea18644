//! Page category constants.
//!
//! Every page declares an HTML `id` in the format `{entity}--{category}`
//! (e.g. `"a025_smart_inventory--detail"`) and a `data-page-category` taken
//! from the constants below.

/// List of records.
pub const PAGE_CAT_LIST: &str = "list";

/// Tabbed view of a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// BEM class of the page root for a category.
pub fn page_class(category: &str) -> &'static str {
    match category {
        PAGE_CAT_DETAIL => "page page--detail",
        _ => "page",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_class() {
        assert_eq!(page_class(PAGE_CAT_DETAIL), "page page--detail");
        assert_eq!(page_class(PAGE_CAT_LIST), "page");
        assert_eq!(page_class("unknown"), "page");
    }
}
