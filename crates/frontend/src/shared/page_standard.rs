//! Page category constants.
//!
//! Every routed page declares an HTML `id` in the format `{entity}--{category}`
//! (e.g. `"a003_inventory--list"`) and a `data-page-category` with one of the
//! constants below, so a page seen in the DOM inspector maps straight to its
//! module.

/// Resource list with its create/edit dialog.
pub const PAGE_CAT_LIST: &str = "list";

/// Use-case page (fruit classification).
pub const PAGE_CAT_USECASE: &str = "usecase";

/// Login, home, not-found.
pub const PAGE_CAT_SYSTEM: &str = "system";

pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_LIST, PAGE_CAT_USECASE, PAGE_CAT_SYSTEM];

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && !category.is_empty(),
        None => false,
    }
}

pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("a001_store--list"));
        assert!(is_valid_page_id("u501_classify_fruit--usecase"));
        assert!(!is_valid_page_id("a001_store"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a001_store--"));
    }

    #[test]
    fn test_categories() {
        assert!(is_known_category(PAGE_CAT_LIST));
        assert!(!is_known_category("dashboard"));
    }
}
