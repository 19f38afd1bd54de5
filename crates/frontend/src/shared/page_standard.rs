//! Page category constants.
//!
//! Every page rendered inside a tab declares an HTML `id` of the form
//! `{entity}--{category}` (e.g. `"a001_region--list"`) and a
//! `data-page-category` with one of the values below. The entity part is the
//! module directory, so the id found in the DOM inspector leads to the code.

/// Paginated table of records.
pub const PAGE_CAT_LIST: &str = "list";

/// Create / edit form for a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Charts and aggregated reports.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Administration (users, roles).
pub const PAGE_CAT_SYSTEM: &str = "system";

pub const ALL_CATEGORIES: &[&str] = &[
    PAGE_CAT_LIST,
    PAGE_CAT_DETAIL,
    PAGE_CAT_DASHBOARD,
    PAGE_CAT_SYSTEM,
];

/// `{entity}--{category}` with both parts non-empty.
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
        assert!(is_valid_page_id("a001_region--list"));
        assert!(is_valid_page_id("a002_company_route--detail"));
        assert!(!is_valid_page_id("a001_region"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a001_region--"));
    }

    #[test]
    fn test_known_categories() {
        assert!(is_known_category("dashboard"));
        assert!(!is_known_category("legacy"));
    }
}
