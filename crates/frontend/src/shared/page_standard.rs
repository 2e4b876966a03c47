//! Page category constants.
//!
//! Every page declares an HTML `id` in the format `{entity}--{category}`
//! (e.g. `"a004_product--list"`) and a `data-page-category` from below, so a
//! DOM id copied from the inspector leads straight to `domain/a004_product/`.

/// List of records with filters and pagination
pub const PAGE_CAT_LIST: &str = "list";

/// Analytical dashboard / report view
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// System administration page
pub const PAGE_CAT_SYSTEM: &str = "system";

/// Whether a page id follows the `{entity}--{category}` format
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => {
            !entity.is_empty()
                && [PAGE_CAT_LIST, PAGE_CAT_DASHBOARD, PAGE_CAT_SYSTEM].contains(&category)
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_ids() {
        assert!(is_valid_page_id("a004_product--list"));
        assert!(is_valid_page_id("d400_sales_report--dashboard"));
        assert!(!is_valid_page_id("a004_product"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a004_product--detail"));
    }
}
