//! Tab titles, in one place.

/// Key prefix of company-route edit tabs, followed by the record id.
pub const COMPANY_ROUTE_DETAILS_PREFIX: &str = "a002_company_route_details_";
pub const COMPANY_ROUTE_NEW: &str = "a002_company_route_new";

/// Readable title for a tab key. Unknown keys fall back to a generic title.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        "d100_sales_analytics" => "Sales Analytics",
        "d101_sales_summary" => "Sales Summary",
        "a001_region" => "Regions",
        "a002_company_route" => "Company Routes",
        COMPANY_ROUTE_NEW => "New Company Route",
        k if k.starts_with(COMPANY_ROUTE_DETAILS_PREFIX) => "Company Route",
        "sys_users" => "Users",
        _ => "Page",
    }
}

/// «<entity> · <identifier>», e.g. "Company Route · RT-001".
pub fn detail_tab_label(entity_label: &'static str, identifier: &str) -> String {
    format!("{} · {}", entity_label, identifier)
}

pub fn company_route_details_key(id: i64) -> String {
    format!("{}{}", COMPANY_ROUTE_DETAILS_PREFIX, id)
}

/// Id part of a company-route edit tab key.
pub fn parse_company_route_details_key(key: &str) -> Option<i64> {
    key.strip_prefix(COMPANY_ROUTE_DETAILS_PREFIX)?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(tab_label_for_key("a001_region"), "Regions");
        assert_eq!(tab_label_for_key("d101_sales_summary"), "Sales Summary");
        assert_eq!(tab_label_for_key("a002_company_route_details_7"), "Company Route");
        assert_eq!(tab_label_for_key("zzz"), "Page");
        assert_eq!(detail_tab_label("Company Route", "RT-001"), "Company Route · RT-001");
    }

    #[test]
    fn test_details_key() {
        let key = company_route_details_key(42);
        assert_eq!(key, "a002_company_route_details_42");
        assert_eq!(parse_company_route_details_key(&key), Some(42));
        assert_eq!(parse_company_route_details_key("a002_company_route_details_x"), None);
        assert_eq!(parse_company_route_details_key("a001_region"), None);
    }
}
