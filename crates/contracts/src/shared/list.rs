//! List query model shared by every paginated table.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Scalar filter value, serialized untagged (`"north"`, `7`, `true`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Bool(bool),
    Int(i64),
    Text(String),
}

impl FilterValue {
    /// Empty text means "no filter" (e.g. the "All regions" option).
    pub fn is_active(&self) -> bool {
        match self {
            FilterValue::Text(s) => !s.is_empty(),
            _ => true,
        }
    }

    pub fn to_query_value(&self) -> String {
        match self {
            FilterValue::Bool(b) => b.to_string(),
            FilterValue::Int(i) => i.to_string(),
            FilterValue::Text(s) => s.clone(),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Text(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::Text(value)
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        FilterValue::Int(value)
    }
}

impl From<i32> for FilterValue {
    fn from(value: i32) -> Self {
        FilterValue::Int(value as i64)
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        FilterValue::Bool(value)
    }
}

pub type Filters = BTreeMap<String, FilterValue>;

/// What the user is currently looking at in a table.
///
/// `page_index` is 0-based; it goes back to 0 whenever size, search or
/// filters change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub page_index: usize,
    pub page_size: usize,
    pub search_text: String,
    pub filters: Filters,
}

impl ListQuery {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_index: 0,
            page_size: page_size.max(1),
            search_text: String::new(),
            filters: Filters::new(),
        }
    }

    /// Request parameters for the current query.
    pub fn to_params(&self) -> ListParams {
        ListParams {
            page: self.page_index + 1,
            per_page: self.page_size,
            query: if self.search_text.is_empty() {
                None
            } else {
                Some(self.search_text.clone())
            },
            filters: self
                .filters
                .iter()
                .filter(|(_, v)| v.is_active())
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        }
    }
}

/// Parameters sent to a list endpoint. `page` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListParams {
    pub page: usize,
    pub per_page: usize,
    pub query: Option<String>,
    pub filters: Filters,
}

impl ListParams {
    pub fn new(page: usize, per_page: usize) -> Self {
        Self {
            page,
            per_page,
            query: None,
            filters: Filters::new(),
        }
    }

    pub fn with_filter(mut self, key: &str, value: impl Into<FilterValue>) -> Self {
        self.filters.insert(key.to_string(), value.into());
        self
    }

    /// `page=..&per_page=..[&query=..][&k=v..]`
    pub fn to_query_string(&self) -> String {
        self.to_query_string_with("query")
    }

    /// Same as [`to_query_string`](Self::to_query_string) for endpoints that
    /// name the search parameter differently.
    pub fn to_query_string_with(&self, search_key: &str) -> String {
        let mut parts = vec![
            format!("page={}", self.page),
            format!("per_page={}", self.per_page),
        ];

        if let Some(q) = self.query.as_deref().filter(|q| !q.is_empty()) {
            parts.push(format!("{}={}", search_key, urlencoding::encode(q)));
        }

        for (key, value) in &self.filters {
            if !value.is_active() {
                continue;
            }
            parts.push(format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(&value.to_query_value())
            ));
        }

        parts.join("&")
    }
}

/// One page of rows plus the total across all pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResult<T> {
    pub items: Vec<T>,
    pub total_count: u64,
}

impl<T> Default for ListResult<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_is_one_based() {
        let mut q = ListQuery::new(25);
        q.page_index = 3;
        let params = q.to_params();
        assert_eq!(params.page, 4);
        assert_eq!(params.per_page, 25);
        assert_eq!(params.to_query_string(), "page=4&per_page=25");
    }

    #[test]
    fn test_empty_search_is_omitted() {
        let q = ListQuery::new(10);
        let params = q.to_params();
        assert_eq!(params.query, None);
        assert!(!params.to_query_string().contains("query"));
    }

    #[test]
    fn test_search_is_encoded() {
        let mut q = ListQuery::new(10);
        q.search_text = "san josé & co".to_string();
        assert_eq!(
            q.to_params().to_query_string(),
            "page=1&per_page=10&query=san%20jos%C3%A9%20%26%20co"
        );
    }

    #[test]
    fn test_custom_search_key() {
        let mut params = ListParams::new(2, 10);
        params.query = Some("R-01".to_string());
        assert_eq!(
            params.to_query_string_with("search"),
            "page=2&per_page=10&search=R-01"
        );
    }

    #[test]
    fn test_filters_are_flattened_and_inactive_dropped() {
        let params = ListParams::new(1, 10)
            .with_filter("region_id", 4)
            .with_filter("active", true)
            .with_filter("status", "");
        assert_eq!(
            params.to_query_string(),
            "page=1&per_page=10&active=true&region_id=4"
        );
    }

    #[test]
    fn test_filter_value_untagged_json() {
        let values: Vec<FilterValue> = serde_json::from_str(r#"["north", 7, false]"#).unwrap();
        assert_eq!(
            values,
            vec![
                FilterValue::Text("north".to_string()),
                FilterValue::Int(7),
                FilterValue::Bool(false),
            ]
        );
        assert_eq!(serde_json::to_string(&FilterValue::Int(3)).unwrap(), "3");
    }

    #[test]
    fn test_zero_page_size_is_clamped() {
        assert_eq!(ListQuery::new(0).page_size, 1);
    }
}
