//! Response envelopes used by every backend endpoint.
//!
//! Mutations and single-record reads come back as `{status, message, data}`,
//! paginated lists add `meta` and `links`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::list::ListResult;

/// `{status, message, data}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
    pub data: T,
}

impl<T> ApiEnvelope<T> {
    /// Backend message, or `fallback` when the backend sent none.
    pub fn message_or(&self, fallback: &str) -> String {
        if self.message.trim().is_empty() {
            fallback.to_string()
        } else {
            self.message.clone()
        }
    }
}

/// Pagination block of a list response.
///
/// `from`/`to` are null when the page is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    pub current_page: u64,
    pub last_page: u64,
    pub per_page: u64,
    pub total: u64,
    #[serde(default)]
    pub from: Option<u64>,
    #[serde(default)]
    pub to: Option<u64>,
}

/// `{status, message, data: T[], meta, links}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedEnvelope<T> {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
    pub data: Vec<T>,
    pub meta: PaginationMeta,
    #[serde(default)]
    pub links: BTreeMap<String, Option<String>>,
}

impl<T> From<PaginatedEnvelope<T>> for ListResult<T> {
    fn from(envelope: PaginatedEnvelope<T>) -> Self {
        ListResult {
            items: envelope.data,
            total_count: envelope.meta.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        id: i64,
        name: String,
    }

    #[test]
    fn test_paginated_envelope_into_list_result() {
        let body = r#"{
            "status": "success",
            "message": "Regions retrieved",
            "data": [{"id": 1, "name": "Caracas"}, {"id": 2, "name": "Valencia"}],
            "meta": {"current_page": 1, "last_page": 24, "per_page": 2, "total": 47, "from": 1, "to": 2},
            "links": {"first": "/regions?page=1", "last": "/regions?page=24", "prev": null, "next": "/regions?page=2"}
        }"#;

        let envelope: PaginatedEnvelope<Row> = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.links.get("prev"), Some(&None));

        let result: ListResult<Row> = envelope.into();
        assert_eq!(result.total_count, 47);
        assert_eq!(result.items.len(), 2);
        assert_eq!(result.items[1].name, "Valencia");
    }

    #[test]
    fn test_empty_page_has_null_range() {
        let body = r#"{
            "status": "success",
            "message": "",
            "data": [],
            "meta": {"current_page": 1, "last_page": 1, "per_page": 10, "total": 0, "from": null, "to": null}
        }"#;

        let envelope: PaginatedEnvelope<Row> = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.meta.from, None);
        assert!(envelope.links.is_empty());
    }

    #[test]
    fn test_message_or_fallback() {
        let envelope = ApiEnvelope {
            status: "success".to_string(),
            message: "  ".to_string(),
            data: (),
        };
        assert_eq!(envelope.message_or("Region created"), "Region created");

        let envelope = ApiEnvelope {
            status: "success".to_string(),
            message: "Saved".to_string(),
            data: (),
        };
        assert_eq!(envelope.message_or("Region created"), "Saved");
    }
}
