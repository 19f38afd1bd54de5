use serde::{Deserialize, Serialize};

/// Body of every `POST /analytics/reports/*` call.
///
/// Dates are "YYYY-MM-DD"; empty selections are left out of the body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportFilters {
    pub start_date: String,
    pub end_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_ids: Option<Vec<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region_ids: Option<Vec<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_skus: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routes: Option<Vec<String>>,
    /// Only used by the top-products report
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientOption {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub region_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionOption {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductOption {
    pub id: i64,
    pub sku: String,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
}

/// `data` of `GET /analytics/filters`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AvailableFilters {
    #[serde(default)]
    pub clients: Vec<ClientOption>,
    #[serde(default)]
    pub regions: Vec<RegionOption>,
    #[serde(default)]
    pub products: Vec<ProductOption>,
}

/// A client database that could not be queried
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientQueryError {
    pub client: String,
    pub error: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportMeta {
    #[serde(default)]
    pub clients_queried: u32,
    #[serde(default)]
    pub errors: Vec<ClientQueryError>,
}

/// `{success, data, meta}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportResponse<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Vec<T>,
    #[serde(default)]
    pub meta: ReportMeta,
}

/// Monthly totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesTrendItem {
    pub year: i32,
    pub month: u32,
    pub total_transactions: u64,
    pub total_billed_bs: f64,
    pub total_billed_usd: f64,
    pub total_pending: f64,
}

/// Products ranked by quantity sold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopProductItem {
    pub product_id: i64,
    pub product_name: String,
    pub total_quantity: f64,
    pub total_amount_usd: f64,
    pub total_amount_bs: f64,
}

/// Per product per month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesByProductItem {
    pub product_id: i64,
    pub product_name: String,
    pub year: i32,
    pub month: u32,
    pub total_quantity: f64,
    pub total_amount_usd: f64,
    pub total_amount_bs: f64,
}

/// Per route per client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesByRouteItem {
    pub client_name: String,
    pub route: String,
    pub total_transactions: u64,
    pub total_billed_bs: f64,
    pub total_billed_usd: f64,
}

/// The four reports of one "Apply" click
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalyticsReports {
    pub sales_trend: Vec<SalesTrendItem>,
    pub top_products: Vec<TopProductItem>,
    pub sales_by_product: Vec<SalesByProductItem>,
    pub sales_by_route: Vec<SalesByRouteItem>,
    /// Taken from the sales-trend response
    pub meta: ReportMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_selections_are_not_serialized() {
        let filters = ReportFilters {
            start_date: "2025-03-01".to_string(),
            end_date: "2025-03-18".to_string(),
            client_ids: Some(vec![4, 9]),
            ..Default::default()
        };
        let json = serde_json::to_value(&filters).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "start_date": "2025-03-01",
                "end_date": "2025-03-18",
                "client_ids": [4, 9]
            })
        );
    }

    #[test]
    fn test_report_response_with_errors() {
        let body = r#"{
            "success": true,
            "data": [{"year": 2025, "month": 2, "total_transactions": 120,
                      "total_billed_bs": 45000.5, "total_billed_usd": 1200.0, "total_pending": 80.25}],
            "meta": {"clients_queried": 5, "errors": [{"client": "Dist Oeste", "error": "timeout"}]}
        }"#;
        let response: ReportResponse<SalesTrendItem> = serde_json::from_str(body).unwrap();
        assert_eq!(response.data[0].month, 2);
        assert_eq!(response.meta.clients_queried, 5);
        assert_eq!(response.meta.errors[0].client, "Dist Oeste");
    }
}
