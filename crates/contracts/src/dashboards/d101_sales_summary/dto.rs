use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dashboards::d100_sales_analytics::dto::{SalesByRouteItem, TopProductItem};

/// One row of `POST /analytics/reports/daily-sales-trend`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySalesItem {
    pub date: NaiveDate,
    pub total_transactions: u64,
    pub total_billed_bs: f64,
    pub total_billed_usd: f64,
    #[serde(default)]
    pub total_pending: f64,
}

/// The three reports shown for one month
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalesSummary {
    pub daily: Vec<DailySalesItem>,
    pub top_products: Vec<TopProductItem>,
    pub sales_by_route: Vec<SalesByRouteItem>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d100_sales_analytics::dto::ReportResponse;

    #[test]
    fn test_daily_response() {
        let body = r#"{
            "success": true,
            "data": [
                {"date": "2025-03-02", "total_transactions": 14, "total_billed_bs": 5200.0,
                 "total_billed_usd": 140.5, "total_pending": 12.0},
                {"date": "2025-03-03", "total_transactions": 3, "total_billed_bs": 900.0,
                 "total_billed_usd": 24.0}
            ]
        }"#;
        let response: ReportResponse<DailySalesItem> = serde_json::from_str(body).unwrap();
        assert_eq!(response.data.len(), 2);
        assert_eq!(response.data[0].date, NaiveDate::from_ymd_opt(2025, 3, 2).unwrap());
        assert_eq!(response.data[1].total_pending, 0.0);
        assert_eq!(response.meta.clients_queried, 0);
    }
}
