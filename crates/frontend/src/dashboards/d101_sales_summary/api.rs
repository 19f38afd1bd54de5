use contracts::dashboards::d100_sales_analytics::dto::{ReportFilters, ReportResponse};
use contracts::dashboards::d101_sales_summary::dto::{DailySalesItem, SalesSummary};
use contracts::dashboards::d101_sales_summary::period::MonthOption;
use contracts::shared::error::ApiError;
use futures::try_join;

use crate::dashboards::d100_sales_analytics::api::{get_sales_by_route, get_top_products};
use crate::shared::api_utils::{post_json, RequestContext};

pub async fn get_daily_sales_trend(
    ctx: &RequestContext,
    filters: &ReportFilters,
) -> Result<ReportResponse<DailySalesItem>, ApiError> {
    post_json(ctx, "/analytics/reports/daily-sales-trend", filters).await
}

/// Daily trend, top products and sales by route of one month, requested
/// together.
pub async fn load_summary(ctx: &RequestContext, month: &MonthOption) -> Result<SalesSummary, ApiError> {
    let filters = month.filters();
    let top_filters = month.top_products_filters();
    let (daily, top, by_route) = try_join!(
        get_daily_sales_trend(ctx, &filters),
        get_top_products(ctx, &top_filters),
        get_sales_by_route(ctx, &filters),
    )?;

    Ok(SalesSummary {
        daily: daily.data,
        top_products: top.data,
        sales_by_route: by_route.data,
    })
}
