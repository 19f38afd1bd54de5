use contracts::dashboards::d100_sales_analytics::dto::{
    AnalyticsReports, AvailableFilters, ReportFilters, ReportResponse, SalesByProductItem,
    SalesByRouteItem, SalesTrendItem, TopProductItem,
};
use contracts::dashboards::d100_sales_analytics::filters::AnalyticsFilterState;
use contracts::shared::error::ApiError;
use futures::try_join;
use serde::de::DeserializeOwned;
use std::future::Future;

use crate::shared::api_utils::{get_data, post_json, RequestContext};

const API_BASE: &str = "/analytics";

/// Clients, regions and products offered in the filter bar
pub async fn get_available_filters(ctx: &RequestContext) -> Result<AvailableFilters, ApiError> {
    get_data(ctx, &format!("{}/filters", API_BASE)).await
}

async fn post_report<T: DeserializeOwned>(
    ctx: &RequestContext,
    report: &str,
    filters: &ReportFilters,
) -> Result<ReportResponse<T>, ApiError> {
    post_json(ctx, &format!("{}/reports/{}", API_BASE, report), filters).await
}

pub async fn get_sales_trend(
    ctx: &RequestContext,
    filters: &ReportFilters,
) -> Result<ReportResponse<SalesTrendItem>, ApiError> {
    post_report(ctx, "sales-trend", filters).await
}

pub async fn get_top_products(
    ctx: &RequestContext,
    filters: &ReportFilters,
) -> Result<ReportResponse<TopProductItem>, ApiError> {
    post_report(ctx, "top-products", filters).await
}

pub async fn get_sales_by_product(
    ctx: &RequestContext,
    filters: &ReportFilters,
) -> Result<ReportResponse<SalesByProductItem>, ApiError> {
    post_report(ctx, "sales-by-product", filters).await
}

pub async fn get_sales_by_route(
    ctx: &RequestContext,
    filters: &ReportFilters,
) -> Result<ReportResponse<SalesByRouteItem>, ApiError> {
    post_report(ctx, "sales-by-route", filters).await
}

/// All four reports for one filter state. The requests run concurrently and
/// the first failure fails the batch. `meta` comes from the sales-trend
/// response.
pub async fn load_reports(
    ctx: &RequestContext,
    state: &AnalyticsFilterState,
) -> Result<AnalyticsReports, ApiError> {
    let filters = state.build();
    let top_filters = state.build_top_products();
    gather_reports(
        get_sales_trend(ctx, &filters),
        get_top_products(ctx, &top_filters),
        get_sales_by_product(ctx, &filters),
        get_sales_by_route(ctx, &filters),
    )
    .await
}

async fn gather_reports(
    trend: impl Future<Output = Result<ReportResponse<SalesTrendItem>, ApiError>>,
    top: impl Future<Output = Result<ReportResponse<TopProductItem>, ApiError>>,
    by_product: impl Future<Output = Result<ReportResponse<SalesByProductItem>, ApiError>>,
    by_route: impl Future<Output = Result<ReportResponse<SalesByRouteItem>, ApiError>>,
) -> Result<AnalyticsReports, ApiError> {
    let (trend, top, by_product, by_route) = try_join!(trend, top, by_product, by_route)?;

    Ok(AnalyticsReports {
        sales_trend: trend.data,
        top_products: top.data,
        sales_by_product: by_product.data,
        sales_by_route: by_route.data,
        meta: trend.meta,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d100_sales_analytics::dto::ReportMeta;
    use futures::executor::block_on;
    use std::cell::Cell;
    use std::pin::Pin;
    use std::rc::Rc;
    use std::task::{Context, Poll};

    /// Pending on the first poll, ready on the second.
    struct YieldOnce(bool);

    impl Future for YieldOnce {
        type Output = ();

        fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
            if self.0 {
                Poll::Ready(())
            } else {
                self.0 = true;
                cx.waker().wake_by_ref();
                Poll::Pending
            }
        }
    }

    fn response<T>(data: Vec<T>, clients_queried: u32) -> ReportResponse<T> {
        ReportResponse {
            success: true,
            data,
            meta: ReportMeta {
                clients_queried,
                errors: Vec::new(),
            },
        }
    }

    /// Counts itself as started, yields once, then checks how many requests
    /// were in flight before it finished.
    async fn request<T>(
        started: Rc<Cell<usize>>,
        in_flight_at_finish: Rc<Cell<usize>>,
        result: Result<ReportResponse<T>, ApiError>,
    ) -> Result<ReportResponse<T>, ApiError> {
        started.set(started.get() + 1);
        YieldOnce(false).await;
        in_flight_at_finish.set(in_flight_at_finish.get().max(started.get()));
        result
    }

    #[test]
    fn test_reports_are_requested_together() {
        let started = Rc::new(Cell::new(0));
        let seen = Rc::new(Cell::new(0));
        let trend = SalesTrendItem {
            year: 2025,
            month: 3,
            total_transactions: 4,
            total_billed_bs: 100.0,
            total_billed_usd: 10.0,
            total_pending: 0.0,
        };

        let reports = block_on(gather_reports(
            request(started.clone(), seen.clone(), Ok(response(vec![trend.clone()], 3))),
            request(started.clone(), seen.clone(), Ok(response(Vec::new(), 0))),
            request(started.clone(), seen.clone(), Ok(response(Vec::new(), 0))),
            request(started.clone(), seen.clone(), Ok(response(Vec::new(), 0))),
        ))
        .unwrap();

        // all four were started before the first one finished
        assert_eq!(seen.get(), 4);
        assert_eq!(reports.sales_trend, vec![trend]);
        assert_eq!(reports.meta.clients_queried, 3);
    }

    #[test]
    fn test_one_failure_fails_the_batch() {
        let started = Rc::new(Cell::new(0));
        let seen = Rc::new(Cell::new(0));

        let result = block_on(gather_reports(
            request(started.clone(), seen.clone(), Ok(response(Vec::new(), 2))),
            request(started.clone(), seen.clone(), Ok(response(Vec::new(), 0))),
            request(
                started.clone(),
                seen.clone(),
                Err(ApiError::Server {
                    status: 500,
                    message: "boom".to_string(),
                }),
            ),
            request(started.clone(), seen.clone(), Ok(response(Vec::new(), 0))),
        ));

        assert!(matches!(result, Err(ApiError::Server { status: 500, .. })));
    }
}
