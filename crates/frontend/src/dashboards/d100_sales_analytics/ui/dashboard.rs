use crate::dashboards::d100_sales_analytics::api;
use crate::dashboards::d100_sales_analytics::ui::charts::{
    ProductPivotChart, RouteDonutChart, SalesTrendChart, TopProductsChart,
};
use crate::dashboards::d100_sales_analytics::ui::filter_bar::AnalyticsFilterBar;
use crate::shared::components::notice::{NoticeBanner, Notices};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::{StatCard, ValueFormat};
use crate::shared::date_utils::today;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::system::auth::context::use_request_context;
use contracts::dashboards::d100_sales_analytics::dto::{AnalyticsReports, AvailableFilters};
use contracts::dashboards::d100_sales_analytics::filters::AnalyticsFilterState;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Headline figures summed over the sales-trend rows.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Headline {
    billed_usd: f64,
    billed_bs: f64,
    pending: f64,
    transactions: u64,
}

fn headline(reports: &AnalyticsReports) -> Headline {
    reports.sales_trend.iter().fold(Headline::default(), |acc, i| Headline {
        billed_usd: acc.billed_usd + i.total_billed_usd,
        billed_bs: acc.billed_bs + i.total_billed_bs,
        pending: acc.pending + i.total_pending,
        transactions: acc.transactions + i.total_transactions,
    })
}

fn report_rows<T>(
    reports: RwSignal<Option<AnalyticsReports>>,
    pick: fn(&AnalyticsReports) -> &Vec<T>,
) -> Signal<Vec<T>>
where
    T: Clone + Send + Sync + 'static,
{
    Signal::derive(move || reports.with(|r| r.as_ref().map(|r| pick(r).clone()).unwrap_or_default()))
}

/// Sales Analytics dashboard: filter bar, headline cards and four charts.
///
/// Nothing is fetched until the first "Apply"; each Apply replaces every
/// report at once.
#[component]
pub fn SalesAnalyticsDashboard() -> impl IntoView {
    let request_ctx = StoredValue::new(use_request_context());
    let notices = Notices::new();

    let state = RwSignal::new(AnalyticsFilterState::starting(today()));
    let available = RwSignal::new(AvailableFilters::default());
    let (filters_loading, set_filters_loading) = signal(true);

    let reports: RwSignal<Option<AnalyticsReports>> = RwSignal::new(None);
    let (loading, set_loading) = signal(false);
    // guards against an older Apply finishing after a newer one
    let request_seq = StoredValue::new(0u64);

    spawn_local(async move {
        match api::get_available_filters(&request_ctx.get_value()).await {
            Ok(filters) => available.set(filters),
            Err(e) => {
                log::error!("failed to load analytics filters: {}", e);
                notices.error(format!("Could not load filter options: {}", e.user_message()));
            }
        }
        set_filters_loading.set(false);
    });

    let apply = Callback::new(move |_| {
        let snapshot = state.get_untracked();
        if !snapshot.is_range_valid() {
            return;
        }
        let seq = request_seq.get_value() + 1;
        request_seq.set_value(seq);
        set_loading.set(true);
        notices.dismiss();

        let ctx = request_ctx.get_value();
        spawn_local(async move {
            log::debug!("analytics apply #{}: {:?}", seq, snapshot.build());
            let result = api::load_reports(&ctx, &snapshot).await;
            if request_seq.try_get_value() != Some(seq) {
                return;
            }
            match result {
                Ok(data) => reports.set(Some(data)),
                Err(e) => {
                    log::error!("analytics reports failed: {}", e);
                    notices.error(e.user_message());
                }
            }
            set_loading.set(false);
        });
    });

    let stat = move |pick: fn(&Headline) -> f64| {
        Signal::derive(move || {
            if loading.get() {
                return None;
            }
            reports.with(|r| r.as_ref().map(|r| pick(&headline(r))))
        })
    };

    let sales_trend = report_rows(reports, |r| &r.sales_trend);
    let top_products = report_rows(reports, |r| &r.top_products);
    let sales_by_product = report_rows(reports, |r| &r.sales_by_product);
    let sales_by_route = report_rows(reports, |r| &r.sales_by_route);

    let meta_warning = move || {
        reports.with(|r| {
            r.as_ref().and_then(|r| {
                let errors = &r.meta.errors;
                (!errors.is_empty()).then(|| {
                    let lines = errors
                        .iter()
                        .map(|e| view! { <li>{format!("{}: {}", e.client, e.error)}</li> })
                        .collect_view();
                    view! {
                        <div class="alert alert--warning">
                            <strong>{format!("{} client(s) could not be queried", errors.len())}</strong>
                            <ul class="alert__list">{lines}</ul>
                        </div>
                    }
                })
            })
        })
    };

    let clients_queried = move || {
        if loading.get() {
            return None;
        }
        reports.with(|r| {
            r.as_ref().map(|r| {
                view! {
                    <div class="dashboard__meta">
                        {format!("{} client(s) queried", r.meta.clients_queried)}
                    </div>
                }
            })
        })
    };

    view! {
        <PageFrame page_id="d100_sales_analytics--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader title="Sales Analytics" subtitle="Consolidated sales reports across all distributors" />

            <div class="page__content">
                <AnalyticsFilterBar
                    state=state
                    available=available
                    filters_loading=filters_loading
                    loading=loading
                    on_apply=apply
                />

                <NoticeBanner notices=notices />
                {meta_warning}
                {clients_queried}

                <Show when=move || reports.with(|r| r.is_none()) && !loading.get()>
                    <div class="alert alert--info">
                        "Pick the dates and filters, then click Apply to load the reports."
                    </div>
                </Show>

                <Show when=move || reports.with(|r| r.is_some()) || loading.get()>
                    <div class="dashboard__stats">
                        <StatCard
                            label="Billed (USD)"
                            icon_name="dollar"
                            value=stat(|h| h.billed_usd)
                            format=ValueFormat::Usd
                        />
                        <StatCard
                            label="Billed (Bs)"
                            icon_name="receipt"
                            value=stat(|h| h.billed_bs)
                            format=ValueFormat::Bs
                        />
                        <StatCard
                            label="Pending (USD)"
                            icon_name="clock"
                            value=stat(|h| h.pending)
                            format=ValueFormat::Usd
                        />
                        <StatCard
                            label="Transactions"
                            icon_name="bar-chart"
                            value=stat(|h| h.transactions as f64)
                            format=ValueFormat::Integer
                        />
                    </div>

                    <div class=move || if loading.get() { "dashboard__charts dashboard__charts--loading" } else { "dashboard__charts" }>
                        <div class="dashboard__chart dashboard__chart--full">
                            <SalesTrendChart items=sales_trend />
                        </div>
                        <div class="dashboard__chart">
                            <TopProductsChart items=top_products />
                        </div>
                        <div class="dashboard__chart">
                            <RouteDonutChart items=sales_by_route />
                        </div>
                        <div class="dashboard__chart dashboard__chart--full">
                            <ProductPivotChart items=sales_by_product />
                        </div>
                    </div>
                </Show>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d100_sales_analytics::dto::SalesTrendItem;

    #[test]
    fn test_headline_sums_trend_rows() {
        let item = |month, usd, bs, pending, tx| SalesTrendItem {
            year: 2025,
            month,
            total_transactions: tx,
            total_billed_bs: bs,
            total_billed_usd: usd,
            total_pending: pending,
        };
        let reports = AnalyticsReports {
            sales_trend: vec![item(1, 100.0, 4000.0, 10.0, 3), item(2, 50.5, 2000.0, 0.0, 2)],
            ..Default::default()
        };
        assert_eq!(
            headline(&reports),
            Headline {
                billed_usd: 150.5,
                billed_bs: 6000.0,
                pending: 10.0,
                transactions: 5,
            }
        );
    }
}
