use crate::dashboards::d100_sales_analytics::ui::charts::{RouteDonutChart, TopProductsChart};
use crate::dashboards::d101_sales_summary::api;
use crate::dashboards::d101_sales_summary::ui::daily_trend::DailyTrendChart;
use crate::shared::components::notice::{NoticeBanner, Notices};
use crate::shared::components::page_header::PageHeader;
use crate::shared::date_utils::today;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::system::auth::context::use_request_context;
use contracts::dashboards::d101_sales_summary::dto::SalesSummary;
use contracts::dashboards::d101_sales_summary::period::{find_month, month_options};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Monthly sales summary: pick a month, see its daily trend, top products
/// and sales by route. Reloads whenever the month changes.
#[component]
pub fn SalesSummaryDashboard() -> impl IntoView {
    let request_ctx = StoredValue::new(use_request_context());
    let notices = Notices::new();

    let months = StoredValue::new(month_options(today()));
    let selected_month = RwSignal::new(months.with_value(|m| {
        m.first().map(|m| m.value.clone()).unwrap_or_default()
    }));

    let summary = RwSignal::new(SalesSummary::default());
    let (loading, set_loading) = signal(false);
    let request_seq = StoredValue::new(0u64);

    Effect::new(move |_| {
        let value = selected_month.get();
        let Some(month) = months.with_value(|m| find_month(m, &value).cloned()) else {
            return;
        };
        let seq = request_seq.get_value() + 1;
        request_seq.set_value(seq);
        set_loading.set(true);
        notices.dismiss();

        let ctx = request_ctx.get_value();
        spawn_local(async move {
            log::debug!("sales summary #{}: {}", seq, month.value);
            let result = api::load_summary(&ctx, &month).await;
            // a newer month was picked meanwhile
            if request_seq.try_get_value() != Some(seq) {
                return;
            }
            match result {
                Ok(data) => summary.set(data),
                Err(e) => {
                    log::error!("sales summary for {} failed: {}", month.value, e);
                    summary.set(SalesSummary::default());
                    notices.error(e.user_message());
                }
            }
            set_loading.set(false);
        });
    });

    let daily = Signal::derive(move || summary.with(|s| s.daily.clone()));
    let top_products = Signal::derive(move || summary.with(|s| s.top_products.clone()));
    let sales_by_route = Signal::derive(move || summary.with(|s| s.sales_by_route.clone()));

    view! {
        <PageFrame page_id="d101_sales_summary--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader title="Sales Summary" subtitle="Month at a glance across all distributors">
                <div class="form__group filter-field">
                    <Label>"Month"</Label>
                    <Select value=selected_month disabled=Signal::derive(move || loading.get())>
                        {months.with_value(|m| {
                            m.iter()
                                .map(|m| view! { <option value=m.value.clone()>{m.label.clone()}</option> })
                                .collect_view()
                        })}
                    </Select>
                </div>
                <Show when=move || loading.get()>
                    <Spinner size=SpinnerSize::Tiny />
                </Show>
            </PageHeader>

            <div class="page__content">
                <NoticeBanner notices=notices />

                <div class=move || if loading.get() { "dashboard__charts dashboard__charts--loading" } else { "dashboard__charts" }>
                    <div class="dashboard__chart dashboard__chart--full">
                        <DailyTrendChart items=daily />
                    </div>
                    <div class="dashboard__chart">
                        <TopProductsChart items=top_products />
                    </div>
                    <div class="dashboard__chart">
                        <RouteDonutChart items=sales_by_route />
                    </div>
                </div>
            </div>
        </PageFrame>
    }
}
