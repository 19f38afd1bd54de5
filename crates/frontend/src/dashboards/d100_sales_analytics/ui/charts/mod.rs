//! Inline SVG charts of the analytics dashboard.

mod product_pivot;
mod route_donut;
mod sales_trend;
mod top_products;

pub use product_pivot::ProductPivotChart;
pub use route_donut::RouteDonutChart;
pub use sales_trend::SalesTrendChart;
pub use top_products::TopProductsChart;

use leptos::prelude::*;

pub const NO_DATA_MESSAGE: &str = "No data for the selected period";

/// Card around a chart. `is_empty` swaps the body for a placeholder.
#[component]
pub fn ChartCard(
    #[prop(into)] title: String,
    #[prop(optional, into)] summary: Signal<Option<String>>,
    #[prop(into)] is_empty: Signal<bool>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <div class="chart-card">
            <div class="chart-card__header">
                <h3 class="chart-card__title">{title}</h3>
                {move || summary.get().map(|s| view! { <span class="chart-card__summary">{s}</span> })}
            </div>
            <div class="chart-card__body">
                <Show
                    when=move || !is_empty.get()
                    fallback=|| view! { <div class="chart-card__empty">{NO_DATA_MESSAGE}</div> }
                >
                    {children()}
                </Show>
            </div>
        </div>
    }
}
