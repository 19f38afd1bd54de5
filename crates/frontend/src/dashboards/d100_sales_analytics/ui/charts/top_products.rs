use contracts::dashboards::d100_sales_analytics::dto::TopProductItem;
use contracts::dashboards::d100_sales_analytics::pivot::top_product_bars;
use leptos::prelude::*;

use super::ChartCard;
use crate::shared::components::stat_card::{format_value, ValueFormat};
use crate::shared::components::svg_chart::{color_at, percent_of};
use crate::shared::components::table::format_number_int;

/// Products ranked by quantity, one bar per product.
#[component]
pub fn TopProductsChart(#[prop(into)] items: Signal<Vec<TopProductItem>>) -> impl IntoView {
    let is_empty = Signal::derive(move || items.with(|i| i.is_empty()));

    let bars = move || {
        let bars = items.with(|items| top_product_bars(items));
        let max = bars.first().map(|b| b.quantity).unwrap_or(0.0);
        bars.into_iter()
            .map(|bar| {
                let width = format!("width: {:.1}%; background: {};", percent_of(bar.quantity, max), color_at(0));
                view! {
                    <div class="bar-chart__row">
                        <div class="bar-chart__label" title=bar.name.clone()>{bar.name.clone()}</div>
                        <div class="bar-chart__track">
                            <div class="bar-chart__bar" style=width></div>
                        </div>
                        <div class="bar-chart__value">
                            <span>{format_number_int(bar.quantity)}</span>
                            <span class="bar-chart__secondary">{format_value(bar.amount_usd, ValueFormat::Usd)}</span>
                        </div>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <ChartCard title="Top products by quantity" is_empty=is_empty>
            <div class="bar-chart">{bars}</div>
        </ChartCard>
    }
}
