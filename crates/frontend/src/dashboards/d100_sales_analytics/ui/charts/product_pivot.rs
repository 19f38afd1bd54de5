use contracts::dashboards::d100_sales_analytics::dto::SalesByProductItem;
use contracts::dashboards::d100_sales_analytics::pivot::{
    product_month_pivot, ProductMonthPivot, PIVOT_TOP_PRODUCTS,
};
use leptos::prelude::*;

use super::ChartCard;
use crate::shared::components::svg_chart::{color_at, coord, nice_max, LinearScale};
use crate::shared::components::table::format_number_int;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 260.0;
const LEFT: f64 = 56.0;
const RIGHT: f64 = 16.0;
const TOP: f64 = 16.0;
const BOTTOM: f64 = 36.0;
const Y_TICKS: usize = 4;
/// Share of a month band taken by its bar
const BAR_FILL: f64 = 0.6;

fn stacked_bars(pivot: &ProductMonthPivot) -> AnyView {
    let month_totals: Vec<f64> = pivot.values.iter().map(|row| row.iter().sum()).collect();
    let max = month_totals.iter().copied().fold(0.0, f64::max);
    let y = LinearScale::new(nice_max(max), HEIGHT - BOTTOM, TOP);

    let band = (WIDTH - LEFT - RIGHT) / pivot.months.len().max(1) as f64;
    let bar_width = band * BAR_FILL;

    let grid = y
        .ticks(Y_TICKS)
        .into_iter()
        .map(|tick| {
            let ty = y.scale(tick);
            view! {
                <g class="chart__grid">
                    <line x1=coord(LEFT) x2=coord(WIDTH - RIGHT) y1=coord(ty) y2=coord(ty) />
                    <text x=coord(LEFT - 8.0) y=coord(ty + 4.0) text-anchor="end">
                        {format_number_int(tick)}
                    </text>
                </g>
            }
        })
        .collect_view();

    let bars = pivot
        .months
        .iter()
        .zip(&pivot.values)
        .enumerate()
        .map(|(m, (month, row))| {
            let x = LEFT + band * m as f64 + (band - bar_width) / 2.0;
            let mut base = 0.0;
            let stack = row
                .iter()
                .enumerate()
                .filter(|(_, qty)| **qty > 0.0)
                .map(|(p, qty)| {
                    let top = y.scale(base + qty);
                    let height = y.scale(base) - top;
                    base += qty;
                    let label = format!("{} · {}: {}", month, pivot.products[p], format_number_int(*qty));
                    view! {
                        <rect
                            x=coord(x)
                            y=coord(top)
                            width=coord(bar_width)
                            height=coord(height)
                            fill=color_at(p)
                            aria-label=label
                        />
                    }
                })
                .collect_view();
            view! {
                <g>
                    {stack}
                    <text
                        class="chart__axis-label"
                        x=coord(x + bar_width / 2.0)
                        y=coord(HEIGHT - 12.0)
                        text-anchor="middle"
                    >
                        {month.clone()}
                    </text>
                </g>
            }
        })
        .collect_view();

    let legend = pivot
        .products
        .iter()
        .enumerate()
        .map(|(p, name)| {
            view! {
                <span class="chart__legend-item">
                    <span class="chart__legend-swatch" style=format!("background: {}", color_at(p))></span>
                    {name.clone()}
                </span>
            }
        })
        .collect_view();

    view! {
        <svg class="chart chart--stacked" viewBox=format!("0 0 {} {}", WIDTH, HEIGHT)>
            {grid}
            {bars}
        </svg>
        <div class="chart__legend">{legend}</div>
    }
    .into_any()
}

/// Quantity per month for the best-selling products.
#[component]
pub fn ProductPivotChart(#[prop(into)] items: Signal<Vec<SalesByProductItem>>) -> impl IntoView {
    let pivot = Memo::new(move |_| items.with(|items| product_month_pivot(items, PIVOT_TOP_PRODUCTS)));
    let is_empty = Signal::derive(move || pivot.with(|p| p.is_empty()));

    view! {
        <ChartCard title="Sales by product per month" is_empty=is_empty>
            {move || pivot.with(stacked_bars)}
        </ChartCard>
    }
}
