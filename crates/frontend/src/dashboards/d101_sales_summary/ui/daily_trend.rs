use contracts::dashboards::d101_sales_summary::daily::{daily_totals, day_points, DayPoint};
use contracts::dashboards::d101_sales_summary::dto::DailySalesItem;
use leptos::prelude::*;

use crate::dashboards::d100_sales_analytics::ui::charts::ChartCard;
use crate::shared::components::stat_card::{format_value, ValueFormat};
use crate::shared::components::svg_chart::{
    area_path, color_at, coord, nice_max, polyline_points, x_positions, LinearScale,
};
use crate::shared::components::table::{format_compact_currency, format_number_int};

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 260.0;
const LEFT: f64 = 56.0;
const RIGHT: f64 = 48.0;
const TOP: f64 = 16.0;
const BOTTOM: f64 = 36.0;
const Y_TICKS: usize = 4;
/// More days than this and only every n-th day gets an axis label
const MAX_X_LABELS: usize = 16;

fn label_step(count: usize) -> usize {
    count.div_ceil(MAX_X_LABELS).max(1)
}

fn render(points: Vec<DayPoint>) -> AnyView {
    let usd_max = points.iter().map(|p| p.billed_usd).fold(0.0, f64::max);
    let tx_max = points.iter().map(|p| p.transactions as f64).fold(0.0, f64::max);
    // USD on the left axis, transactions on the right
    let usd = LinearScale::new(nice_max(usd_max), HEIGHT - BOTTOM, TOP);
    let tx = LinearScale::new(nice_max(tx_max), HEIGHT - BOTTOM, TOP);
    let xs = x_positions(points.len(), LEFT, WIDTH - RIGHT);

    let billed: Vec<(f64, f64)> = xs
        .iter()
        .zip(&points)
        .map(|(x, p)| (*x, usd.scale(p.billed_usd)))
        .collect();
    let transactions: Vec<(f64, f64)> = xs
        .iter()
        .zip(&points)
        .map(|(x, p)| (*x, tx.scale(p.transactions as f64)))
        .collect();

    let usd_color = color_at(0);
    let tx_color = color_at(1);

    let grid = usd
        .ticks(Y_TICKS)
        .into_iter()
        .zip(tx.ticks(Y_TICKS))
        .map(|(usd_tick, tx_tick)| {
            let ty = usd.scale(usd_tick);
            view! {
                <g class="chart__grid">
                    <line x1=coord(LEFT) x2=coord(WIDTH - RIGHT) y1=coord(ty) y2=coord(ty) />
                    <text x=coord(LEFT - 8.0) y=coord(ty + 4.0) text-anchor="end">
                        {format_compact_currency(usd_tick)}
                    </text>
                    <text x=coord(WIDTH - RIGHT + 8.0) y=coord(ty + 4.0) text-anchor="start">
                        {format_number_int(tx_tick)}
                    </text>
                </g>
            }
        })
        .collect_view();

    let step = label_step(points.len());
    let labels = xs
        .iter()
        .zip(&points)
        .enumerate()
        .filter(|(i, _)| i % step == 0)
        .map(|(_, (x, p))| {
            view! {
                <text class="chart__axis-label" x=coord(*x) y=coord(HEIGHT - 12.0) text-anchor="middle">
                    {p.label.clone()}
                </text>
            }
        })
        .collect_view();

    let markers = billed
        .iter()
        .zip(&points)
        .map(|((cx, cy), p)| {
            let tooltip = format!(
                "Day {}: {}, {} transactions",
                p.label,
                format_value(p.billed_usd, ValueFormat::Usd),
                p.transactions
            );
            view! { <circle cx=coord(*cx) cy=coord(*cy) r="3" fill=usd_color aria-label=tooltip /> }
        })
        .collect_view();

    view! {
        <svg class="chart chart--trend" viewBox=format!("0 0 {} {}", WIDTH, HEIGHT) preserveAspectRatio="xMidYMid meet">
            {grid}
            <path d=area_path(&billed, HEIGHT - BOTTOM) fill=usd_color fill-opacity="0.15" />
            <polyline points=polyline_points(&billed) fill="none" stroke=usd_color stroke-width="3" />
            <polyline points=polyline_points(&transactions) fill="none" stroke=tx_color stroke-width="2" />
            {markers}
            {labels}
        </svg>
        <div class="chart__legend">
            <span class="chart__legend-item">
                <span class="chart__legend-swatch" style=format!("background: {}", usd_color)></span>
                "Sales (USD)"
            </span>
            <span class="chart__legend-item">
                <span class="chart__legend-swatch" style=format!("background: {}", tx_color)></span>
                "Transactions"
            </span>
        </div>
    }
    .into_any()
}

/// Daily billed USD with the transaction count on a second axis.
#[component]
pub fn DailyTrendChart(#[prop(into)] items: Signal<Vec<DailySalesItem>>) -> impl IntoView {
    let summary = Signal::derive(move || {
        items.with(|items| {
            (!items.is_empty()).then(|| {
                let totals = daily_totals(items);
                format!(
                    "{} transactions · {}",
                    totals.transactions,
                    format_value(totals.billed_usd, ValueFormat::Usd)
                )
            })
        })
    });
    let is_empty = Signal::derive(move || items.with(|i| i.is_empty()));

    view! {
        <ChartCard title="Daily sales" summary=summary is_empty=is_empty>
            {move || items.with(|items| render(day_points(items)))}
        </ChartCard>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_step() {
        assert_eq!(label_step(0), 1);
        assert_eq!(label_step(12), 1);
        assert_eq!(label_step(16), 1);
        assert_eq!(label_step(18), 2);
        assert_eq!(label_step(31), 2);
    }
}
