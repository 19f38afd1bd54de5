use contracts::dashboards::d100_sales_analytics::dto::SalesTrendItem;
use contracts::dashboards::d100_sales_analytics::pivot::{trend_points, trend_totals, TrendPoint};
use leptos::prelude::*;

use super::ChartCard;
use crate::shared::components::stat_card::{format_value, ValueFormat};
use crate::shared::components::svg_chart::{
    area_path, color_at, coord, nice_max, polyline_points, x_positions, LinearScale,
};
use crate::shared::components::table::format_compact_currency;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 260.0;
const LEFT: f64 = 56.0;
const RIGHT: f64 = 16.0;
const TOP: f64 = 16.0;
const BOTTOM: f64 = 36.0;
const Y_TICKS: usize = 4;

fn render(points: Vec<TrendPoint>) -> AnyView {
    let max = points
        .iter()
        .map(|p| p.billed_usd.max(p.pending))
        .fold(0.0, f64::max);
    let y = LinearScale::new(nice_max(max), HEIGHT - BOTTOM, TOP);
    let xs = x_positions(points.len(), LEFT, WIDTH - RIGHT);

    let billed: Vec<(f64, f64)> = xs
        .iter()
        .zip(&points)
        .map(|(x, p)| (*x, y.scale(p.billed_usd)))
        .collect();
    let pending: Vec<(f64, f64)> = xs
        .iter()
        .zip(&points)
        .map(|(x, p)| (*x, y.scale(p.pending)))
        .collect();

    let billed_color = color_at(0);
    let pending_color = color_at(2);

    let grid = y
        .ticks(Y_TICKS)
        .into_iter()
        .map(|tick| {
            let ty = y.scale(tick);
            view! {
                <g class="chart__grid">
                    <line x1=coord(LEFT) x2=coord(WIDTH - RIGHT) y1=coord(ty) y2=coord(ty) />
                    <text x=coord(LEFT - 8.0) y=coord(ty + 4.0) text-anchor="end">
                        {format_compact_currency(tick)}
                    </text>
                </g>
            }
        })
        .collect_view();

    let labels = xs
        .iter()
        .zip(&points)
        .map(|(x, p)| {
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
                "{}: {} billed, {} pending, {} transactions",
                p.label,
                format_value(p.billed_usd, ValueFormat::Usd),
                format_value(p.pending, ValueFormat::Usd),
                p.transactions
            );
            view! { <circle cx=coord(*cx) cy=coord(*cy) r="4" fill=billed_color aria-label=tooltip /> }
        })
        .collect_view();

    view! {
        <svg class="chart chart--trend" viewBox=format!("0 0 {} {}", WIDTH, HEIGHT) preserveAspectRatio="xMidYMid meet">
            {grid}
            <path d=area_path(&billed, HEIGHT - BOTTOM) fill=billed_color fill-opacity="0.15" />
            <polyline points=polyline_points(&billed) fill="none" stroke=billed_color stroke-width="2" />
            <polyline
                points=polyline_points(&pending)
                fill="none"
                stroke=pending_color
                stroke-width="2"
                stroke-dasharray="6 4"
            />
            {markers}
            {labels}
        </svg>
        <div class="chart__legend">
            <span class="chart__legend-item">
                <span class="chart__legend-swatch" style=format!("background: {}", billed_color)></span>
                "Billed (USD)"
            </span>
            <span class="chart__legend-item">
                <span class="chart__legend-swatch" style=format!("background: {}", pending_color)></span>
                "Pending (USD)"
            </span>
        </div>
    }
    .into_any()
}

/// Monthly billed and pending amounts.
#[component]
pub fn SalesTrendChart(#[prop(into)] items: Signal<Vec<SalesTrendItem>>) -> impl IntoView {
    let summary = Signal::derive(move || {
        items.with(|items| {
            (!items.is_empty()).then(|| {
                let totals = trend_totals(items);
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
        <ChartCard title="Sales trend" summary=summary is_empty=is_empty>
            {move || items.with(|items| render(trend_points(items)))}
        </ChartCard>
    }
}
