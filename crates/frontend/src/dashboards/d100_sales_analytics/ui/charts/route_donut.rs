use contracts::dashboards::d100_sales_analytics::dto::SalesByRouteItem;
use contracts::dashboards::d100_sales_analytics::pivot::{route_slices, RouteSlice};
use leptos::prelude::*;

use super::ChartCard;
use crate::shared::components::stat_card::{format_value, ValueFormat};
use crate::shared::components::svg_chart::{color_at, coord, donut_segment_path, segment_label_point};

const SIZE: f64 = 240.0;
const OUTER: f64 = 110.0;
const INNER: f64 = 64.0;

fn donut(slices: &[RouteSlice]) -> AnyView {
    let center = SIZE / 2.0;
    let mut start = 0.0;
    let segments = slices
        .iter()
        .enumerate()
        .map(|(i, slice)| {
            let end = start + slice.share;
            let d = donut_segment_path(center, center, OUTER, INNER, start, end);
            let label = slice.show_label.then(|| {
                let (x, y) = segment_label_point(center, center, (OUTER + INNER) / 2.0, start, end);
                view! {
                    <text class="donut__label" x=coord(x) y=coord(y + 4.0) text-anchor="middle">
                        {format!("{:.0}%", slice.share * 100.0)}
                    </text>
                }
            });
            start = end;
            view! {
                <g>
                    <path d=d fill=color_at(i) aria-label=slice.route.clone() />
                    {label}
                </g>
            }
        })
        .collect_view();

    view! {
        <svg class="chart chart--donut" viewBox=format!("0 0 {} {}", SIZE, SIZE)>
            {segments}
        </svg>
    }
    .into_any()
}

/// Share of billed USD per route, with a legend table.
#[component]
pub fn RouteDonutChart(#[prop(into)] items: Signal<Vec<SalesByRouteItem>>) -> impl IntoView {
    let slices = Memo::new(move |_| items.with(|items| route_slices(items)));
    // an all-zero total leaves nothing to draw
    let is_empty = Signal::derive(move || slices.with(|s| s.iter().all(|s| s.share == 0.0)));

    let legend = move || {
        slices
            .get()
            .into_iter()
            .enumerate()
            .map(|(i, slice)| {
                view! {
                    <tr>
                        <td>
                            <span class="chart__legend-swatch" style=format!("background: {}", color_at(i))></span>
                            {slice.route}
                        </td>
                        <td class="text-right">{format_value(slice.billed_usd, ValueFormat::Usd)}</td>
                        <td class="text-right">{slice.transactions}</td>
                        <td class="text-right">{format!("{:.1}%", slice.share * 100.0)}</td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <ChartCard title="Sales by route" is_empty=is_empty>
            <div class="donut">
                {move || slices.with(|s| donut(s))}
                <table class="donut__legend">
                    <thead>
                        <tr>
                            <th>"Route"</th>
                            <th class="text-right">"USD"</th>
                            <th class="text-right">"Transactions"</th>
                            <th class="text-right">"Share"</th>
                        </tr>
                    </thead>
                    <tbody>{legend}</tbody>
                </table>
            </div>
        </ChartCard>
    }
}
