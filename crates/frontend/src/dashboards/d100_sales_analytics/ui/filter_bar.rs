use contracts::dashboards::d100_sales_analytics::dto::AvailableFilters;
use contracts::dashboards::d100_sales_analytics::filters::AnalyticsFilterState;
use leptos::prelude::*;
use std::sync::Arc;
use thaw::*;

use crate::shared::components::filter_panel::{FilterPanel, FilterTag};
use crate::shared::date_utils::{parse_iso_date, to_iso_date};
use crate::shared::icons::icon;

/// Select that adds the picked option to a multi-selection and resets
/// itself to the placeholder.
#[component]
fn PickSelect(
    #[prop(into)] label: String,
    placeholder: &'static str,
    /// (value, text) of the options not yet selected
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    #[prop(into)] disabled: Signal<bool>,
    on_pick: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="form__group filter-field">
            <Label>{label}</Label>
            <select
                class="filter-field__select"
                prop:value=""
                disabled=move || disabled.get()
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    if !value.is_empty() {
                        on_pick.run(value);
                    }
                    // back to the placeholder
                    event_target::<web_sys::HtmlSelectElement>(&ev).set_value("");
                }
            >
                <option value="">{placeholder}</option>
                {move || {
                    options
                        .get()
                        .into_iter()
                        .map(|(value, text)| view! { <option value=value>{text}</option> })
                        .collect_view()
                }}
            </select>
        </div>
    }
}

fn selection_count(state: &AnalyticsFilterState) -> usize {
    state.region_ids.len() + state.client_ids.len() + state.product_skus.len() + state.routes.len()
}

#[component]
pub fn AnalyticsFilterBar(
    state: RwSignal<AnalyticsFilterState>,
    #[prop(into)] available: Signal<AvailableFilters>,
    #[prop(into)] filters_loading: Signal<bool>,
    #[prop(into)] loading: Signal<bool>,
    on_apply: Callback<()>,
) -> impl IntoView {
    let is_expanded = RwSignal::new(true);
    let active_count = Signal::derive(move || state.with(selection_count));
    let range_invalid = Signal::derive(move || !state.with(|s| s.is_range_valid()));

    let region_options = Signal::derive(move || {
        let selected = state.with(|s| s.region_ids.clone());
        available.with(|a| {
            a.regions
                .iter()
                .filter(|r| !selected.contains(&r.id))
                .map(|r| (r.id.to_string(), r.name.clone()))
                .collect::<Vec<_>>()
        })
    });

    let client_options = Signal::derive(move || {
        state.with(|s| {
            available.with(|a| {
                s.client_options(&a.clients)
                    .into_iter()
                    .filter(|c| !s.client_ids.contains(&c.id))
                    .map(|c| (c.id.to_string(), c.name.clone()))
                    .collect::<Vec<_>>()
            })
        })
    });

    let product_options = Signal::derive(move || {
        let selected = state.with(|s| s.product_skus.clone());
        available.with(|a| {
            a.products
                .iter()
                .filter(|p| !selected.contains(&p.sku))
                .map(|p| (p.sku.clone(), format!("{} ({})", p.name, p.sku)))
                .collect::<Vec<_>>()
        })
    });

    let pick_region = Callback::new(move |value: String| {
        if let Ok(id) = value.parse::<i64>() {
            available.with_untracked(|a| state.update(|s| s.toggle_region(id, &a.clients)));
        }
    });
    let pick_client = Callback::new(move |value: String| {
        if let Ok(id) = value.parse::<i64>() {
            state.update(|s| s.toggle_client(id));
        }
    });
    let pick_product = Callback::new(move |sku: String| state.update(|s| s.toggle_product(&sku)));

    let options_disabled = Signal::derive(move || filters_loading.get() || loading.get());

    let header_actions: ChildrenFn = Arc::new(move || {
        view! {
            <Flex gap=FlexGap::Small>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| state.update(|s| s.clear_selections())
                    disabled=Signal::derive(move || active_count.get() == 0 || loading.get())
                >
                    "Clear"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| on_apply.run(())
                    disabled=Signal::derive(move || loading.get() || range_invalid.get())
                >
                    <Show when=move || loading.get() fallback=|| icon("search")>
                        <Spinner size=SpinnerSize::Tiny />
                    </Show>
                    " Apply"
                </Button>
            </Flex>
        }
        .into_any()
    });

    let filter_content: ChildrenFn = Arc::new(move || {
        view! {
            <div class="filter-grid">
                <div class="form__group filter-field">
                    <Label>"From"</Label>
                    <input
                        type="date"
                        prop:value=move || state.with(|s| s.start_date.map(to_iso_date).unwrap_or_default())
                        on:change=move |ev| {
                            let date = parse_iso_date(&event_target_value(&ev));
                            state.update(|s| s.start_date = date);
                        }
                    />
                </div>
                <div class="form__group filter-field">
                    <Label>"To"</Label>
                    <input
                        type="date"
                        prop:value=move || state.with(|s| s.end_date.map(to_iso_date).unwrap_or_default())
                        on:change=move |ev| {
                            let date = parse_iso_date(&event_target_value(&ev));
                            state.update(|s| s.end_date = date);
                        }
                    />
                </div>
                <PickSelect
                    label="Regions"
                    placeholder="Add region..."
                    options=region_options
                    disabled=options_disabled
                    on_pick=pick_region
                />
                <PickSelect
                    label="Clients"
                    placeholder="Add client..."
                    options=client_options
                    disabled=options_disabled
                    on_pick=pick_client
                />
                <PickSelect
                    label="Products"
                    placeholder="Add product..."
                    options=product_options
                    disabled=options_disabled
                    on_pick=pick_product
                />
            </div>
            <Show when=move || range_invalid.get()>
                <div class="form__error">"Pick a start date on or before the end date"</div>
            </Show>
        }
        .into_any()
    });

    let filter_tags: ChildrenFn = Arc::new(move || {
        view! {
            {move || {
                let s = state.get();
                available.with(|a| {
                    let regions = s.region_ids.iter().map(|id| {
                        let id = *id;
                        let name = a.regions.iter().find(|r| r.id == id).map(|r| r.name.clone());
                        view! {
                            <FilterTag
                                label=format!("Region: {}", name.unwrap_or_else(|| id.to_string()))
                                on_remove=Callback::new(move |_| pick_region.run(id.to_string()))
                            />
                        }
                    }).collect_view();
                    let clients = s.client_ids.iter().map(|id| {
                        let id = *id;
                        let name = a.clients.iter().find(|c| c.id == id).map(|c| c.name.clone());
                        view! {
                            <FilterTag
                                label=format!("Client: {}", name.unwrap_or_else(|| id.to_string()))
                                on_remove=Callback::new(move |_| state.update(|s| s.toggle_client(id)))
                            />
                        }
                    }).collect_view();
                    let products = s.product_skus.iter().map(|sku| {
                        let remove = sku.clone();
                        let name = a.products.iter().find(|p| &p.sku == sku).map(|p| p.name.clone());
                        view! {
                            <FilterTag
                                label=format!("Product: {}", name.unwrap_or_else(|| sku.clone()))
                                on_remove=Callback::new(move |_| state.update(|s| s.toggle_product(&remove)))
                            />
                        }
                    }).collect_view();
                    view! { {regions} {clients} {products} }
                })
            }}
        }
        .into_any()
    });

    view! {
        <FilterPanel
            is_expanded=is_expanded
            active_filters_count=active_count
            header_actions=header_actions
            filter_content=filter_content
            filter_tags=filter_tags
        />
    }
}
