use crate::shared::icons::icon;
use leptos::prelude::*;

/// FilterPanel component - collapsible panel holding filter fields and the
/// chips of the active selections.
#[component]
pub fn FilterPanel(
    #[prop(into)] is_expanded: RwSignal<bool>,

    /// Number of active selections (badge next to the title)
    #[prop(into)]
    active_filters_count: Signal<usize>,

    /// Buttons shown on the right of the header (Apply, Clear)
    #[prop(optional, into)]
    header_actions: Option<ChildrenFn>,

    #[prop(into)] filter_content: ChildrenFn,

    #[prop(optional, into)] filter_tags: Option<ChildrenFn>,
) -> impl IntoView {
    let toggle_expanded = move |_| {
        is_expanded.update(|e| *e = !*e);
    };

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div class="filter-panel-header__left" on:click=toggle_expanded>
                    <span class=move || {
                        if is_expanded.get() {
                            "filter-panel__chevron filter-panel__chevron--expanded"
                        } else {
                            "filter-panel__chevron"
                        }
                    }>
                        {icon("chevron-down")}
                    </span>
                    {icon("filter")}
                    <span class="filter-panel__title">"Filters"</span>
                    {move || {
                        let count = active_filters_count.get();
                        (count > 0).then(|| view! {
                            <span class="badge badge--primary">{count}</span>
                        })
                    }}
                </div>
                <div class="filter-panel-header__right">
                    {header_actions.as_ref().map(|actions| actions())}
                </div>
            </div>

            <div class=move || {
                if is_expanded.get() {
                    "filter-panel__collapsible filter-panel__collapsible--expanded"
                } else {
                    "filter-panel__collapsible filter-panel__collapsible--collapsed"
                }
            }>
                <div class="filter-panel-content">
                    {filter_content()}
                </div>
            </div>

            {filter_tags.as_ref().map(|tags| view! {
                <div class="filter-panel__tags">{tags()}</div>
            })}
        </div>
    }
}

/// FilterTag component - removable chip for one selected value
#[component]
pub fn FilterTag(
    #[prop(into)] label: String,

    on_remove: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="filter-tag">
            <span>{label}</span>
            <svg
                width="12"
                height="12"
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
                class="filter-tag__remove"
                on:click=move |e| {
                    e.stop_propagation();
                    on_remove.run(());
                }
            >
                <line x1="18" y1="6" x2="6" y2="18"></line>
                <line x1="6" y1="6" x2="18" y2="18"></line>
            </svg>
        </div>
    }
}
