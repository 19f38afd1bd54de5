use crate::config::use_app_config;
use crate::domain::a001_region::api as region_api;
use crate::domain::a002_company_route::api;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{company_route_details_key, detail_tab_label, tab_label_for_key, COMPANY_ROUTE_NEW};
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::generic_table::{Align, Column, GenericTable, TableRecord};
use crate::shared::components::notice::{NoticeBanner, Notices};
use crate::shared::components::page_header::PageHeader;
use crate::shared::data_table::use_data_table;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::context::use_request_context;
use contracts::domain::a001_region::Region;
use contracts::domain::a002_company_route::CompanyRoute;
use contracts::shared::list::ListParams;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;
use thaw::*;

/// Entity name used for save notifications between tabs.
pub const ENTITY: &str = "a002_company_route";

const REGION_OPTIONS_LIMIT: usize = 100;

impl TableRecord for CompanyRoute {
    fn row_id(&self) -> i64 {
        self.id
    }
}

fn open_details(ctx: AppGlobalContext, route: &CompanyRoute) {
    let key = company_route_details_key(route.id);
    let title = detail_tab_label(tab_label_for_key(&key), &route.code);
    ctx.open_tab(&key, &title);
}

#[component]
#[allow(non_snake_case)]
pub fn CompanyRouteList() -> impl IntoView {
    let tabs_ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let config = use_app_config();
    let request_ctx = StoredValue::new(use_request_context());
    let notices = Notices::new();

    let table = use_data_table(
        move |params| {
            let ctx = request_ctx.get_value();
            async move { api::list(&ctx, params).await }
        },
        config.default_page_size,
        config.search_debounce_ms,
    );

    let regions: RwSignal<Vec<Region>> = RwSignal::new(Vec::new());
    spawn_local(async move {
        let params = ListParams::new(1, REGION_OPTIONS_LIMIT);
        match region_api::list(&request_ctx.get_value(), params).await {
            Ok(page) => regions.set(page.items),
            Err(e) => log::error!("failed to load region options: {}", e),
        }
    });

    // "" = all regions
    let region_filter = RwSignal::new(String::new());
    Effect::new(move |prev: Option<String>| {
        let value = region_filter.get();
        if prev.is_some_and(|p| p != value) {
            table.set_filter("region_id", value.clone());
        }
        value
    });

    // Saves made in a details tab reload this list.
    Effect::new(move |prev: Option<u64>| {
        let revision = tabs_ctx.revision(ENTITY);
        if prev.is_some_and(|p| p != revision) {
            table.refresh();
        }
        revision
    });

    let deleting = RwSignal::new(false);
    let pending_delete: RwSignal<Option<CompanyRoute>> = RwSignal::new(None);

    let confirm_delete = Callback::new(move |_| {
        let Some(route) = pending_delete.get_untracked() else {
            return;
        };
        deleting.set(true);
        let ctx = request_ctx.get_value();
        spawn_local(async move {
            match api::delete(&ctx, route.id).await {
                Ok(message) => {
                    notices.success(message);
                    tabs_ctx.close_tab(&company_route_details_key(route.id));
                    table.refresh();
                }
                Err(e) => notices.error(e.user_message()),
            }
            deleting.set(false);
            pending_delete.set(None);
        });
    });

    let columns = vec![
        Column::text("code", "Code", |r: &CompanyRoute| r.code.clone()),
        Column::new("name", "Name", |r: &CompanyRoute, _| {
            view! {
                <div class="cell-stack">
                    <span class="cell-stack__primary">{r.name.clone()}</span>
                    <span class="cell-stack__secondary">{format!("RIF: {}", r.rif)}</span>
                </div>
            }
            .into_any()
        })
        .min_width(220),
        Column::text("route_name", "Route", |r: &CompanyRoute| r.route_label().to_string()),
        Column::text("region", "Region", |r: &CompanyRoute| r.region_label()),
        Column::new("db_name", "Database", |r: &CompanyRoute, _| {
            view! { <code class="cell-code">{r.db_name.clone()}</code> }.into_any()
        }),
        Column::new("actions", "Actions", move |route: &CompanyRoute, _| {
            let for_edit = route.clone();
            let for_delete = route.clone();
            view! {
                <Flex gap=FlexGap::Small justify=FlexJustify::End>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| open_details(tabs_ctx, &for_edit)
                        attr:title="Edit"
                    >
                        {icon("edit")}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| pending_delete.set(Some(for_delete.clone()))
                        attr:title="Delete"
                    >
                        {icon("trash")}
                    </Button>
                </Flex>
            }
            .into_any()
        })
        .align(Align::Right),
    ];

    let header_controls: ChildrenFn = Arc::new(move || {
        view! {
            <div class="generic-table__filter">
                <Select value=region_filter>
                    <option value="">"All regions"</option>
                    {move || {
                        regions
                            .get()
                            .into_iter()
                            .map(|r| view! { <option value=r.id.to_string()>{r.display_name()}</option> })
                            .collect_view()
                    }}
                </Select>
            </div>
            <Button
                appearance=ButtonAppearance::Primary
                on_click=move |_| tabs_ctx.open_tab(COMPANY_ROUTE_NEW, tab_label_for_key(COMPANY_ROUTE_NEW))
            >
                {icon("plus")}
                " Add route"
            </Button>
        }
        .into_any()
    });

    view! {
        <PageFrame page_id="a002_company_route--list" category=PAGE_CAT_LIST>
            <PageHeader title="Company Routes" subtitle="Distributors and the database each one reports from">
                <Badge>{move || table.total_signal().get().to_string()}</Badge>
            </PageHeader>

            <div class="page__content">
                <NoticeBanner notices=notices />

                <GenericTable
                    columns=columns
                    data=table.data_signal()
                    loading=table.loading_signal()
                    total=table.total_signal()
                    page=table.page_signal()
                    page_size=table.page_size_signal()
                    search_query=table.search_signal()
                    on_page_change=table.on_page_change()
                    on_page_size_change=table.on_page_size_change()
                    on_search_change=table.on_search_change()
                    search_placeholder="Code, name or RIF..."
                    header_action=header_controls
                />
            </div>

            {move || pending_delete.get().map(|route| view! {
                <ConfirmDialog
                    title="Delete company route"
                    message=format!("Delete company route \"{} - {}\"?", route.code, route.name)
                    busy=deleting
                    on_confirm=confirm_delete
                    on_cancel=Callback::new(move |_| pending_delete.set(None))
                />
            })}
        </PageFrame>
    }
}
