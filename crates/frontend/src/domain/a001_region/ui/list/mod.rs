use crate::config::use_app_config;
use crate::domain::a001_region::api;
use crate::domain::a001_region::ui::details::RegionDetails;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::generic_table::{Align, Column, GenericTable, TableRecord};
use crate::shared::components::notice::{NoticeBanner, Notices};
use crate::shared::components::page_header::PageHeader;
use crate::shared::data_table::use_data_table;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::context::use_request_context;
use contracts::domain::a001_region::Region;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;
use thaw::*;

impl TableRecord for Region {
    fn row_id(&self) -> i64 {
        self.id
    }
}

#[derive(Clone, Debug, PartialEq)]
enum Dialog {
    Form(Option<Region>),
    Delete(Region),
}

#[component]
#[allow(non_snake_case)]
pub fn RegionList() -> impl IntoView {
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

    let dialog: RwSignal<Option<Dialog>> = RwSignal::new(None);
    let deleting = RwSignal::new(false);

    let confirm_delete = Callback::new(move |_| {
        let Some(Dialog::Delete(region)) = dialog.get_untracked() else {
            return;
        };
        deleting.set(true);
        let ctx = request_ctx.get_value();
        spawn_local(async move {
            match api::delete(&ctx, region.id).await {
                Ok(message) => {
                    notices.success(message);
                    table.refresh();
                }
                Err(e) => notices.error(e.user_message()),
            }
            deleting.set(false);
            dialog.set(None);
        });
    });

    let columns = vec![
        Column::new("index", "#", move |_: &Region, i| {
            (table.row_offset_untracked() + i + 1).to_string().into_any()
        })
        .align(Align::Center),
        Column::text("citCode", "Code", |r: &Region| r.cit_code.clone()),
        Column::text("citName", "City", |r: &Region| r.cit_name.clone()).min_width(180),
        Column::text("staCode", "State code", |r: &Region| r.sta_code.clone()),
        Column::text("created_at", "Created", |r: &Region| {
            r.created_at.as_deref().map(format_date).unwrap_or_else(|| "-".to_string())
        }),
        Column::new("actions", "Actions", move |region: &Region, _| {
            let for_edit = region.clone();
            let for_delete = region.clone();
            view! {
                <Flex gap=FlexGap::Small justify=FlexJustify::End>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| dialog.set(Some(Dialog::Form(Some(for_edit.clone()))))
                        attr:title="Edit"
                    >
                        {icon("edit")}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| dialog.set(Some(Dialog::Delete(for_delete.clone())))
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

    let add_button: ChildrenFn = Arc::new(move || {
        view! {
            <Button
                appearance=ButtonAppearance::Primary
                on_click=move |_| dialog.set(Some(Dialog::Form(None)))
            >
                {icon("plus")}
                " Add region"
            </Button>
        }
        .into_any()
    });

    view! {
        <PageFrame page_id="a001_region--list" category=PAGE_CAT_LIST>
            <PageHeader title="Regions" subtitle="Cities and states covered by the sales routes">
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
                    search_placeholder="Code or city..."
                    header_action=add_button
                />
            </div>

            {move || match dialog.get() {
                Some(Dialog::Form(region)) => view! {
                    <RegionDetails
                        region=region
                        on_saved=Callback::new(move |message: String| {
                            dialog.set(None);
                            notices.success(message);
                            table.refresh();
                        })
                        on_cancel=Callback::new(move |_| dialog.set(None))
                    />
                }
                .into_any(),
                Some(Dialog::Delete(region)) => view! {
                    <ConfirmDialog
                        title="Delete region"
                        message=format!("Delete region \"{}\"?", region.display_name())
                        busy=deleting
                        on_confirm=confirm_delete
                        on_cancel=Callback::new(move |_| dialog.set(None))
                    />
                }
                .into_any(),
                None => ().into_any(),
            }}
        </PageFrame>
    }
}
