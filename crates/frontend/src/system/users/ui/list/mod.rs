use contracts::system::users::{Role, User};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashSet;
use std::sync::Arc;
use thaw::*;

use crate::config::use_app_config;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::generic_table::{Align, Column, GenericTable, TableRecord};
use crate::shared::components::notice::{NoticeBanner, Notices};
use crate::shared::components::page_header::PageHeader;
use crate::shared::data_table::use_data_table;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::auth::context::use_request_context;
use crate::system::users::api;
use crate::system::users::ui::details::UserFormDialog;

impl TableRecord for User {
    fn row_id(&self) -> i64 {
        self.id
    }
}

/// Which dialog is open over the list.
#[derive(Clone, Debug, PartialEq)]
enum Dialog {
    Form(Option<User>),
    Delete(User),
}

fn role_badges(user: &User) -> AnyView {
    if user.roles.is_empty() {
        return view! { <span class="badge badge--neutral">"No role"</span> }.into_any();
    }
    user.roles
        .iter()
        .map(|role| {
            let class = if role.name == "admin" {
                "badge badge--warning"
            } else {
                "badge badge--neutral"
            };
            view! { <span class=class>{role.display_label().to_string()}</span> }
        })
        .collect_view()
        .into_any()
}

#[component]
pub fn UsersListPage() -> impl IntoView {
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

    let roles: RwSignal<Vec<Role>> = RwSignal::new(Vec::new());
    spawn_local(async move {
        match api::roles(&request_ctx.get_value()).await {
            Ok(list) => roles.set(list),
            Err(e) => log::error!("failed to load roles: {}", e),
        }
    });

    let dialog: RwSignal<Option<Dialog>> = RwSignal::new(None);
    let deleting = RwSignal::new(false);
    // ids whose status toggle is in flight
    let toggling: RwSignal<HashSet<i64>> = RwSignal::new(HashSet::new());

    let toggle_status = move |user: User| {
        if toggling.with_untracked(|t| t.contains(&user.id)) {
            return;
        }
        toggling.update(|t| {
            t.insert(user.id);
        });
        let ctx = request_ctx.get_value();
        spawn_local(async move {
            match api::toggle_status(&ctx, user.id).await {
                Ok(updated) => {
                    let state = if updated.active { "activated" } else { "deactivated" };
                    notices.success(format!("User {} {}", updated.name, state));
                    table.refresh();
                }
                Err(e) => notices.error(e.user_message()),
            }
            toggling.update(|t| {
                t.remove(&user.id);
            });
        });
    };

    let confirm_delete = Callback::new(move |_| {
        let Some(Dialog::Delete(user)) = dialog.get_untracked() else {
            return;
        };
        deleting.set(true);
        let ctx = request_ctx.get_value();
        spawn_local(async move {
            match api::delete(&ctx, user.id).await {
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
        Column::new("name", "Name", |user: &User, _| {
            view! {
                <div class="cell-stack">
                    <span class="cell-stack__primary">{user.name.clone()}</span>
                    <span class="cell-stack__secondary">{user.email.clone()}</span>
                </div>
            }
            .into_any()
        })
        .min_width(220),
        Column::new("roles", "Roles", |user: &User, _| role_badges(user)),
        Column::new("active", "Active", move |user: &User, _| {
            let id = user.id;
            let row = user.clone();
            view! {
                <label class="switch" title="Toggle status">
                    <input
                        type="checkbox"
                        prop:checked=user.active
                        disabled=move || toggling.with(|t| t.contains(&id))
                        on:change=move |_| toggle_status(row.clone())
                    />
                    <span class="switch__slider"></span>
                </label>
            }
            .into_any()
        })
        .align(Align::Center),
        Column::text("created_at", "Created", |user: &User| {
            user.created_at
                .as_deref()
                .map(format_datetime)
                .unwrap_or_else(|| "-".to_string())
        }),
        Column::new("actions", "Actions", move |user: &User, _| {
            let for_edit = user.clone();
            let for_delete = user.clone();
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
                " New"
            </Button>
        }
        .into_any()
    });

    view! {
        <PageFrame page_id="sys_users--list" category=PAGE_CAT_SYSTEM>
            <PageHeader title="Users" subtitle="Accounts with access to the dashboard">
                <Badge>{move || table.total_signal().get().to_string()}</Badge>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| table.refresh()
                    disabled=table.loading_signal()
                >
                    {icon("refresh")}
                    " Refresh"
                </Button>
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
                    search_placeholder="Name or email..."
                    header_action=add_button
                />
            </div>

            {move || match dialog.get() {
                Some(Dialog::Form(user)) => view! {
                    <UserFormDialog
                        user=user
                        roles=roles
                        on_close=Callback::new(move |_| dialog.set(None))
                        on_saved=Callback::new(move |message: String| {
                            dialog.set(None);
                            notices.success(message);
                            table.refresh();
                        })
                    />
                }
                .into_any(),
                Some(Dialog::Delete(user)) => view! {
                    <ConfirmDialog
                        title="Delete user"
                        message=format!("Delete user \"{}\"? This cannot be undone.", user.name)
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
