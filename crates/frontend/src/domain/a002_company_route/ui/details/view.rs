use super::view_model::CompanyRouteDetailsViewModel;
use crate::domain::a002_company_route::ui::list::ENTITY;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{company_route_details_key, detail_tab_label, tab_label_for_key};
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::system::auth::context::use_request_context;
use contracts::domain::a002_company_route::{CompanyRoute, CompanyRouteForm};
use leptos::prelude::*;
use thaw::*;

type Getter = fn(&CompanyRouteForm) -> String;
type Setter = fn(&mut CompanyRouteForm, String);

fn text_field(
    vm: CompanyRouteDetailsViewModel,
    label: &'static str,
    field: &'static str,
    placeholder: &'static str,
    get: Getter,
    set: Setter,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=field>{label}</label>
            <input
                type="text"
                id=field
                placeholder=placeholder
                prop:value=move || vm.form.with(get)
                on:input=move |ev| vm.form.update(|f| set(f, event_target_value(&ev)))
                disabled=move || vm.saving.get() || vm.loading.get()
            />
            {move || vm.field_error(field).map(|e| view! { <div class="form__error">{e}</div> })}
        </div>
    }
}

#[component]
pub fn CompanyRouteDetails(id: Option<i64>, on_close: Callback<()>) -> impl IntoView {
    let tabs_ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let request_ctx = use_request_context();
    let vm = CompanyRouteDetailsViewModel::new(id);

    vm.load_regions(request_ctx.clone());
    vm.load_if_needed(
        request_ctx.clone(),
        Callback::new(move |route: CompanyRoute| {
            let key = company_route_details_key(route.id);
            tabs_ctx.update_tab_title(&key, &detail_tab_label(tab_label_for_key(&key), &route.code));
        }),
    );

    let request_ctx = StoredValue::new(request_ctx);
    let on_saved = Callback::new(move |message: String| {
        log::info!("{}", message);
        tabs_ctx.notify_saved(ENTITY);
        on_close.run(());
        tabs_ctx.open_tab(ENTITY, tab_label_for_key(ENTITY));
    });

    let title = if vm.is_edit_mode() { "Edit company route" } else { "New company route" };
    let busy = Signal::derive(move || vm.saving.get() || vm.loading.get());

    view! {
        <PageFrame page_id="a002_company_route--detail" category=PAGE_CAT_DETAIL>
            <PageHeader title=title>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_close.run(())
                    disabled=Signal::derive(move || vm.saving.get())
                >
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.save_command(request_ctx.get_value(), on_saved)
                    disabled=busy
                >
                    {icon("save")}
                    {move || if vm.saving.get() { " Saving..." } else { " Save" }}
                </Button>
            </PageHeader>

            <div class="page__content">
                {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <Show when=move || vm.loading.get()>
                    <div class="details-loading">
                        <Spinner size=SpinnerSize::Tiny />
                        " Loading..."
                    </div>
                </Show>

                <div class="details-form details-form--two-columns">
                    {text_field(vm, "Code *", "code", "RT-001", |f| f.code.clone(), |f, v| f.code = v)}
                    {text_field(vm, "Name *", "name", "Distribuidora Centro", |f| f.name.clone(), |f, v| f.name = v)}
                    {text_field(
                        vm,
                        "Route name",
                        "route_name",
                        "Centro 1",
                        |f| f.route_name.clone().unwrap_or_default(),
                        |f, v| f.route_name = Some(v),
                    )}
                    {text_field(vm, "RIF *", "rif", "J-12345678-9", |f| f.rif.clone(), |f, v| f.rif = v)}
                    {text_field(
                        vm,
                        "Fiscal address *",
                        "fiscal_address",
                        "",
                        |f| f.fiscal_address.clone(),
                        |f, v| f.fiscal_address = v,
                    )}
                    {text_field(vm, "Database *", "db_name", "dist_centro", |f| f.db_name.clone(), |f, v| f.db_name = v)}

                    <div class="form-group">
                        <label for="region_id">"Region *"</label>
                        <select
                            id="region_id"
                            on:change=move |ev| {
                                let value = event_target_value(&ev).parse::<i64>().ok();
                                vm.form.update(|f| f.region_id = value);
                            }
                            disabled=move || busy.get()
                        >
                            <option value="" selected=move || vm.form.with(|f| f.region_id.is_none())>
                                "Select a region"
                            </option>
                            {move || {
                                let selected = vm.form.with(|f| f.region_id);
                                vm.regions
                                    .get()
                                    .into_iter()
                                    .map(|r| {
                                        let is_selected = selected == Some(r.id);
                                        view! {
                                            <option value=r.id.to_string() selected=is_selected>
                                                {r.display_name()}
                                            </option>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </select>
                        {move || vm.field_error("region_id").map(|e| view! { <div class="form__error">{e}</div> })}
                    </div>

                    <div class="form-group form-group--wide">
                        <label for="description">"Description"</label>
                        <textarea
                            id="description"
                            rows="3"
                            prop:value=move || vm.form.with(|f| f.description.clone().unwrap_or_default())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                vm.form.update(|f| {
                                    f.description = if value.is_empty() { None } else { Some(value) };
                                });
                            }
                            disabled=move || busy.get()
                        />
                    </div>
                </div>
            </div>
        </PageFrame>
    }
}
