use super::view_model::RegionDetailsViewModel;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::system::auth::context::use_request_context;
use contracts::domain::a001_region::Region;
use leptos::prelude::*;

#[component]
pub fn RegionDetails(
    region: Option<Region>,
    on_saved: Callback<String>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = RegionDetailsViewModel::new(region.as_ref());
    let request_ctx = StoredValue::new(use_request_context());

    let title = if vm.is_edit_mode() { "Edit region" } else { "New region" };

    let close = Callback::new(move |_| {
        if !vm.saving.get_untracked() {
            on_cancel.run(());
        }
    });

    let error_for = move |field: &'static str| {
        move || vm.field_error(field).map(|e| view! { <div class="form__error">{e}</div> })
    };

    view! {
        <Modal title=title on_close=close>
            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="citCode">"City code *"</label>
                    <input
                        type="text"
                        id="citCode"
                        maxlength="10"
                        placeholder="CCS"
                        prop:value=move || vm.form.with(|f| f.cit_code.clone())
                        on:input=move |ev| vm.form.update(|f| f.cit_code = event_target_value(&ev))
                        disabled=move || vm.saving.get()
                    />
                    {error_for("citCode")}
                </div>

                <div class="form-group">
                    <label for="citName">"City *"</label>
                    <input
                        type="text"
                        id="citName"
                        placeholder="Caracas"
                        prop:value=move || vm.form.with(|f| f.cit_name.clone())
                        on:input=move |ev| vm.form.update(|f| f.cit_name = event_target_value(&ev))
                        disabled=move || vm.saving.get()
                    />
                    {error_for("citName")}
                </div>

                <div class="form-group">
                    <label for="staCode">"State code *"</label>
                    <input
                        type="text"
                        id="staCode"
                        maxlength="10"
                        placeholder="DC"
                        prop:value=move || vm.form.with(|f| f.sta_code.clone())
                        on:input=move |ev| vm.form.update(|f| f.sta_code = event_target_value(&ev))
                        disabled=move || vm.saving.get()
                    />
                    {error_for("staCode")}
                </div>
            </div>

            <div class="modal-footer details-actions">
                <button
                    class="btn btn-secondary"
                    on:click=move |_| close.run(())
                    disabled=move || vm.saving.get()
                >
                    "Cancel"
                </button>
                <button
                    class="btn btn-primary"
                    on:click=move |_| vm.save_command(request_ctx.get_value(), on_saved)
                    disabled=move || vm.saving.get()
                >
                    {icon("save")}
                    {move || match (vm.saving.get(), vm.is_edit_mode()) {
                        (true, _) => " Saving...",
                        (false, true) => " Save",
                        (false, false) => " Create",
                    }}
                </button>
            </div>
        </Modal>
    }
}
