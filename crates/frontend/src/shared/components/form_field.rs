use contracts::shared::validation::FormErrors;
use leptos::prelude::*;
use thaw::*;

/// Labelled `form__group` with the error of `field` shown under the input.
#[component]
pub fn FormField(
    #[prop(into)] label: String,
    field: &'static str,
    #[prop(into)] errors: Signal<FormErrors>,
    #[prop(optional)] required: bool,
    children: Children,
) -> impl IntoView {
    let error = move || errors.with(|e| e.get(field).map(str::to_string));

    view! {
        <div class="form__group" class:form__group--invalid=move || error().is_some()>
            <Label>{label}{required.then_some(" *")}</Label>
            {children()}
            {move || error().map(|message| view! { <div class="form__error">{message}</div> })}
        </div>
    }
}
