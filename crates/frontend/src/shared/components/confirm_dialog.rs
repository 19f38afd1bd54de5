use crate::shared::modal::Modal;
use leptos::prelude::*;
use thaw::*;

/// Yes/no dialog used before destructive actions.
///
/// While `busy` is true both buttons are disabled and the confirm button
/// shows a spinner.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(optional, into)] confirm_label: Option<String>,
    #[prop(into)] busy: Signal<bool>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let confirm_label = confirm_label.unwrap_or_else(|| "Delete".to_string());

    let close = Callback::new(move |_| {
        if !busy.get_untracked() {
            on_cancel.run(());
        }
    });

    view! {
        <Modal title=title on_close=close class="modal--narrow">
            <p class="confirm-dialog__message">{message}</p>
            <div class="modal-footer">
                <Flex gap=FlexGap::Small justify=FlexJustify::End>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| close.run(())
                        disabled=busy
                    >
                        "Cancel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        class="button--danger"
                        on_click=move |_| on_confirm.run(())
                        disabled=busy
                    >
                        <Show when=move || busy.get()>
                            <Spinner size=SpinnerSize::Tiny />
                        </Show>
                        {confirm_label}
                    </Button>
                </Flex>
            </div>
        </Modal>
    }
}
