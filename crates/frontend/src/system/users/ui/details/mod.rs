//! Add/edit dialog for a user.
//!
//! Client-side rules run first; on a 422 the backend's field errors are
//! merged in and the dialog stays open.

use contracts::shared::validation::FormErrors;
use contracts::system::users::{FormMode, Role, User, UserForm};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::components::form_field::FormField;
use crate::shared::modal::Modal;
use crate::system::auth::context::use_request_context;
use crate::system::users::api;

#[derive(Clone, Copy)]
struct UserFormViewModel {
    id: Option<i64>,
    name: RwSignal<String>,
    email: RwSignal<String>,
    password: RwSignal<String>,
    password_confirmation: RwSignal<String>,
    role_id: RwSignal<String>,
    active: RwSignal<bool>,
    errors: RwSignal<FormErrors>,
    error: RwSignal<Option<String>>,
    saving: RwSignal<bool>,
}

impl UserFormViewModel {
    fn new(user: Option<&User>) -> Self {
        let form = user.map(UserForm::from_user).unwrap_or_default();
        Self {
            id: user.map(|u| u.id),
            name: RwSignal::new(form.name),
            email: RwSignal::new(form.email),
            password: RwSignal::new(String::new()),
            password_confirmation: RwSignal::new(String::new()),
            role_id: RwSignal::new(
                form.roles.first().map(|id| id.to_string()).unwrap_or_default(),
            ),
            active: RwSignal::new(form.active),
            errors: RwSignal::new(FormErrors::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    fn mode(&self) -> FormMode {
        if self.id.is_some() {
            FormMode::Edit
        } else {
            FormMode::Add
        }
    }

    fn to_form(&self) -> UserForm {
        UserForm {
            name: self.name.get_untracked(),
            email: self.email.get_untracked(),
            password: Some(self.password.get_untracked()),
            password_confirmation: Some(self.password_confirmation.get_untracked()),
            roles: self
                .role_id
                .get_untracked()
                .parse::<i64>()
                .map(|id| vec![id])
                .unwrap_or_default(),
            active: self.active.get_untracked(),
        }
    }
}

#[component]
pub fn UserFormDialog(
    /// `None` opens the dialog in add mode
    user: Option<User>,
    #[prop(into)] roles: Signal<Vec<Role>>,
    on_close: Callback<()>,
    /// Receives the success message
    on_saved: Callback<String>,
) -> impl IntoView {
    let vm = UserFormViewModel::new(user.as_ref());
    let request_ctx = StoredValue::new(use_request_context());
    let title = match vm.mode() {
        FormMode::Add => "New user".to_string(),
        FormMode::Edit => format!("Edit user: {}", user.as_ref().map(|u| u.name.as_str()).unwrap_or("")),
    };
    let is_saving = Signal::derive(move || vm.saving.get());
    let errors = Signal::derive(move || vm.errors.get());

    let save = move || {
        if vm.saving.get_untracked() {
            return;
        }
        let form = vm.to_form().normalized();
        if let Err(errors) = form.validate(vm.mode()) {
            vm.errors.set(errors);
            return;
        }
        vm.errors.set(FormErrors::new());
        vm.error.set(None);
        vm.saving.set(true);

        let ctx = request_ctx.get_value();
        spawn_local(async move {
            let result = match vm.id {
                Some(id) => api::update(&ctx, id, &form).await.map(|_| "User updated"),
                None => api::create(&ctx, &form).await.map(|_| "User created"),
            };
            match result {
                Ok(message) => {
                    log::info!("user saved: {}", form.email);
                    on_saved.run(message.to_string());
                }
                Err(e) => {
                    log::warn!("user save failed: {}", e);
                    if e.is_validation() {
                        vm.errors.update(|errors| errors.merge_server(&e.field_errors()));
                    }
                    vm.error.set(Some(e.user_message()));
                    vm.saving.set(false);
                }
            }
        });
    };

    let close = Callback::new(move |_| {
        if !vm.saving.get_untracked() {
            on_close.run(());
        }
    });

    let password_required = vm.mode() == FormMode::Add;
    let password_label = match vm.mode() {
        FormMode::Add => "Password",
        FormMode::Edit => "New password (leave blank to keep)",
    };

    view! {
        <Modal title=title on_close=close>
            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <FormField label="Name" field="name" errors=errors required=true>
                <Input value=vm.name disabled=is_saving />
            </FormField>

            <FormField label="Email" field="email" errors=errors required=true>
                <Input value=vm.email input_type=InputType::Email disabled=is_saving />
            </FormField>

            <FormField label=password_label field="password" errors=errors required=password_required>
                <Input value=vm.password input_type=InputType::Password disabled=is_saving />
            </FormField>

            <FormField label="Confirm password" field="password_confirmation" errors=errors>
                <Input value=vm.password_confirmation input_type=InputType::Password disabled=is_saving />
            </FormField>

            <FormField label="Role" field="roles" errors=errors required=true>
                <Select value=vm.role_id>
                    <option value="">"Select a role"</option>
                    {move || {
                        roles
                            .get()
                            .into_iter()
                            .map(|role| {
                                let id = role.id.to_string();
                                let selected = vm.role_id.get_untracked() == id;
                                view! {
                                    <option value=id selected=selected>
                                        {role.display_label().to_string()}
                                    </option>
                                }
                            })
                            .collect_view()
                    }}
                </Select>
            </FormField>

            <div class="form__group">
                <Checkbox checked=vm.active label="Active" />
            </div>

            <div class="modal-footer">
                <Flex gap=FlexGap::Small justify=FlexJustify::End>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| close.run(())
                        disabled=is_saving
                    >
                        "Cancel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| save()
                        disabled=is_saving
                    >
                        <Show when=move || vm.saving.get()>
                            <Spinner size=SpinnerSize::Tiny />
                        </Show>
                        {move || if vm.saving.get() { "Saving..." } else { "Save" }}
                    </Button>
                </Flex>
            </div>
        </Modal>
    }
}
