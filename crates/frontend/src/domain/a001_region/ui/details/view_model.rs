use contracts::domain::a001_region::{Region, RegionForm};
use contracts::shared::validation::FormErrors;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_region::api;
use crate::shared::api_utils::RequestContext;

/// ViewModel for the region form
#[derive(Clone, Copy)]
pub struct RegionDetailsViewModel {
    pub id: Option<i64>,
    pub form: RwSignal<RegionForm>,
    pub errors: RwSignal<FormErrors>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl RegionDetailsViewModel {
    pub fn new(region: Option<&Region>) -> Self {
        Self {
            id: region.map(|r| r.id),
            form: RwSignal::new(region.map(RegionForm::from).unwrap_or_default()),
            errors: RwSignal::new(FormErrors::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    pub fn field_error(&self, field: &str) -> Option<String> {
        self.errors.with(|e| e.get(field).map(str::to_string))
    }

    /// Validates, then creates or updates. `on_saved` gets the backend message.
    pub fn save_command(&self, ctx: RequestContext, on_saved: Callback<String>) {
        if self.saving.get_untracked() {
            return;
        }
        let form = self.form.get_untracked().normalized();
        if let Err(errors) = form.validate() {
            self.errors.set(errors);
            return;
        }

        let this = *self;
        this.errors.set(FormErrors::new());
        this.error.set(None);
        this.saving.set(true);

        spawn_local(async move {
            let result = match this.id {
                Some(id) => api::update(&ctx, id, &form)
                    .await
                    .map(|e| e.message_or("Region updated")),
                None => api::create(&ctx, &form)
                    .await
                    .map(|e| e.message_or("Region created")),
            };
            match result {
                Ok(message) => on_saved.run(message),
                Err(e) => {
                    log::warn!("region save failed: {}", e);
                    if e.is_validation() {
                        this.errors.update(|errors| errors.merge_server(&e.field_errors()));
                    }
                    this.error.set(Some(e.user_message()));
                    this.saving.set(false);
                }
            }
        });
    }
}
