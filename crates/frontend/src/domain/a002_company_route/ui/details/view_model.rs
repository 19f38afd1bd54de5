use contracts::domain::a001_region::Region;
use contracts::domain::a002_company_route::{CompanyRoute, CompanyRouteForm};
use contracts::shared::validation::FormErrors;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_region::api as region_api;
use crate::domain::a002_company_route::api;
use crate::shared::api_utils::RequestContext;

#[derive(Clone, Copy)]
pub struct CompanyRouteDetailsViewModel {
    pub id: Option<i64>,
    pub form: RwSignal<CompanyRouteForm>,
    pub regions: RwSignal<Vec<Region>>,
    pub errors: RwSignal<FormErrors>,
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
}

impl CompanyRouteDetailsViewModel {
    pub fn new(id: Option<i64>) -> Self {
        Self {
            id,
            form: RwSignal::new(CompanyRouteForm::default()),
            regions: RwSignal::new(Vec::new()),
            errors: RwSignal::new(FormErrors::new()),
            error: RwSignal::new(None),
            loading: RwSignal::new(id.is_some()),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    pub fn field_error(&self, field: &str) -> Option<String> {
        self.errors.with(|e| e.get(field).map(str::to_string))
    }

    pub fn load_regions(&self, ctx: RequestContext) {
        let regions = self.regions;
        spawn_local(async move {
            match region_api::list_all(&ctx).await {
                Ok(list) => regions.set(list),
                Err(e) => log::error!("failed to load regions: {}", e),
            }
        });
    }

    /// Fetches the record in edit mode; `on_loaded` receives it (tab title).
    pub fn load_if_needed(&self, ctx: RequestContext, on_loaded: Callback<CompanyRoute>) {
        let Some(id) = self.id else {
            return;
        };
        let this = *self;
        spawn_local(async move {
            match api::get(&ctx, id).await {
                Ok(route) => {
                    this.form.set(CompanyRouteForm::from(&route));
                    on_loaded.run(route);
                }
                Err(e) => {
                    log::error!("failed to load company route {}: {}", id, e);
                    this.error.set(Some(e.user_message()));
                }
            }
            this.loading.set(false);
        });
    }

    pub fn save_command(&self, ctx: RequestContext, on_saved: Callback<String>) {
        if self.saving.get_untracked() || self.loading.get_untracked() {
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
                    .map(|e| e.message_or("Company route updated")),
                None => api::create(&ctx, &form)
                    .await
                    .map(|e| e.message_or("Company route created")),
            };
            this.saving.set(false);
            match result {
                // the callback may close the tab, so it runs last
                Ok(message) => {
                    log::info!("company route saved: {}", form.code);
                    on_saved.run(message);
                }
                Err(e) => {
                    log::warn!("company route save failed: {}", e);
                    if e.is_validation() {
                        this.errors.update(|errors| errors.merge_server(&e.field_errors()));
                    }
                    this.error.set(Some(e.user_message()));
                }
            }
        });
    }
}
