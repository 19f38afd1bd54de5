use contracts::domain::a002_company_route::{CompanyRoute, CompanyRouteForm};
use contracts::shared::envelope::ApiEnvelope;
use contracts::shared::error::ApiError;
use contracts::shared::list::{ListParams, ListResult};

use crate::shared::api_utils::{delete_with_message, get_data, get_page, post_json, put_json, RequestContext};

const RESOURCE: &str = "/company-routes";

/// The endpoint reads the search text from `search`, not `query`.
pub async fn list(
    ctx: &RequestContext,
    params: ListParams,
) -> Result<ListResult<CompanyRoute>, ApiError> {
    get_page(ctx, RESOURCE, &params.to_query_string_with("search")).await
}

pub async fn get(ctx: &RequestContext, id: i64) -> Result<CompanyRoute, ApiError> {
    get_data(ctx, &format!("{}/{}", RESOURCE, id)).await
}

pub async fn create(
    ctx: &RequestContext,
    form: &CompanyRouteForm,
) -> Result<ApiEnvelope<CompanyRoute>, ApiError> {
    post_json(ctx, RESOURCE, form).await
}

pub async fn update(
    ctx: &RequestContext,
    id: i64,
    form: &CompanyRouteForm,
) -> Result<ApiEnvelope<CompanyRoute>, ApiError> {
    put_json(ctx, &format!("{}/{}", RESOURCE, id), form).await
}

pub async fn delete(ctx: &RequestContext, id: i64) -> Result<String, ApiError> {
    delete_with_message(ctx, &format!("{}/{}", RESOURCE, id), "Company route deleted").await
}
