use contracts::domain::a001_region::{Region, RegionForm};
use contracts::shared::envelope::ApiEnvelope;
use contracts::shared::error::ApiError;
use contracts::shared::list::{ListParams, ListResult};

use crate::shared::api_utils::{delete_with_message, get_data, get_page, post_json, put_json, RequestContext};

const RESOURCE: &str = "/regions";

pub async fn list(ctx: &RequestContext, params: ListParams) -> Result<ListResult<Region>, ApiError> {
    get_page(ctx, RESOURCE, &params.to_query_string()).await
}

/// Unpaginated list for selects.
pub async fn list_all(ctx: &RequestContext) -> Result<Vec<Region>, ApiError> {
    get_data(ctx, &format!("{}/all", RESOURCE)).await
}

pub async fn create(ctx: &RequestContext, form: &RegionForm) -> Result<ApiEnvelope<Region>, ApiError> {
    post_json(ctx, RESOURCE, form).await
}

pub async fn update(
    ctx: &RequestContext,
    id: i64,
    form: &RegionForm,
) -> Result<ApiEnvelope<Region>, ApiError> {
    put_json(ctx, &format!("{}/{}", RESOURCE, id), form).await
}

pub async fn delete(ctx: &RequestContext, id: i64) -> Result<String, ApiError> {
    delete_with_message(ctx, &format!("{}/{}", RESOURCE, id), "Region deleted").await
}
