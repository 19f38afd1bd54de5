use contracts::shared::envelope::ApiEnvelope;
use contracts::shared::error::ApiError;
use contracts::shared::list::{ListParams, ListResult};
use contracts::system::users::{Role, User, UserForm};

use crate::shared::api_utils::{
    delete_with_message, get_data, get_page, patch_json, post_json, put_json, RequestContext,
};

const RESOURCE: &str = "/users";

pub async fn list(ctx: &RequestContext, params: ListParams) -> Result<ListResult<User>, ApiError> {
    get_page(ctx, RESOURCE, &params.to_query_string()).await
}

pub async fn roles(ctx: &RequestContext) -> Result<Vec<Role>, ApiError> {
    get_data(ctx, &format!("{}/roles", RESOURCE)).await
}

pub async fn create(ctx: &RequestContext, form: &UserForm) -> Result<User, ApiError> {
    let envelope: ApiEnvelope<User> = post_json(ctx, RESOURCE, form).await?;
    Ok(envelope.data)
}

pub async fn update(ctx: &RequestContext, id: i64, form: &UserForm) -> Result<User, ApiError> {
    let envelope: ApiEnvelope<User> = put_json(ctx, &format!("{}/{}", RESOURCE, id), form).await?;
    Ok(envelope.data)
}

pub async fn delete(ctx: &RequestContext, id: i64) -> Result<String, ApiError> {
    delete_with_message(ctx, &format!("{}/{}", RESOURCE, id), "User deleted").await
}

pub async fn toggle_status(ctx: &RequestContext, id: i64) -> Result<User, ApiError> {
    let envelope: ApiEnvelope<User> =
        patch_json(ctx, &format!("{}/{}/toggle-status", RESOURCE, id)).await?;
    Ok(envelope.data)
}
