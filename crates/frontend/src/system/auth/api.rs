use contracts::shared::envelope::ApiEnvelope;
use contracts::shared::error::ApiError;
use contracts::system::auth::{LoginData, LoginRequest, UserInfo};

use crate::shared::api_utils::{get_data, post_json, RequestContext};

/// `POST /auth/login`; `ctx` carries no token.
pub async fn login(ctx: &RequestContext, email: String, password: String) -> Result<LoginData, ApiError> {
    let request = LoginRequest { email, password };
    let envelope: ApiEnvelope<LoginData> = post_json(ctx, "/auth/login", &request).await?;
    Ok(envelope.data)
}

/// `GET /auth/me`
pub async fn get_current_user(ctx: &RequestContext) -> Result<UserInfo, ApiError> {
    get_data(ctx, "/auth/me").await
}

/// `POST /auth/logout`, revokes the token server side.
pub async fn logout(ctx: &RequestContext) -> Result<(), ApiError> {
    let _: serde_json::Value = post_json(ctx, "/auth/logout", &serde_json::json!({})).await?;
    Ok(())
}
