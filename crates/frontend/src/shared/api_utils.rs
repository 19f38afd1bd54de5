//! HTTP helpers for the backend REST API.
//!
//! Every call takes an explicit [`RequestContext`]: base URL, bearer token and
//! the hook to run when the backend answers 401. Nothing here reads storage.

use contracts::shared::envelope::{ApiEnvelope, PaginatedEnvelope};
use contracts::shared::error::ApiError;
use contracts::shared::list::ListResult;
use gloo_net::http::{Request, RequestBuilder};
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::join_url;

#[derive(Clone)]
pub struct RequestContext {
    pub base_url: String,
    pub token: Option<String>,
    pub on_unauthorized: Option<Callback<()>>,
}

impl RequestContext {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token,
            on_unauthorized: None,
        }
    }

    pub fn with_unauthorized_handler(mut self, handler: Callback<()>) -> Self {
        self.on_unauthorized = Some(handler);
        self
    }

    pub fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = builder.header("Accept", "application/json");
        match &self.token {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    fn builder(self, url: &str) -> RequestBuilder {
        match self {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
            Method::Put => Request::put(url),
            Method::Patch => Request::patch(url),
            Method::Delete => Request::delete(url),
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

async fn execute<B, T>(
    ctx: &RequestContext,
    method: Method,
    path: &str,
    body: Option<&B>,
) -> Result<T, ApiError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let url = ctx.url(path);
    let builder = ctx.authorize(method.builder(&url));

    let request = match body {
        Some(body) => builder.json(body),
        None => builder.build(),
    }
    .map_err(|e| ApiError::Transport(format!("Failed to build request: {}", e)))?;

    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Transport(format!("Failed to send request: {}", e)))?;

    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Transport(format!("Failed to read response: {}", e)))?;

    if !(200..300).contains(&status) {
        let error = ApiError::from_response(status, &text);
        log::warn!("{} {} -> {}", method.as_str(), url, error);
        if error.is_unauthorized() {
            if let Some(handler) = ctx.on_unauthorized {
                handler.run(());
            }
        }
        return Err(error);
    }

    decode(&text)
}

/// Parses a 2xx body; an empty body reads as JSON `null`.
pub fn decode<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    let text = if text.trim().is_empty() { "null" } else { text };
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn get_json<T: DeserializeOwned>(ctx: &RequestContext, path: &str) -> Result<T, ApiError> {
    execute::<(), T>(ctx, Method::Get, path, None).await
}

pub async fn post_json<B, T>(ctx: &RequestContext, path: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    execute(ctx, Method::Post, path, Some(body)).await
}

pub async fn put_json<B, T>(ctx: &RequestContext, path: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    execute(ctx, Method::Put, path, Some(body)).await
}

pub async fn patch_json<T: DeserializeOwned>(ctx: &RequestContext, path: &str) -> Result<T, ApiError> {
    execute::<(), T>(ctx, Method::Patch, path, None).await
}

pub async fn delete_json<T: DeserializeOwned>(
    ctx: &RequestContext,
    path: &str,
) -> Result<T, ApiError> {
    execute::<(), T>(ctx, Method::Delete, path, None).await
}

/// `DELETE {path}` returning the backend message, or `fallback` when the
/// response carries none (including a bodiless 2xx).
pub async fn delete_with_message(
    ctx: &RequestContext,
    path: &str,
    fallback: &str,
) -> Result<String, ApiError> {
    let envelope: Option<ApiEnvelope<Option<serde_json::Value>>> = delete_json(ctx, path).await?;
    Ok(envelope
        .map(|e| e.message_or(fallback))
        .unwrap_or_else(|| fallback.to_string()))
}

/// `GET {resource}?{query}` unwrapped into a [`ListResult`].
pub async fn get_page<T: DeserializeOwned>(
    ctx: &RequestContext,
    resource: &str,
    query: &str,
) -> Result<ListResult<T>, ApiError> {
    let path = if query.is_empty() {
        resource.to_string()
    } else {
        format!("{}?{}", resource, query)
    };
    let envelope: PaginatedEnvelope<T> = get_json(ctx, &path).await?;
    Ok(envelope.into())
}

/// `data` of a `{status, message, data}` response.
pub async fn get_data<T: DeserializeOwned>(ctx: &RequestContext, path: &str) -> Result<T, ApiError> {
    let envelope: ApiEnvelope<T> = get_json(ctx, path).await?;
    Ok(envelope.data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        id: i64,
    }

    #[test]
    fn test_decode_envelope() {
        let envelope: ApiEnvelope<Row> =
            decode(r#"{"status": "success", "message": "ok", "data": {"id": 4}}"#).unwrap();
        assert_eq!(envelope.data, Row { id: 4 });
    }

    #[test]
    fn test_decode_empty_body() {
        let value: Option<Row> = decode("").unwrap();
        assert_eq!(value, None);
    }

    #[test]
    fn test_decode_error() {
        let result: Result<Row, ApiError> = decode("<html>");
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_context_url() {
        let ctx = RequestContext::new("http://localhost:8000/api", Some("t".to_string()));
        assert_eq!(ctx.url("/regions/3"), "http://localhost:8000/api/regions/3");
        assert!(ctx.on_unauthorized.is_none());
    }
}
