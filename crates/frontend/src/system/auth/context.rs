use contracts::shared::error::ApiError;
use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};
use crate::config::use_app_config;
use crate::shared::api_utils::RequestContext;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<UserInfo>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn user_name(&self) -> String {
        self.user
            .as_ref()
            .map(|u| u.name.clone())
            .unwrap_or_else(|| "Guest".to_string())
    }
}

/// Auth context provider component.
///
/// A stored token is trusted right away (together with the cached user) and
/// then checked against `/auth/me`; a 401 there ends the session.
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let initial = match storage::get_access_token() {
        Some(token) => AuthState {
            token: Some(token),
            user: storage::get_user(),
        },
        None => AuthState::default(),
    };
    let (auth_state, set_auth_state) = signal(initial);
    let base_url = use_app_config().api_base_url;

    if let Some(token) = auth_state.get_untracked().token {
        spawn_local(async move {
            let ctx = RequestContext::new(base_url, Some(token.clone()));
            match api::get_current_user(&ctx).await {
                Ok(user) => {
                    storage::save_user(&user);
                    set_auth_state.set(AuthState {
                        token: Some(token),
                        user: Some(user),
                    });
                }
                Err(e) if e.is_unauthorized() => {
                    log::info!("stored session rejected, signing out");
                    clear_session(set_auth_state);
                }
                Err(e) => log::warn!("could not verify session: {}", e),
            }
        });
    }

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

fn clear_session(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_session();
    set_auth_state.set(AuthState::default());
}

/// Drops the session after a 401; the root view falls back to the login page.
pub fn handle_unauthorized(set_auth_state: WriteSignal<AuthState>) {
    log::warn!("request unauthorized, clearing session");
    clear_session(set_auth_state);
}

/// `RequestContext` for the signed-in user. A 401 on any call made with it
/// ends the session.
pub fn use_request_context() -> RequestContext {
    let (auth_state, set_auth_state) = use_auth();
    let config = use_app_config();
    let token = auth_state.with_untracked(|s| s.token.clone());
    RequestContext::new(config.api_base_url, token)
        .with_unauthorized_handler(Callback::new(move |_| handle_unauthorized(set_auth_state)))
}

pub async fn do_login(
    base_url: String,
    set_auth_state: WriteSignal<AuthState>,
    email: String,
    password: String,
) -> Result<(), ApiError> {
    let ctx = RequestContext::new(base_url, None);
    let data = api::login(&ctx, email, password).await?;

    storage::save_access_token(&data.token);
    storage::save_user(&data.user);
    log::info!("signed in as {}", data.user.email);

    set_auth_state.set(AuthState {
        token: Some(data.token),
        user: Some(data.user),
    });
    Ok(())
}

/// Revokes the token when possible; the local session is cleared regardless.
pub async fn do_logout(ctx: RequestContext, set_auth_state: WriteSignal<AuthState>) {
    if ctx.token.is_some() {
        if let Err(e) = api::logout(&ctx).await {
            log::warn!("logout request failed: {}", e);
        }
    }
    clear_session(set_auth_state);
}
