//! Application configuration.
//!
//! Values are fixed at build time (`DASHBOARD_API_URL`); when the variable is
//! not set the API is expected on port 8000 of the host serving the app.

use contracts::shared::data_table::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS, SEARCH_DEBOUNCE_MS};
use leptos::prelude::*;

const API_PORT: u16 = 8000;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Without trailing slash, e.g. "http://localhost:8000/api"
    pub api_base_url: String,
    pub default_page_size: usize,
    pub search_debounce_ms: u32,
    pub page_size_options: Vec<usize>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let api_base_url = option_env!("DASHBOARD_API_URL")
            .map(normalize_base_url)
            .filter(|url| !url.is_empty())
            .unwrap_or_else(api_base_from_location);

        Self {
            api_base_url,
            default_page_size: DEFAULT_PAGE_SIZE,
            search_debounce_ms: SEARCH_DEBOUNCE_MS,
            page_size_options: PAGE_SIZE_OPTIONS.to_vec(),
        }
    }
}

/// `{protocol}//{hostname}:8000/api` from `window.location`.
fn api_base_from_location() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return format!("http://127.0.0.1:{}/api", API_PORT),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}/api", protocol, hostname, API_PORT)
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

pub fn join_url(base: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

/// Config provided by `App`; falls back to the build-time values.
pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_else(AppConfig::from_env)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(
            normalize_base_url(" https://api.example.com/api/ "),
            "https://api.example.com/api"
        );
    }

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("http://localhost:8000/api", "/regions"),
            "http://localhost:8000/api/regions"
        );
        assert_eq!(
            join_url("http://localhost:8000/api", "users/roles"),
            "http://localhost:8000/api/users/roles"
        );
    }
}
