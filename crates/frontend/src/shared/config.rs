//! Application-wide settings, resolved once at start-up and shared via context.

use crate::shared::list_utils::{DEFAULT_PAGE_SIZE, DEFAULT_PAGE_SIZE_OPTIONS};
use leptos::prelude::*;

/// Backend port used when no explicit API URL was compiled in
pub const DEFAULT_API_PORT: u16 = 3000;

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub api_base: String,
    pub default_page_size: usize,
    pub page_size_options: Vec<usize>,
}

impl AppConfig {
    /// Reads the compile-time `SCHOOL_API_URL` override, falling back to the
    /// current page's host on port 3000.
    pub fn from_env() -> Self {
        let api_base = match option_env!("SCHOOL_API_URL") {
            Some(url) if !url.trim().is_empty() => url.trim_end_matches('/').to_string(),
            _ => location_api_base(),
        };
        Self::with_api_base(api_base)
    }

    pub fn with_api_base(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            default_page_size: DEFAULT_PAGE_SIZE,
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Builds "protocol//hostname:3000" from `window.location`.
/// Returns an empty string outside a browser.
fn location_api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, DEFAULT_API_PORT)
}

pub fn provide_app_config(config: AppConfig) {
    provide_context(config);
}

/// Falls back to `AppConfig::from_env` when no config was provided,
/// which keeps components usable in isolation.
pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_else(AppConfig::from_env)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_api_base_uses_list_defaults() {
        let config = AppConfig::with_api_base("http://school.local:3000");
        assert_eq!(config.default_page_size, 10);
        assert_eq!(config.page_size_options, vec![5, 10, 20, 50]);
    }
}
