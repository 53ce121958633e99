//! Client configuration.

use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_CSRF_COOKIE: &str = "csrftoken";
pub const DEFAULT_SESSION_COOKIE: &str = "sessionid";

/// Configuration for a chat client instance.
///
/// Replaces the page-global token source of the original front-end: every
/// value the client needs is carried here or on the client itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Service root, e.g. `http://localhost:8000`. No trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Name of the cookie carrying the CSRF token.
    #[serde(default = "default_csrf_cookie")]
    pub csrf_cookie: String,
    /// Name of the cookie carrying the session key.
    #[serde(default = "default_session_cookie")]
    pub session_cookie: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.into()
}
fn default_csrf_cookie() -> String {
    DEFAULT_CSRF_COOKIE.into()
}
fn default_session_cookie() -> String {
    DEFAULT_SESSION_COOKIE.into()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            csrf_cookie: DEFAULT_CSRF_COOKIE.into(),
            session_cookie: DEFAULT_SESSION_COOKIE.into(),
        }
    }
}

impl ClientConfig {
    /// Build configuration from environment variables and defaults.
    pub fn from_env() -> Self {
        let base_url = std::env::var("PAIRCHAT_BASE_URL")
            .ok()
            .map(|u| normalize_base_url(&u))
            .unwrap_or_else(|| DEFAULT_BASE_URL.into());
        let csrf_cookie =
            std::env::var("PAIRCHAT_CSRF_COOKIE").unwrap_or_else(|_| DEFAULT_CSRF_COOKIE.into());

        Self {
            base_url,
            csrf_cookie,
            session_cookie: DEFAULT_SESSION_COOKIE.into(),
        }
    }

    /// Build configuration pointing at a specific service root.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
            ..Self::default()
        }
    }
}

/// Strip trailing slashes so path concatenation stays predictable.
fn normalize_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}
