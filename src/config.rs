//! Backend endpoint configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The client runs in the browser, so there is no process environment at
//! runtime. Overrides are baked in at compile time via `option_env!` and
//! parsed through the same pure function the tests exercise.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use thiserror::Error;

use crate::net::api::HttpMethod;

pub const DEFAULT_BACKEND_ORIGIN: &str = "http://localhost:8080";
pub const DEFAULT_PROVIDER: &str = "google";
pub const DEFAULT_ME_PATH: &str = "/auth/me";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("backend origin must start with http:// or https://, got '{0}'")]
    InvalidOrigin(String),
    #[error("unsupported logout method '{0}' (expected 'get' or 'post')")]
    InvalidLogoutMethod(String),
    #[error("provider name must not be empty")]
    EmptyProvider,
}

/// Raw override values, one per recognized variable.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigVars<'a> {
    pub origin: Option<&'a str>,
    pub provider: Option<&'a str>,
    pub login_path: Option<&'a str>,
    pub me_path: Option<&'a str>,
    pub logout_path: Option<&'a str>,
    pub logout_method: Option<&'a str>,
}

/// Where the auth backend lives and which paths it exposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Scheme + host + optional port, no trailing slash.
    pub origin: String,
    /// Page the browser navigates to for the OAuth handshake.
    pub login_path: String,
    /// JSON endpoint returning the current session's user.
    pub me_path: String,
    /// Endpoint that clears the server-side session.
    pub logout_path: String,
    pub logout_method: HttpMethod,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::with_provider(DEFAULT_BACKEND_ORIGIN, DEFAULT_PROVIDER)
    }
}

impl BackendConfig {
    /// Config using the backend's provider-scoped routes
    /// (`/auth/{provider}` and `/auth/logout/{provider}`).
    pub fn with_provider(origin: &str, provider: &str) -> Self {
        Self {
            origin: normalize_origin(origin),
            login_path: format!("/auth/{provider}"),
            me_path: DEFAULT_ME_PATH.to_owned(),
            logout_path: format!("/auth/logout/{provider}"),
            logout_method: HttpMethod::Get,
        }
    }

    /// Build config from compile-time variables.
    ///
    /// Optional:
    /// - `SESSION_VIEW_BACKEND_ORIGIN`: default `http://localhost:8080`
    /// - `SESSION_VIEW_PROVIDER`: default `google`
    /// - `SESSION_VIEW_LOGIN_PATH`: default `/auth/{provider}`
    /// - `SESSION_VIEW_ME_PATH`: default `/auth/me`
    /// - `SESSION_VIEW_LOGOUT_PATH`: default `/auth/logout/{provider}`
    /// - `SESSION_VIEW_LOGOUT_METHOD`: `get` (default) or `post`
    ///
    /// Invalid values fall back to the defaults with a warning.
    pub fn from_env() -> Self {
        let vars = ConfigVars {
            origin: option_env!("SESSION_VIEW_BACKEND_ORIGIN"),
            provider: option_env!("SESSION_VIEW_PROVIDER"),
            login_path: option_env!("SESSION_VIEW_LOGIN_PATH"),
            me_path: option_env!("SESSION_VIEW_ME_PATH"),
            logout_path: option_env!("SESSION_VIEW_LOGOUT_PATH"),
            logout_method: option_env!("SESSION_VIEW_LOGOUT_METHOD"),
        };
        match Self::from_vars(vars) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("invalid backend config, using defaults: {e}");
                Self::default()
            }
        }
    }

    /// Build config from explicit override values.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the origin is not an http(s) URL, the
    /// provider is blank, or the logout method is not recognized.
    pub fn from_vars(vars: ConfigVars<'_>) -> Result<Self, ConfigError> {
        let origin = vars.origin.unwrap_or(DEFAULT_BACKEND_ORIGIN).trim();
        if !(origin.starts_with("http://") || origin.starts_with("https://")) {
            return Err(ConfigError::InvalidOrigin(origin.to_owned()));
        }
        let provider = vars.provider.unwrap_or(DEFAULT_PROVIDER).trim();
        if provider.is_empty() {
            return Err(ConfigError::EmptyProvider);
        }

        let mut config = Self::with_provider(origin, provider);
        if let Some(path) = vars.login_path {
            config.login_path = normalize_path(path);
        }
        if let Some(path) = vars.me_path {
            config.me_path = normalize_path(path);
        }
        if let Some(path) = vars.logout_path {
            config.logout_path = normalize_path(path);
        }
        config.logout_method = parse_logout_method(vars.logout_method)?;
        Ok(config)
    }

    /// Absolute URL for a backend path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.origin, normalize_path(path))
    }

    pub fn login_url(&self) -> String {
        self.url(&self.login_path)
    }

    pub fn me_url(&self) -> String {
        self.url(&self.me_path)
    }

    pub fn logout_url(&self) -> String {
        self.url(&self.logout_path)
    }
}

fn normalize_origin(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}

fn normalize_path(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with('/') {
        trimmed.to_owned()
    } else {
        format!("/{trimmed}")
    }
}

fn parse_logout_method(raw: Option<&str>) -> Result<HttpMethod, ConfigError> {
    match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
        None | Some("get") => Ok(HttpMethod::Get),
        Some("post") => Ok(HttpMethod::Post),
        Some(other) => Err(ConfigError::InvalidLogoutMethod(other.to_owned())),
    }
}
