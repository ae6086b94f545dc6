//! Client configuration baked in at compile time.
//!
//! The WASM bundle has no process environment, so settings come from
//! `option_env!` when the crate is built.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// REST backend origin without a trailing slash.
    pub api_base_url: String,
    pub log_level: log::Level,
    /// OAuth client id for "continue with Google"; the button is hidden
    /// without one.
    pub google_client_id: Option<String>,
}

impl ClientConfig {
    /// Build config from compile-time variables.
    ///
    /// Optional:
    /// - `JOBBOARD_API_URL`: default `http://localhost:8000`
    /// - `JOBBOARD_LOG_LEVEL`: `error`..`trace`, default `info`
    /// - `JOBBOARD_GOOGLE_CLIENT_ID`: enables Google sign-in
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("JOBBOARD_API_URL"),
            option_env!("JOBBOARD_LOG_LEVEL"),
            option_env!("JOBBOARD_GOOGLE_CLIENT_ID"),
        )
    }

    /// Build config from raw values; blank or unparseable values fall back to
    /// the defaults.
    pub fn from_values(api_base_url: Option<&str>, log_level: Option<&str>, google_client_id: Option<&str>) -> Self {
        let api_base_url = api_base_url
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        let google_client_id = google_client_id.map(str::trim).filter(|v| !v.is_empty()).map(str::to_owned);
        Self { api_base_url, log_level: parse_log_level(log_level), google_client_id }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_values(None, None, None)
    }
}

fn parse_log_level(raw: Option<&str>) -> log::Level {
    raw.and_then(|v| v.trim().parse::<log::Level>().ok()).unwrap_or(DEFAULT_LOG_LEVEL)
}
