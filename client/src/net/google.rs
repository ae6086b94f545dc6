//! Google OAuth for "continue with Google".
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser is sent to Google's authorization endpoint with the implicit
//! grant. Google redirects back to `/auth/{kind}/google-callback` with an
//! access token in the URL fragment; the callback page reads the profile from
//! the userinfo endpoint and exchanges it for a backend token through
//! `net::auth::social_login`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "google_test.rs"]
mod google_test;

use serde::Deserialize;

use super::encode_component;
use super::error::ApiError;
use super::types::GoogleIdentity;

pub const AUTHORIZE_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
pub const USERINFO_URL: &str = "https://www.googleapis.com/oauth2/v3/userinfo";
const SCOPE: &str = "email profile";

/// Profile returned by the OpenID userinfo endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct GoogleUserInfo {
    #[serde(default)]
    pub sub: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub picture: Option<String>,
}

impl GoogleUserInfo {
    /// The identity forwarded to the backend. Google must have named the
    /// account (`sub`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] when `sub` is missing.
    pub fn into_identity(self) -> Result<GoogleIdentity, ApiError> {
        if self.sub.trim().is_empty() {
            return Err(ApiError::Decode("Could not get Google user ID".to_owned()));
        }
        Ok(GoogleIdentity { google_id: self.sub, email: self.email, name: self.name, picture: self.picture })
    }
}

/// Authorization URL for the implicit grant. `state` comes back unchanged on
/// the redirect.
pub fn authorize_url(client_id: &str, redirect_uri: &str, state: &str) -> String {
    format!(
        "{AUTHORIZE_URL}?client_id={}&redirect_uri={}&response_type=token&scope={}&state={}&prompt=select_account",
        encode_component(client_id),
        encode_component(redirect_uri),
        encode_component(SCOPE),
        encode_component(state),
    )
}

/// Values Google appends to the redirect URL fragment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OAuthRedirect {
    Granted { access_token: String, state: Option<String> },
    Denied(String),
    Missing,
}

/// Read `#access_token=...&state=...` (or `#error=...`) from a redirect.
pub fn parse_redirect_fragment(fragment: &str) -> OAuthRedirect {
    let mut access_token = None;
    let mut state = None;
    let mut error = None;
    for pair in fragment.trim_start_matches('#').split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        let value = value.replace('+', " ");
        let value = percent_encoding::percent_decode_str(&value).decode_utf8_lossy().into_owned();
        match key {
            "access_token" if !value.is_empty() => access_token = Some(value),
            "state" => state = Some(value),
            "error" => error = Some(value),
            _ => {}
        }
    }
    match (access_token, error) {
        (Some(access_token), _) => OAuthRedirect::Granted { access_token, state },
        (None, Some(error)) => OAuthRedirect::Denied(error),
        (None, None) => OAuthRedirect::Missing,
    }
}

/// Fetch the signed-in Google account's profile.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure, a rejected access token, or a
/// profile without an account id.
pub async fn fetch_identity(access_token: &str) -> Result<GoogleIdentity, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(USERINFO_URL)
            .header("Authorization", &format!("Bearer {access_token}"))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let info: GoogleUserInfo = super::client::read_json(resp, "Failed to read Google profile").await?;
        info.into_identity()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = access_token;
        Err(ApiError::Unavailable)
    }
}
