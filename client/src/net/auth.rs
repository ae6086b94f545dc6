//! Registration, verification, login, and password-reset endpoints.
//!
//! Users and companies share one flow under different prefixes
//! (`/auth/user/*`, `/auth/company/*`), so every call takes the audience as a
//! [`PrincipalKind`]. Tokens returned here are handed to
//! `SessionStore::set_token`; nothing in this module touches storage.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde_json::{Map, Value, json};

use super::client::{ApiClient, Auth, Method};
use super::error::ApiError;
use super::types::{AuthResponse, GoogleIdentity, VerificationDetails};
use crate::state::session::{Principal, PrincipalKind};

pub(crate) fn auth_endpoint(audience: PrincipalKind, action: &str) -> String {
    format!("/auth/{}/{action}", audience.as_str())
}

/// JSON body for finishing verification with account details.
pub(crate) fn verification_body(audience: PrincipalKind, token: &str, details: &VerificationDetails) -> Value {
    let name_key = match audience {
        PrincipalKind::User => "username",
        PrincipalKind::Company => "name",
    };
    let mut body = Map::new();
    body.insert("token".to_owned(), Value::from(token));
    body.insert(name_key.to_owned(), Value::from(details.name.as_str()));
    body.insert("password".to_owned(), Value::from(details.password.as_str()));
    body.insert("no_handphone".to_owned(), Value::from(details.phone.as_str()));
    Value::Object(body)
}

/// Start registration for `email`; the backend mails a verification link.
///
/// # Errors
///
/// Returns [`ApiError`] when the request fails.
pub async fn register(api: &ApiClient, audience: PrincipalKind, email: &str) -> Result<AuthResponse, ApiError> {
    let body = json!({ "email": email });
    api.call_with(Method::Post, &auth_endpoint(audience, "register"), Auth::Anonymous, Some(&body), "Registration failed")
        .await
}

/// Confirm the verification token and set the account's name, password and phone.
///
/// # Errors
///
/// Returns [`ApiError`] when the request fails.
pub async fn complete_verification(
    api: &ApiClient,
    audience: PrincipalKind,
    token: &str,
    details: &VerificationDetails,
) -> Result<AuthResponse, ApiError> {
    let body = verification_body(audience, token, details);
    api.call_with(Method::Post, &auth_endpoint(audience, "verify"), Auth::Anonymous, Some(&body), "Verification failed")
        .await
}

/// Ask whether a verification token has already been used.
///
/// # Errors
///
/// Returns [`ApiError`] when the request fails.
pub async fn check_verification(api: &ApiClient, audience: PrincipalKind, token: &str) -> Result<AuthResponse, ApiError> {
    let body = json!({ "token": token });
    api.call_with(
        Method::Post,
        &auth_endpoint(audience, "check-verification"),
        Auth::Anonymous,
        Some(&body),
        "Failed to check verification status",
    )
    .await
}

/// Email + password login.
///
/// # Errors
///
/// Returns [`ApiError`] when the credentials are rejected or the request fails.
pub async fn login(api: &ApiClient, audience: PrincipalKind, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    let body = json!({ "email": email, "password": password });
    api.call_with(Method::Post, &auth_endpoint(audience, "login"), Auth::Anonymous, Some(&body), "Login failed")
        .await
}

/// Exchange a Google identity for a backend token.
///
/// # Errors
///
/// Returns [`ApiError`] when the request fails.
pub async fn social_login(
    api: &ApiClient,
    audience: PrincipalKind,
    identity: &GoogleIdentity,
) -> Result<AuthResponse, ApiError> {
    let fallback = match audience {
        PrincipalKind::User => "Social login failed",
        PrincipalKind::Company => "Company social login failed",
    };
    log::debug!("social login for {} {}", audience.as_str(), identity.email);
    api.call_with(Method::Post, &auth_endpoint(audience, "social-login"), Auth::Anonymous, Some(identity), fallback)
        .await
}

/// Request a password-reset email.
///
/// # Errors
///
/// Returns [`ApiError`] when the request fails.
pub async fn forgot_password(api: &ApiClient, audience: PrincipalKind, email: &str) -> Result<AuthResponse, ApiError> {
    let body = json!({ "email": email });
    api.call_with(
        Method::Post,
        &auth_endpoint(audience, "forgot-password"),
        Auth::Anonymous,
        Some(&body),
        "Forgot password request failed",
    )
    .await
}

/// Set a new password using the emailed reset token.
///
/// # Errors
///
/// Returns [`ApiError`] when the request fails.
pub async fn reset_password(
    api: &ApiClient,
    audience: PrincipalKind,
    token: &str,
    password: &str,
) -> Result<AuthResponse, ApiError> {
    let body = json!({ "token": token, "password": password });
    api.call_with(Method::Post, &auth_endpoint(audience, "reset-password"), Auth::Anonymous, Some(&body), "Password reset failed")
        .await
}

/// Exchange a bearer token for the principal it belongs to (`GET /auth/session`).
///
/// # Errors
///
/// Returns [`ApiError`] on any non-2xx status or an unrecognized payload.
pub async fn fetch_session(api: &ApiClient, token: &str) -> Result<Principal, ApiError> {
    api.call(Method::Get, "/auth/session", Auth::Token(token), "Session fetch failed").await
}
