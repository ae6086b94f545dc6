//! Profile read/update for the signed-in user or company.

use super::client::{ApiClient, Auth, Method};
use super::error::ApiError;
use super::types::{CompanyProfile, CompanyProfilePatch, UserProfile, UserProfilePatch};
use crate::state::session::PrincipalKind;

/// # Errors
///
/// Returns [`ApiError`] when the request fails.
pub async fn user_profile(api: &ApiClient) -> Result<UserProfile, ApiError> {
    api.call(Method::Get, "/user-profile", Auth::Slot(PrincipalKind::User), "Failed to fetch profile").await
}

/// # Errors
///
/// Returns [`ApiError`] when the request fails.
pub async fn update_user_profile(api: &ApiClient, patch: &UserProfilePatch) -> Result<UserProfile, ApiError> {
    api.call_with(Method::Put, "/user-profile", Auth::Slot(PrincipalKind::User), Some(patch), "Failed to update profile")
        .await
}

/// # Errors
///
/// Returns [`ApiError`] when the request fails.
pub async fn company_profile(api: &ApiClient) -> Result<CompanyProfile, ApiError> {
    api.call(Method::Get, "/company-profile", Auth::Slot(PrincipalKind::Company), "Failed to fetch profile")
        .await
}

/// # Errors
///
/// Returns [`ApiError`] when the request fails.
pub async fn update_company_profile(api: &ApiClient, patch: &CompanyProfilePatch) -> Result<CompanyProfile, ApiError> {
    api.call_with(
        Method::Put,
        "/company-profile",
        Auth::Slot(PrincipalKind::Company),
        Some(patch),
        "Failed to update profile",
    )
    .await
}
