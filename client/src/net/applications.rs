//! Job applications from both sides: seekers applying, companies reviewing.

#[cfg(test)]
#[path = "applications_test.rs"]
mod applications_test;

use super::client::{ApiClient, Auth, Method};
use super::error::ApiError;
use super::types::{Application, ApplicationList, ApplicationStatus, ApplicationStatusUpdate, MessageResponse};
use crate::state::session::PrincipalKind;

const USER: Auth<'static> = Auth::Slot(PrincipalKind::User);
const COMPANY: Auth<'static> = Auth::Slot(PrincipalKind::Company);

pub(crate) fn user_application_endpoint(application_id: i64) -> String {
    format!("/applications/user/{application_id}")
}

pub(crate) fn company_application_endpoint(application_id: i64) -> String {
    format!("/applications/company/{application_id}")
}

pub(crate) fn application_status_endpoint(application_id: i64) -> String {
    format!("/applications/company/{application_id}/status")
}

/// Apply to a job with optional cover letter and resume files.
///
/// # Errors
///
/// Returns [`ApiError`] when the form cannot be built or the request fails.
#[cfg(feature = "hydrate")]
pub async fn create_application(
    api: &ApiClient,
    job_id: i64,
    cover_letter: Option<&web_sys::File>,
    resume: Option<&web_sys::File>,
) -> Result<Application, ApiError> {
    let form = web_sys::FormData::new().map_err(|_| ApiError::Network("cannot build form".to_owned()))?;
    let appended = form
        .append_with_str("jobId", &job_id.to_string())
        .and_then(|()| cover_letter.map_or(Ok(()), |f| form.append_with_blob("coverLetter", f)))
        .and_then(|()| resume.map_or(Ok(()), |f| form.append_with_blob("resume", f)));
    if appended.is_err() {
        return Err(ApiError::Network("cannot build form".to_owned()));
    }
    api.post_form("/applications/user", USER, form, "Failed to create application").await
}

/// Every application the signed-in user has submitted.
///
/// # Errors
///
/// Returns [`ApiError`] when the request fails.
pub async fn list_user_applications(api: &ApiClient) -> Result<Vec<Application>, ApiError> {
    api.call(Method::Get, "/applications/user", USER, "Failed to fetch applications").await
}

/// Withdraw one of the signed-in user's applications.
///
/// # Errors
///
/// Returns [`ApiError`] when the request fails.
pub async fn delete_application(api: &ApiClient, application_id: i64) -> Result<MessageResponse, ApiError> {
    api.call(Method::Delete, &user_application_endpoint(application_id), USER, "Failed to delete application")
        .await
}

/// Applications received across the signed-in company's postings.
///
/// # Errors
///
/// Returns [`ApiError`] when the request fails.
pub async fn list_company_applications(api: &ApiClient) -> Result<ApplicationList, ApiError> {
    api.call(Method::Get, "/applications/company", COMPANY, "Failed to fetch job applications").await
}

/// # Errors
///
/// Returns [`ApiError`] when the request fails.
pub async fn company_application(api: &ApiClient, application_id: i64) -> Result<Application, ApiError> {
    api.call(Method::Get, &company_application_endpoint(application_id), COMPANY, "Failed to fetch application")
        .await
}

/// Move an application through the review pipeline.
///
/// # Errors
///
/// Returns [`ApiError`] when the request fails.
pub async fn update_application_status(
    api: &ApiClient,
    application_id: i64,
    status: ApplicationStatus,
) -> Result<Application, ApiError> {
    let body = ApplicationStatusUpdate { status };
    api.call_with(
        Method::Patch,
        &application_status_endpoint(application_id),
        COMPANY,
        Some(&body),
        "Failed to update application status",
    )
    .await
}
