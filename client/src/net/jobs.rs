//! Job postings: the public board and a company's own postings.

#[cfg(test)]
#[path = "jobs_test.rs"]
mod jobs_test;

use super::client::{ApiClient, Auth, Method};
use super::encode_component;
use super::error::ApiError;
use super::types::{Job, JobDraft, JobPatch, MessageResponse};
use crate::state::session::PrincipalKind;

const COMPANY: Auth<'static> = Auth::Slot(PrincipalKind::Company);

pub(crate) fn public_jobs_endpoint(search: &str) -> String {
    let search = search.trim();
    if search.is_empty() {
        "/jobs".to_owned()
    } else {
        format!("/jobs?search={}", encode_component(search))
    }
}

pub(crate) fn public_job_endpoint(slug: &str) -> String {
    format!("/jobs/{}", encode_component(slug))
}

pub(crate) fn company_job_endpoint(job_id: i64) -> String {
    format!("/company-jobs/{job_id}")
}

/// Active postings visible to job seekers, optionally filtered by `search`.
///
/// # Errors
///
/// Returns [`ApiError`] when the request fails.
pub async fn list_public_jobs(api: &ApiClient, search: &str) -> Result<Vec<Job>, ApiError> {
    api.call(Method::Get, &public_jobs_endpoint(search), Auth::Slot(PrincipalKind::User), "Failed to fetch jobs")
        .await
}

/// A single public posting by slug.
///
/// # Errors
///
/// Returns [`ApiError`] when the request fails.
pub async fn public_job(api: &ApiClient, slug: &str) -> Result<Job, ApiError> {
    api.call(Method::Get, &public_job_endpoint(slug), Auth::Slot(PrincipalKind::User), "Failed to fetch job")
        .await
}

/// Every posting owned by the signed-in company.
///
/// # Errors
///
/// Returns [`ApiError`] when the request fails.
pub async fn list_company_jobs(api: &ApiClient) -> Result<Vec<Job>, ApiError> {
    api.call(Method::Get, "/company-jobs", COMPANY, "Failed to fetch jobs").await
}

/// One of the signed-in company's postings.
///
/// # Errors
///
/// Returns [`ApiError`] when the request fails.
pub async fn company_job(api: &ApiClient, job_id: i64) -> Result<Job, ApiError> {
    api.call(Method::Get, &company_job_endpoint(job_id), COMPANY, "Failed to fetch job").await
}

/// # Errors
///
/// Returns [`ApiError`] when the request fails.
pub async fn create_job(api: &ApiClient, draft: &JobDraft) -> Result<Job, ApiError> {
    api.call_with(Method::Post, "/company-jobs", COMPANY, Some(draft), "Failed to create job").await
}

/// # Errors
///
/// Returns [`ApiError`] when the request fails.
pub async fn update_job(api: &ApiClient, job_id: i64, patch: &JobPatch) -> Result<Job, ApiError> {
    api.call_with(Method::Put, &company_job_endpoint(job_id), COMPANY, Some(patch), "Failed to update job")
        .await
}

/// # Errors
///
/// Returns [`ApiError`] when the request fails.
pub async fn delete_job(api: &ApiClient, job_id: i64) -> Result<MessageResponse, ApiError> {
    api.call(Method::Delete, &company_job_endpoint(job_id), COMPANY, "Failed to delete job").await
}
