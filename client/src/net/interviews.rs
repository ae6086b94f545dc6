//! Interview scheduling: companies propose times, users accept or ask to move them.

#[cfg(test)]
#[path = "interviews_test.rs"]
mod interviews_test;

use super::client::{ApiClient, Auth, Method};
use super::error::ApiError;
use super::types::{CompanyInterview, InterviewRecord, InterviewReschedule, MessageResponse, NewInterview};
use crate::state::session::PrincipalKind;

const USER: Auth<'static> = Auth::Slot(PrincipalKind::User);
const COMPANY: Auth<'static> = Auth::Slot(PrincipalKind::Company);

pub(crate) fn company_interview_endpoint(interview_id: i64) -> String {
    format!("/interviews/company/{interview_id}")
}

pub(crate) fn user_interview_action_endpoint(interview_id: i64, action: &str) -> String {
    format!("/interviews/user/{interview_id}/{action}")
}

/// # Errors
///
/// Returns [`ApiError`] when the request fails.
pub async fn create_interview(api: &ApiClient, interview: &NewInterview) -> Result<InterviewRecord, ApiError> {
    api.call_with(Method::Post, "/interviews/company", COMPANY, Some(interview), "Failed to schedule interview")
        .await
}

/// # Errors
///
/// Returns [`ApiError`] when the request fails.
pub async fn list_company_interviews(api: &ApiClient) -> Result<Vec<CompanyInterview>, ApiError> {
    api.call(Method::Get, "/interviews/company", COMPANY, "Failed to fetch interviews").await
}

/// # Errors
///
/// Returns [`ApiError`] when the request fails.
pub async fn reschedule_interview(
    api: &ApiClient,
    interview_id: i64,
    reschedule: &InterviewReschedule,
) -> Result<InterviewRecord, ApiError> {
    api.call_with(
        Method::Patch,
        &company_interview_endpoint(interview_id),
        COMPANY,
        Some(reschedule),
        "Failed to reschedule interview",
    )
    .await
}

/// Accept the proposed interview time.
///
/// # Errors
///
/// Returns [`ApiError`] when the request fails.
pub async fn accept_interview(api: &ApiClient, interview_id: i64) -> Result<MessageResponse, ApiError> {
    api.call(Method::Patch, &user_interview_action_endpoint(interview_id, "accept"), USER, "Failed to accept interview")
        .await
}

/// Ask the company for a different interview time.
///
/// # Errors
///
/// Returns [`ApiError`] when the request fails.
pub async fn request_reschedule(api: &ApiClient, interview_id: i64) -> Result<MessageResponse, ApiError> {
    api.call(
        Method::Patch,
        &user_interview_action_endpoint(interview_id, "reschedule"),
        USER,
        "Failed to reschedule interview",
    )
    .await
}
