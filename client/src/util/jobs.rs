//! Job-board browsing rules: hiding jobs already applied to, picking the
//! highlighted job, keeping the URL in step with both, and the attachment
//! rules of the application form.

#[cfg(test)]
#[path = "jobs_test.rs"]
mod jobs_test;

use std::collections::HashSet;

use crate::net::encode_component;
use crate::net::types::{Application, Job};

/// Jobs from `listing` that none of `applications` targets, in listing order.
pub fn available_jobs(listing: Vec<Job>, applications: &[Application]) -> Vec<Job> {
    let applied: HashSet<i64> = applications.iter().map(|a| a.job.id).collect();
    listing.into_iter().filter(|job| !applied.contains(&job.id)).collect()
}

/// Which job the detail pane shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JobSelection<'a> {
    /// The job named by the `job` query parameter.
    Requested(&'a Job),
    /// No match for the query parameter; the first job stands in and the URL
    /// should be updated to name it.
    Defaulted(&'a Job),
    Empty,
}

impl<'a> JobSelection<'a> {
    pub fn job(self) -> Option<&'a Job> {
        match self {
            Self::Requested(job) | Self::Defaulted(job) => Some(job),
            Self::Empty => None,
        }
    }
}

pub fn select_job<'a>(jobs: &'a [Job], requested_slug: &str) -> JobSelection<'a> {
    if let Some(job) = jobs.iter().find(|j| !requested_slug.is_empty() && j.slug == requested_slug) {
        return JobSelection::Requested(job);
    }
    jobs.first().map_or(JobSelection::Empty, JobSelection::Defaulted)
}

/// `/jobs` URL carrying the search text and the highlighted job's slug.
pub fn jobs_path(search: &str, job_slug: Option<&str>) -> String {
    let mut params = Vec::new();
    let search = search.trim();
    if !search.is_empty() {
        params.push(format!("search={}", encode_component(search)));
    }
    if let Some(slug) = job_slug.filter(|s| !s.is_empty()) {
        params.push(format!("job={}", encode_component(slug)));
    }
    if params.is_empty() {
        "/jobs".to_owned()
    } else {
        format!("/jobs?{}", params.join("&"))
    }
}

/// Application form route for a job.
pub fn apply_path(slug: &str) -> String {
    format!("/jobs/{}/apply", encode_component(slug))
}

/// File types accepted for cover letters and resumes.
pub const ACCEPTED_DOCUMENTS: [&str; 3] = ["pdf", "doc", "docx"];

/// Decide whether an optional attachment goes out with an application.
///
/// `chosen` is the file input's value (empty when nothing was picked).
/// Returns `Ok(true)` when the file should be uploaded.
///
/// # Errors
///
/// Returns `missing` when the attachment is included but no file was picked,
/// or a format message when the file is not a PDF or Word document.
pub fn check_attachment(include: bool, chosen: &str, missing: &'static str) -> Result<bool, &'static str> {
    if !include {
        return Ok(false);
    }
    let chosen = chosen.trim();
    if chosen.is_empty() {
        return Err(missing);
    }
    let accepted = chosen
        .rsplit_once('.')
        .is_some_and(|(_, ext)| ACCEPTED_DOCUMENTS.iter().any(|a| a.eq_ignore_ascii_case(ext)));
    if accepted { Ok(true) } else { Err("Format file harus PDF, DOC, atau DOCX") }
}

/// Salary text for a job card.
pub fn salary_text(job: &Job) -> String {
    match job.salary.as_deref().map(str::trim) {
        Some(salary) if !salary.is_empty() => super::format::format_currency(salary),
        _ => "-".to_owned(),
    }
}
