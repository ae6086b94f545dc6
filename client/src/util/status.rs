//! Display text for application and interview statuses.

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

use crate::net::types::{ApplicationStatus, InterviewStatus, InterviewSummary};

/// Badge label for an application status.
pub fn application_status_label(status: ApplicationStatus) -> &'static str {
    match status {
        ApplicationStatus::Pending => "MENUNGGU",
        ApplicationStatus::Processing => "DIPROSES",
        ApplicationStatus::Accepted => "DITERIMA",
        ApplicationStatus::Rejected => "DITOLAK",
    }
}

/// Badge label for a raw status code; unknown codes are shown as-is.
pub fn application_status_label_for_code(code: &str) -> &str {
    match ApplicationStatus::ALL.into_iter().find(|s| s.code() == code) {
        Some(status) => application_status_label(status),
        None => code,
    }
}

/// Backend code of an interview status.
pub fn interview_status_code(status: InterviewStatus) -> &'static str {
    match status {
        InterviewStatus::Scheduled => "SCHEDULED",
        InterviewStatus::Completed => "COMPLETED",
        InterviewStatus::Cancelled => "CANCELLED",
        InterviewStatus::Rescheduled => "RESCHEDULED",
        InterviewStatus::Pending => "PENDING",
        InterviewStatus::Unknown => "UNKNOWN",
    }
}

/// The most recent interview of an application (last in the list).
pub fn latest_interview(interviews: &[InterviewSummary]) -> Option<&InterviewSummary> {
    interviews.last()
}

/// Interview line shown to the applicant.
pub fn interview_status_text(interviews: &[InterviewSummary]) -> &'static str {
    let Some(latest) = latest_interview(interviews) else {
        return "No Interview";
    };
    match latest.status {
        InterviewStatus::Scheduled => "Wawancara Sedang Dijadwalkan",
        InterviewStatus::Completed => "Wawancara Berhasil Dijadwalkan",
        InterviewStatus::Cancelled => "Wawancara Dibatalkan",
        InterviewStatus::Pending => "Menunggu Penjadwalan Ulang",
        InterviewStatus::Rescheduled => "Wawancara Dijadwalkan Ulang",
        InterviewStatus::Unknown => "Tidak ada wawancara yang ditemukan",
    }
}

/// CSS modifier for an interview status badge.
pub fn interview_status_tone(status: InterviewStatus) -> &'static str {
    match status {
        InterviewStatus::Scheduled | InterviewStatus::Rescheduled => "info",
        InterviewStatus::Completed => "success",
        InterviewStatus::Cancelled => "danger",
        InterviewStatus::Pending => "warning",
        InterviewStatus::Unknown => "muted",
    }
}

/// Status text shown to the hiring company.
pub fn company_interview_status_text(status: InterviewStatus) -> &'static str {
    match status {
        InterviewStatus::Pending => "Pelamar ingin menjadwalkan ulang wawancara",
        other => interview_status_code(other),
    }
}

/// The interview the applicant may accept or ask to move, if any.
///
/// Only a latest interview that is scheduled or already rescheduled accepts
/// a response.
pub fn respondable_interview(interviews: &[InterviewSummary]) -> Option<&InterviewSummary> {
    latest_interview(interviews)
        .filter(|iv| matches!(iv.status, InterviewStatus::Scheduled | InterviewStatus::Rescheduled))
}
