use super::*;

#[test]
fn pending_application_awaits_decision() {
    assert_eq!(review_stage(ApplicationStatus::Pending, false), ReviewStage::Decide);
}

#[test]
fn processing_application_needs_a_slot() {
    assert_eq!(review_stage(ApplicationStatus::Processing, false), ReviewStage::Schedule);
}

#[test]
fn existing_interview_wins_over_status() {
    for status in ApplicationStatus::ALL {
        assert_eq!(review_stage(status, true), ReviewStage::Scheduled);
    }
}

#[test]
fn settled_application_without_interview_is_closed() {
    assert_eq!(review_stage(ApplicationStatus::Accepted, false), ReviewStage::Closed);
    assert_eq!(review_stage(ApplicationStatus::Rejected, false), ReviewStage::Closed);
}

#[test]
fn interview_request_keeps_slot_and_optional_notes() {
    let request = interview_request(12, " 2030-03-05T10:30 ", "  Bawa portofolio ").unwrap();
    assert_eq!(request.application_id, 12);
    assert_eq!(request.scheduled_at, "2030-03-05T10:30");
    assert_eq!(request.notes.as_deref(), Some("Bawa portofolio"));

    let bare = interview_request(12, "2030-03-05T10:30", "   ").unwrap();
    assert_eq!(bare.notes, None);
}

#[test]
fn interview_request_rejects_missing_or_malformed_slot() {
    assert_eq!(interview_request(1, "  ", ""), Err("Tanggal dan waktu interview harus diisi"));
    assert_eq!(interview_request(1, "besok pagi", ""), Err("Tanggal dan waktu interview tidak valid"));
}

#[test]
fn detail_path_uses_numeric_id() {
    assert_eq!(company_application_path(42), "/company/applications/42");
}
