use super::*;

fn interview(id: i64, status: InterviewStatus) -> InterviewSummary {
    InterviewSummary { id, scheduled_at: "2024-03-05T10:00:00Z".to_owned(), notes: None, status }
}

#[test]
fn application_labels_are_indonesian() {
    assert_eq!(application_status_label(ApplicationStatus::Pending), "MENUNGGU");
    assert_eq!(application_status_label(ApplicationStatus::Processing), "DIPROSES");
    assert_eq!(application_status_label(ApplicationStatus::Accepted), "DITERIMA");
    assert_eq!(application_status_label(ApplicationStatus::Rejected), "DITOLAK");
}

#[test]
fn unknown_codes_pass_through() {
    assert_eq!(application_status_label_for_code("ACCEPTED"), "DITERIMA");
    assert_eq!(application_status_label_for_code("WITHDRAWN"), "WITHDRAWN");
}

#[test]
fn no_interviews_reads_no_interview() {
    assert_eq!(interview_status_text(&[]), "No Interview");
    assert!(respondable_interview(&[]).is_none());
}

#[test]
fn text_follows_the_latest_interview() {
    let list = [interview(1, InterviewStatus::Cancelled), interview(2, InterviewStatus::Rescheduled)];
    assert_eq!(interview_status_text(&list), "Wawancara Dijadwalkan Ulang");
    assert_eq!(latest_interview(&list).map(|iv| iv.id), Some(2));
}

#[test]
fn unknown_interview_status_has_fallback_text() {
    let list = [interview(1, InterviewStatus::Unknown)];
    assert_eq!(interview_status_text(&list), "Tidak ada wawancara yang ditemukan");
}

#[test]
fn scheduled_and_rescheduled_accept_responses() {
    let scheduled = [interview(1, InterviewStatus::Scheduled)];
    let rescheduled = [interview(2, InterviewStatus::Rescheduled)];
    assert_eq!(respondable_interview(&scheduled).map(|iv| iv.id), Some(1));
    assert_eq!(respondable_interview(&rescheduled).map(|iv| iv.id), Some(2));
}

#[test]
fn other_statuses_do_not_accept_responses() {
    for status in [
        InterviewStatus::Completed,
        InterviewStatus::Cancelled,
        InterviewStatus::Pending,
        InterviewStatus::Unknown,
    ] {
        assert!(respondable_interview(&[interview(1, status)]).is_none(), "{status:?}");
    }
}

#[test]
fn only_the_latest_interview_counts() {
    let list = [interview(1, InterviewStatus::Scheduled), interview(2, InterviewStatus::Completed)];
    assert!(respondable_interview(&list).is_none());
}

#[test]
fn company_sees_reschedule_requests_spelled_out() {
    assert_eq!(
        company_interview_status_text(InterviewStatus::Pending),
        "Pelamar ingin menjadwalkan ulang wawancara"
    );
    assert_eq!(company_interview_status_text(InterviewStatus::Scheduled), "SCHEDULED");
    assert_eq!(interview_status_tone(InterviewStatus::Cancelled), "danger");
}
