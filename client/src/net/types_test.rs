use super::*;

const JOB_JSON: &str = r#"{
    "id": 11,
    "title": "Backend Engineer",
    "slug": "backend-engineer-11",
    "description": "<p>Build APIs</p>",
    "location": "Jakarta",
    "requirements": "<ul><li>Rust</li></ul>",
    "salary": "15000000",
    "jobType": "FULL_TIME",
    "experience": "Mid Level",
    "deadline": "2025-07-01T00:00:00.000Z",
    "createdAt": "2025-05-01T08:00:00.000Z",
    "updatedAt": "2025-05-02T08:00:00.000Z",
    "company": { "id": 3, "name": "Acme", "logo": null },
    "isActive": true
}"#;

#[test]
fn job_decodes_enums_and_nested_company() {
    let job: Job = serde_json::from_str(JOB_JSON).unwrap();
    assert_eq!(job.job_type, JobType::FullTime);
    assert_eq!(job.experience, ExperienceLevel::Mid);
    assert_eq!(job.company.name, "Acme");
    assert!(job.applications.is_none());
    assert!(job.is_active);
}

#[test]
fn job_draft_serializes_camel_case_and_skips_missing_salary() {
    let draft = JobDraft {
        title: "QA".to_owned(),
        description: "d".to_owned(),
        location: "Bandung".to_owned(),
        requirements: "r".to_owned(),
        salary: None,
        job_type: JobType::PartTime,
        experience: Some(ExperienceLevel::Entry),
        deadline: "2025-08-01".to_owned(),
    };
    let value = serde_json::to_value(&draft).unwrap();
    assert_eq!(value["jobType"], "PART_TIME");
    assert_eq!(value["experience"], "Entry Level");
    assert!(value.get("salary").is_none());
}

#[test]
fn job_patch_only_sends_set_fields() {
    let patch = JobPatch { is_active: Some(false), ..JobPatch::default() };
    let value = serde_json::to_value(&patch).unwrap();
    assert_eq!(value, serde_json::json!({ "isActive": false }));
}

#[test]
fn application_decodes_interviews_in_order() {
    let raw = r#"{
        "id": 5,
        "jobId": 11,
        "userId": 7,
        "status": "PROCESSING",
        "createdAt": "2025-05-03T00:00:00.000Z",
        "updatedAt": "2025-05-03T00:00:00.000Z",
        "job": { "id": 11, "title": "Backend Engineer", "slug": "backend-engineer-11",
                 "company": { "name": "Acme" } },
        "interviews": [
            { "id": 1, "scheduledAt": "2025-05-10T03:00:00.000Z", "status": "CANCELLED" },
            { "id": 2, "scheduledAt": "2025-05-12T03:00:00.000Z", "notes": "Bring ID", "status": "RESCHEDULED" }
        ]
    }"#;
    let app: Application = serde_json::from_str(raw).unwrap();
    assert_eq!(app.status, ApplicationStatus::Processing);
    assert_eq!(app.interviews.len(), 2);
    assert_eq!(app.interviews[1].status, InterviewStatus::Rescheduled);
    assert!(app.applicant.is_none());
}

#[test]
fn interview_status_unknown_code_decodes_to_unknown() {
    let status: InterviewStatus = serde_json::from_str(r#""NO_SHOW""#).unwrap();
    assert_eq!(status, InterviewStatus::Unknown);
}

#[test]
fn application_status_update_uses_backend_code() {
    let body = ApplicationStatusUpdate { status: ApplicationStatus::Accepted };
    assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"status":"ACCEPTED"}"#);
    assert_eq!(ApplicationStatus::Accepted.code(), "ACCEPTED");
}

#[test]
fn new_interview_serializes_application_id() {
    let body = NewInterview {
        application_id: 5,
        scheduled_at: "2025-05-10T03:00:00.000Z".to_owned(),
        notes: None,
    };
    let value = serde_json::to_value(&body).unwrap();
    assert_eq!(value["applicationId"], 5);
    assert!(value.get("notes").is_none());
}

#[test]
fn auth_response_without_token_still_decodes() {
    let res: AuthResponse = serde_json::from_str(r#"{"message":"Check your email"}"#).unwrap();
    assert_eq!(res.token, None);
    assert_eq!(res.message.as_deref(), Some("Check your email"));
}

#[test]
fn google_identity_omits_missing_picture() {
    let body = GoogleIdentity {
        google_id: "g-1".to_owned(),
        email: "a@b.com".to_owned(),
        name: "A".to_owned(),
        picture: None,
    };
    let value = serde_json::to_value(&body).unwrap();
    assert_eq!(value["googleId"], "g-1");
    assert!(value.get("picture").is_none());
}

#[test]
fn company_profile_patch_skips_unset_fields() {
    let patch = CompanyProfilePatch { website: Some("https://acme.test".to_owned()), ..Default::default() };
    assert_eq!(serde_json::to_string(&patch).unwrap(), r#"{"website":"https://acme.test"}"#);
}

#[test]
fn user_profile_defaults_missing_lists() {
    let raw = r#"{"id":7,"name":"Alice","email":"alice@x.com","isVerified":true,
                  "createdAt":"2025-01-01T00:00:00Z","updatedAt":"2025-01-01T00:00:00Z"}"#;
    let profile: UserProfile = serde_json::from_str(raw).unwrap();
    assert!(profile.skills.is_empty());
    assert!(profile.experience.is_empty() && profile.education.is_empty());
}
