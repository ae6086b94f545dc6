use super::*;

#[test]
fn company_interview_endpoint_formats_id() {
    assert_eq!(company_interview_endpoint(9), "/interviews/company/9");
}

#[test]
fn user_interview_action_endpoint_formats_action() {
    assert_eq!(user_interview_action_endpoint(9, "accept"), "/interviews/user/9/accept");
    assert_eq!(user_interview_action_endpoint(9, "reschedule"), "/interviews/user/9/reschedule");
}
