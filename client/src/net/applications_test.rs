use super::*;

#[test]
fn application_endpoints_format_ids() {
    assert_eq!(user_application_endpoint(5), "/applications/user/5");
    assert_eq!(company_application_endpoint(5), "/applications/company/5");
    assert_eq!(application_status_endpoint(5), "/applications/company/5/status");
}
