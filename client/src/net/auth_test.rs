use super::*;

#[test]
fn auth_endpoint_uses_audience_prefix() {
    assert_eq!(auth_endpoint(PrincipalKind::User, "login"), "/auth/user/login");
    assert_eq!(auth_endpoint(PrincipalKind::Company, "social-login"), "/auth/company/social-login");
}

#[test]
fn verification_body_names_user_field_username() {
    let details = VerificationDetails {
        name: "alice".to_owned(),
        password: "secret".to_owned(),
        phone: "0812".to_owned(),
    };
    let body = verification_body(PrincipalKind::User, "tok", &details);
    assert_eq!(
        body,
        json!({ "token": "tok", "username": "alice", "password": "secret", "no_handphone": "0812" })
    );
}

#[test]
fn verification_body_names_company_field_name() {
    let details = VerificationDetails {
        name: "Acme".to_owned(),
        password: "secret".to_owned(),
        phone: "0812".to_owned(),
    };
    let body = verification_body(PrincipalKind::Company, "tok", &details);
    assert_eq!(body["name"], "Acme");
    assert!(body.get("username").is_none());
}
