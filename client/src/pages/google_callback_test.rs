use super::*;

#[test]
fn granted_redirect_for_same_kind_yields_token() {
    let redirect = OAuthRedirect::Granted { access_token: "ya29.x".to_owned(), state: Some("company".to_owned()) };
    assert_eq!(granted_token(redirect, PrincipalKind::Company), Ok("ya29.x".to_owned()));
}

#[test]
fn granted_redirect_for_other_kind_is_rejected() {
    let redirect = OAuthRedirect::Granted { access_token: "ya29.x".to_owned(), state: Some("user".to_owned()) };
    assert!(granted_token(redirect, PrincipalKind::Company).is_err());

    let unlabeled = OAuthRedirect::Granted { access_token: "ya29.x".to_owned(), state: None };
    assert!(granted_token(unlabeled, PrincipalKind::User).is_err());
}

#[test]
fn denied_redirect_reports_reason() {
    assert_eq!(
        granted_token(OAuthRedirect::Denied("access_denied".to_owned()), PrincipalKind::User),
        Err("Login Gagal: access_denied".to_owned())
    );
}

#[test]
fn missing_token_is_an_error() {
    assert!(granted_token(OAuthRedirect::Missing, PrincipalKind::User).is_err());
}
