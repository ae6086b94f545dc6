use super::*;

#[test]
fn authorize_url_encodes_every_parameter() {
    let url = authorize_url("123.apps.googleusercontent.com", "http://localhost:3000/auth/user/google-callback", "user");
    assert_eq!(
        url,
        "https://accounts.google.com/o/oauth2/v2/auth?client_id=123.apps.googleusercontent.com\
         &redirect_uri=http%3A%2F%2Flocalhost%3A3000%2Fauth%2Fuser%2Fgoogle-callback\
         &response_type=token&scope=email%20profile&state=user&prompt=select_account"
    );
}

#[test]
fn fragment_with_token_is_granted() {
    assert_eq!(
        parse_redirect_fragment("#access_token=ya29.a0AfH6&token_type=Bearer&expires_in=3599&state=company"),
        OAuthRedirect::Granted { access_token: "ya29.a0AfH6".to_owned(), state: Some("company".to_owned()) }
    );
}

#[test]
fn fragment_with_error_is_denied() {
    assert_eq!(parse_redirect_fragment("error=access_denied&state=user"), OAuthRedirect::Denied("access_denied".to_owned()));
}

#[test]
fn empty_fragment_is_missing() {
    assert_eq!(parse_redirect_fragment(""), OAuthRedirect::Missing);
    assert_eq!(parse_redirect_fragment("#access_token=&state=user"), OAuthRedirect::Missing);
}

#[test]
fn userinfo_becomes_identity() {
    let info: GoogleUserInfo = serde_json::from_str(
        r#"{"sub":"1098","email":"alice@x.com","name":"Alice","picture":"https://lh3.googleusercontent.com/a"}"#,
    )
    .unwrap();
    let identity = info.into_identity().unwrap();
    assert_eq!(identity.google_id, "1098");
    assert_eq!(identity.picture.as_deref(), Some("https://lh3.googleusercontent.com/a"));
}

#[test]
fn userinfo_without_sub_is_rejected() {
    let info = GoogleUserInfo { email: "alice@x.com".to_owned(), ..GoogleUserInfo::default() };
    assert!(matches!(info.into_identity(), Err(ApiError::Decode(_))));
}
