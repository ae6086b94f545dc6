use super::*;

#[test]
fn from_response_prefers_server_message() {
    let err = ApiError::from_response(400, r#"{"message":"Email already registered"}"#, "Registration failed");
    assert_eq!(err.to_string(), "Email already registered");
    assert_eq!(err.status(), Some(400));
}

#[test]
fn from_response_falls_back_on_non_json_body() {
    let err = ApiError::from_response(502, "<html>Bad Gateway</html>", "Login failed");
    assert_eq!(err, ApiError::Server { status: 502, message: "Login failed".to_owned() });
}

#[test]
fn from_response_falls_back_on_blank_message() {
    let err = ApiError::from_response(500, r#"{"message":"  "}"#, "Failed to fetch jobs");
    assert_eq!(err.to_string(), "Failed to fetch jobs");
}

#[test]
fn from_response_accepts_validation_errors_payload() {
    let body = r#"{"message":"Validation failed","errors":{"email":["is invalid"]},"statusCode":422}"#;
    let err = ApiError::from_response(422, body, "Registration failed");
    assert_eq!(err.to_string(), "Validation failed");
}

#[test]
fn unauthorized_covers_401_and_403() {
    assert!(ApiError::Server { status: 401, message: String::new() }.is_unauthorized());
    assert!(ApiError::Server { status: 403, message: String::new() }.is_unauthorized());
    assert!(!ApiError::Server { status: 404, message: String::new() }.is_unauthorized());
    assert!(!ApiError::Network("offline".to_owned()).is_unauthorized());
}

#[test]
fn unavailable_reads_as_server_stub() {
    assert_eq!(ApiError::Unavailable.to_string(), "not available on server");
}
