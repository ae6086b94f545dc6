use super::*;

#[test]
fn defaults_when_unset() {
    let cfg = ClientConfig::from_values(None, None, None);
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(cfg.log_level, log::Level::Info);
    assert_eq!(cfg.google_client_id, None);
    assert_eq!(ClientConfig::default(), cfg);
}

#[test]
fn trims_trailing_slashes() {
    let cfg = ClientConfig::from_values(Some("https://api.jobboard.test/"), None, None);
    assert_eq!(cfg.api_base_url, "https://api.jobboard.test");
}

#[test]
fn blank_url_falls_back() {
    let cfg = ClientConfig::from_values(Some("  "), None, None);
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn parses_log_level_case_insensitively() {
    assert_eq!(ClientConfig::from_values(None, Some("DEBUG"), None).log_level, log::Level::Debug);
    assert_eq!(ClientConfig::from_values(None, Some("warn"), None).log_level, log::Level::Warn);
}

#[test]
fn unknown_log_level_falls_back_to_info() {
    assert_eq!(ClientConfig::from_values(None, Some("chatty"), None).log_level, log::Level::Info);
}

#[test]
fn google_client_id_is_trimmed_and_blank_means_disabled() {
    let cfg = ClientConfig::from_values(None, None, Some(" 123.apps.googleusercontent.com "));
    assert_eq!(cfg.google_client_id.as_deref(), Some("123.apps.googleusercontent.com"));
    assert_eq!(ClientConfig::from_values(None, None, Some("")).google_client_id, None);
}
