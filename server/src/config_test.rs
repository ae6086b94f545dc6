use super::*;

#[test]
fn from_vars_defaults() {
    let cfg = ServerConfig::from_vars(None, None).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.site_root, PathBuf::from(DEFAULT_SITE_ROOT));
}

#[test]
fn from_vars_blank_values_fall_back() {
    let cfg = ServerConfig::from_vars(Some(" "), Some("")).unwrap();
    assert_eq!(cfg, ServerConfig::from_vars(None, None).unwrap());
}

#[test]
fn from_vars_parses_overrides() {
    let cfg = ServerConfig::from_vars(Some("8080"), Some("/srv/site")).unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.site_root, PathBuf::from("/srv/site"));
}

#[test]
fn from_vars_rejects_bad_ports() {
    for bad in ["http", "0", "70000", "-1"] {
        let err = ServerConfig::from_vars(Some(bad), None).unwrap_err();
        assert_eq!(err, ConfigError::InvalidPort(bad.to_owned()));
    }
    let err = ServerConfig::from_vars(Some("abc"), None).unwrap_err().to_string();
    assert!(err.contains("invalid PORT"));
}

#[test]
fn from_env_reads_port_and_site_root() {
    // SAFETY: this is the only test in the crate that touches these variables.
    unsafe {
        std::env::set_var("PORT", "4321");
        std::env::set_var("LEPTOS_SITE_ROOT", "dist/site");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, 4321);
    assert_eq!(cfg.site_root, PathBuf::from("dist/site"));

    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("LEPTOS_SITE_ROOT");
    }
}
