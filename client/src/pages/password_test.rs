use super::*;

#[test]
fn forgot_password_paths_per_kind() {
    assert_eq!(forgot_password_path(PrincipalKind::User), "/auth/user/forgot-password");
    assert_eq!(forgot_password_path(PrincipalKind::Company), "/auth/company/forgot-password");
}

#[test]
fn new_password_needs_eight_chars_and_a_match() {
    assert_eq!(validate_new_password("longenough", "longenough"), Ok("longenough".to_owned()));
    assert_eq!(validate_new_password("", ""), Err("Kata sandi diperlukan"));
    assert_eq!(validate_new_password("seven77", "seven77"), Err("Kata sandi harus minimal 8 karakter"));
    assert_eq!(validate_new_password("longenough", "longEnough"), Err("Kata sandi harus cocok"));
}

#[test]
fn password_length_counts_characters_not_bytes() {
    assert!(validate_new_password("kāťsandī", "kāťsandī").is_ok());
    assert!(validate_new_password("ñññññññ", "ñññññññ").is_err());
}
