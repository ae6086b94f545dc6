use super::*;

fn filled() -> VerificationForm {
    VerificationForm {
        name: " Alice ".to_owned(),
        password: "s3cretpass".to_owned(),
        confirm_password: "s3cretpass".to_owned(),
        phone: "081234567890".to_owned(),
    }
}

#[test]
fn paths_per_kind() {
    assert_eq!(register_path(PrincipalKind::User), "/auth/user/register");
    assert_eq!(register_path(PrincipalKind::Company), "/auth/company/register");
    assert_eq!(verify_segment(PrincipalKind::User), "verify-user");
    assert_eq!(verify_segment(PrincipalKind::Company), "verify-company");
}

#[test]
fn validate_email_trims_and_checks_shape() {
    assert_eq!(validate_email(" alice@x.com "), Ok("alice@x.com".to_owned()));
    assert_eq!(validate_email("  "), Err("Email harus diisi"));
    assert_eq!(validate_email("alice@"), Err("Email tidak valid"));
}

#[test]
fn valid_user_form_builds_details() {
    let details = validate_verification(PrincipalKind::User, &filled()).unwrap();
    assert_eq!(
        details,
        VerificationDetails {
            name: "Alice".to_owned(),
            password: "s3cretpass".to_owned(),
            phone: "081234567890".to_owned(),
        }
    );
}

#[test]
fn name_is_required_with_kind_specific_message() {
    let form = VerificationForm { name: "  ".to_owned(), ..filled() };
    assert_eq!(validate_verification(PrincipalKind::User, &form), Err("Nama pengguna diperlukan"));
    assert_eq!(validate_verification(PrincipalKind::Company, &form), Err("Nama perusahaan harus diisi"));
}

#[test]
fn password_rules_apply() {
    let short = VerificationForm { password: "short".to_owned(), confirm_password: "short".to_owned(), ..filled() };
    assert_eq!(validate_verification(PrincipalKind::User, &short), Err("Kata sandi harus minimal 8 karakter"));

    let mismatch = VerificationForm { confirm_password: "different1".to_owned(), ..filled() };
    assert_eq!(validate_verification(PrincipalKind::User, &mismatch), Err("Kata sandi harus cocok"));
}

#[test]
fn user_phone_must_be_digits() {
    let form = VerificationForm { phone: "0812-3456".to_owned(), ..filled() };
    assert_eq!(validate_verification(PrincipalKind::User, &form), Err("Nomor telepon tidak valid"));

    let blank = VerificationForm { phone: String::new(), ..filled() };
    assert_eq!(validate_verification(PrincipalKind::User, &blank), Err("Nomor telepon diperlukan"));
}

#[test]
fn company_phone_allows_plus_and_needs_ten_to_fifteen_digits() {
    let plus = VerificationForm { phone: "+6281234567890".to_owned(), ..filled() };
    assert!(validate_verification(PrincipalKind::Company, &plus).is_ok());

    let short = VerificationForm { phone: "0812345".to_owned(), ..filled() };
    assert_eq!(validate_verification(PrincipalKind::Company, &short), Err("Nomor telepon tidak valid"));

    let long = VerificationForm { phone: "1234567890123456".to_owned(), ..filled() };
    assert_eq!(validate_verification(PrincipalKind::Company, &long), Err("Nomor telepon tidak valid"));
}
