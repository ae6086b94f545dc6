use super::*;

#[test]
fn classify_user_token_written() {
    assert_eq!(classify(Some("token"), Some("abc")), StorageChange::TokenSet(PrincipalKind::User));
}

#[test]
fn classify_company_token_written() {
    assert_eq!(
        classify(Some("companyToken"), Some("abc")),
        StorageChange::TokenSet(PrincipalKind::Company)
    );
}

#[test]
fn classify_removed_slot() {
    assert_eq!(classify(Some("token"), None), StorageChange::TokenRemoved(PrincipalKind::User));
}

#[test]
fn classify_emptied_slot_counts_as_removed() {
    assert_eq!(
        classify(Some("companyToken"), Some("")),
        StorageChange::TokenRemoved(PrincipalKind::Company)
    );
}

#[test]
fn classify_clear_without_key() {
    assert_eq!(classify(None, None), StorageChange::Cleared);
}

#[test]
fn classify_ignores_other_keys() {
    assert_eq!(classify(Some("theme"), Some("dark")), StorageChange::Unrelated);
    assert_eq!(classify(Some("Token"), Some("x")), StorageChange::Unrelated);
}
