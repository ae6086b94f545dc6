use super::*;

#[test]
fn store_exclusive_clears_the_other_slot() {
    let store = MemoryTokenStore::with_token(PrincipalKind::User, "user-t");
    store_exclusive(&store, PrincipalKind::Company, "company-t");
    assert_eq!(store.get(PrincipalKind::Company).as_deref(), Some("company-t"));
    assert_eq!(store.get(PrincipalKind::User), None);
}

#[test]
fn active_token_prefers_company_slot() {
    let store = MemoryTokenStore::default();
    store.set(PrincipalKind::User, "user-t");
    store.set(PrincipalKind::Company, "company-t");
    assert_eq!(active_token(&store), Some((PrincipalKind::Company, "company-t".to_owned())));
}

#[test]
fn active_token_falls_back_to_user_slot() {
    let store = MemoryTokenStore::with_token(PrincipalKind::User, "user-t");
    assert_eq!(active_token(&store), Some((PrincipalKind::User, "user-t".to_owned())));
}

#[test]
fn active_token_ignores_empty_values() {
    let store = MemoryTokenStore::with_token(PrincipalKind::Company, "");
    assert_eq!(active_token(&store), None);
}

#[test]
fn clear_all_empties_both_slots() {
    let store = MemoryTokenStore::default();
    store.set(PrincipalKind::User, "a");
    store.set(PrincipalKind::Company, "b");
    clear_all(&store);
    assert_eq!(active_token(&store), None);
}

#[test]
fn checked_write_reports_refused_writes() {
    assert!(checked_write(Ok::<(), &str>(()), "remove", PrincipalKind::Company));
    assert!(!checked_write(Err("QuotaExceededError"), "persist", PrincipalKind::User));
    assert!(!checked_write(Err("SecurityError"), "remove", PrincipalKind::Company));
}
