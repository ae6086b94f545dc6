use std::collections::VecDeque;

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use futures::channel::oneshot;
use futures::executor::{LocalPool, block_on};
use futures::task::LocalSpawnExt;

use super::*;
use crate::net::error::ApiError;
use crate::session::sync::classify;
use crate::session::token::MemoryTokenStore;
use crate::state::session::{CompanyPrincipal, UserPrincipal};

type Reply = Result<Principal, SessionError>;

enum Scripted {
    Ready(Reply),
    Gated(oneshot::Receiver<Reply>),
}

#[derive(Default)]
struct ScriptedBackend {
    replies: Mutex<VecDeque<Scripted>>,
    seen: Mutex<Vec<String>>,
}

impl ScriptedBackend {
    fn replying(replies: Vec<Reply>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().map(Scripted::Ready).collect()),
            seen: Mutex::default(),
        }
    }

    fn push_gated(&self) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.replies.lock().unwrap().push_back(Scripted::Gated(rx));
        tx
    }

    fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait(?Send)]
impl SessionBackend for ScriptedBackend {
    async fn fetch_session(&self, token: &str) -> Result<Principal, SessionError> {
        self.seen.lock().unwrap().push(token.to_owned());
        let next = self.replies.lock().unwrap().pop_front();
        match next {
            Some(Scripted::Ready(reply)) => reply,
            Some(Scripted::Gated(rx)) => rx.await.unwrap_or(Err(SessionError::Api(ApiError::Unavailable))),
            None => panic!("unexpected session fetch for {token}"),
        }
    }
}

fn alice() -> Principal {
    Principal::User(UserPrincipal {
        id: 1,
        name: "Alice".into(),
        email: "a@x.io".into(),
        avatar: None,
        is_verified: true,
        google_id: None,
    })
}

fn acme() -> Principal {
    Principal::Company(CompanyPrincipal {
        id: 9,
        name: "Acme".into(),
        email: "hr@acme.io".into(),
        logo: None,
        is_verified: true,
        google_id: None,
    })
}

fn jwt_with_exp(exp: u64) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256"}"#);
    let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"exp":{exp}}}"#).as_bytes());
    format!("{header}.{payload}.sig")
}

fn unauthorized() -> SessionError {
    SessionError::Api(ApiError::Server { status: 401, message: "Unauthorized".into() })
}

fn record(store: &SessionStore) -> Arc<Mutex<Vec<SessionState>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    store.subscribe(move |state| sink.lock().unwrap().push(state.clone()));
    seen
}

fn setup(tokens: MemoryTokenStore, backend: ScriptedBackend) -> (SessionStore, Arc<MemoryTokenStore>, Arc<ScriptedBackend>) {
    let tokens = Arc::new(tokens);
    let backend = Arc::new(backend);
    let store = SessionStore::new(tokens.clone(), backend.clone());
    (store, tokens, backend)
}

#[test]
fn new_store_starts_loading_without_principal() {
    let (store, _, _) = setup(MemoryTokenStore::default(), ScriptedBackend::default());
    assert_eq!(store.snapshot(), SessionState::default());
    assert!(store.snapshot().loading);
}

#[test]
fn initialize_without_tokens_settles_signed_out_without_fetching() {
    let (store, _, backend) = setup(MemoryTokenStore::default(), ScriptedBackend::default());
    block_on(store.initialize());
    assert_eq!(store.snapshot(), SessionState::unauthenticated());
    assert!(backend.seen().is_empty());
}

#[test]
fn initialize_with_user_token_resolves_user() {
    let (store, tokens, backend) = setup(
        MemoryTokenStore::with_token(PrincipalKind::User, "validusertoken123"),
        ScriptedBackend::replying(vec![Ok(alice())]),
    );
    block_on(store.initialize());

    let state = store.snapshot();
    assert!(!state.loading);
    assert_eq!(state.user().map(|u| u.name.as_str()), Some("Alice"));
    assert!(state.company().is_none());
    assert_eq!(backend.seen(), vec!["validusertoken123".to_owned()]);
    assert_eq!(tokens.get(PrincipalKind::User).as_deref(), Some("validusertoken123"));
}

#[test]
fn company_slot_is_presented_when_both_are_populated() {
    let tokens = MemoryTokenStore::with_token(PrincipalKind::User, "u");
    tokens.set(PrincipalKind::Company, "c");
    let (store, _, backend) = setup(tokens, ScriptedBackend::replying(vec![Ok(acme())]));
    block_on(store.check_session());
    assert_eq!(backend.seen(), vec!["c".to_owned()]);
    assert_eq!(store.snapshot().kind(), Some(PrincipalKind::Company));
}

#[test]
fn set_token_company_replaces_user_slot_and_resolves_company() {
    let (store, tokens, _) = setup(
        MemoryTokenStore::with_token(PrincipalKind::User, "old-user"),
        ScriptedBackend::replying(vec![Ok(acme())]),
    );
    block_on(store.set_token("company-t", PrincipalKind::Company));

    assert_eq!(tokens.get(PrincipalKind::User), None);
    assert_eq!(tokens.get(PrincipalKind::Company).as_deref(), Some("company-t"));
    let state = store.snapshot();
    assert_eq!(state.company().map(|c| c.name.as_str()), Some("Acme"));
    assert!(state.user().is_none());
    assert!(!state.loading);
}

#[test]
fn expired_token_is_rejected_without_fetching() {
    let (store, tokens, backend) = setup(
        MemoryTokenStore::with_token(PrincipalKind::User, &jwt_with_exp(1)),
        ScriptedBackend::default(),
    );
    block_on(store.initialize());

    assert_eq!(store.snapshot(), SessionState::unauthenticated());
    assert!(backend.seen().is_empty());
    assert_eq!(tokens.get(PrincipalKind::User), None);
}

#[test]
fn unexpired_jwt_is_forwarded() {
    let token = jwt_with_exp(4_102_444_800);
    let (store, _, backend) = setup(
        MemoryTokenStore::with_token(PrincipalKind::User, &token),
        ScriptedBackend::replying(vec![Ok(alice())]),
    );
    block_on(store.initialize());
    assert_eq!(backend.seen(), vec![token]);
    assert!(store.snapshot().is_authenticated());
}

#[test]
fn failed_check_clears_both_slots() {
    let tokens = MemoryTokenStore::with_token(PrincipalKind::Company, "c");
    tokens.set(PrincipalKind::User, "u");
    let (store, tokens, _) = setup(tokens, ScriptedBackend::replying(vec![Err(unauthorized())]));
    block_on(store.check_session());

    assert_eq!(store.snapshot(), SessionState::unauthenticated());
    assert_eq!(tokens.get(PrincipalKind::User), None);
    assert_eq!(tokens.get(PrincipalKind::Company), None);
}

#[test]
fn empty_token_counts_as_absent() {
    let (store, _, backend) = setup(
        MemoryTokenStore::with_token(PrincipalKind::User, ""),
        ScriptedBackend::default(),
    );
    block_on(store.check_session());
    assert_eq!(store.snapshot(), SessionState::unauthenticated());
    assert!(backend.seen().is_empty());
}

#[test]
fn check_publishes_loading_then_settles() {
    let (store, _, _) = setup(
        MemoryTokenStore::with_token(PrincipalKind::User, "u"),
        ScriptedBackend::replying(vec![Ok(alice())]),
    );
    let seen = record(&store);
    block_on(store.check_session());

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 2);
    assert!(seen[0].loading);
    assert!(seen[0].principal.is_none());
    assert_eq!(seen[1], SessionState::resolved(Some(alice())));
}

#[test]
fn recheck_keeps_previous_principal_while_loading() {
    let (store, _, _) = setup(
        MemoryTokenStore::with_token(PrincipalKind::User, "u"),
        ScriptedBackend::replying(vec![Ok(alice()), Ok(alice())]),
    );
    block_on(store.check_session());
    let seen = record(&store);
    block_on(store.check_session());

    let seen = seen.lock().unwrap();
    assert_eq!(seen[0], SessionState { principal: Some(alice()), loading: true });
    assert_eq!(seen[1], SessionState::resolved(Some(alice())));
}

#[test]
fn published_states_never_mix_roles() {
    let (store, _, _) = setup(
        MemoryTokenStore::with_token(PrincipalKind::User, "u"),
        ScriptedBackend::replying(vec![Ok(alice()), Ok(acme()), Err(unauthorized())]),
    );
    let seen = record(&store);
    block_on(async {
        store.initialize().await;
        store.set_token("c", PrincipalKind::Company).await;
        store.check_session().await;
    });

    let seen = seen.lock().unwrap();
    assert!(!seen.is_empty());
    for state in seen.iter() {
        assert!(!(state.user().is_some() && state.company().is_some()));
    }
    assert_eq!(seen.last(), Some(&SessionState::unauthenticated()));
}

#[test]
fn stale_check_result_is_discarded() {
    let (store, tokens, backend) = setup(
        MemoryTokenStore::with_token(PrincipalKind::User, "slow"),
        ScriptedBackend::default(),
    );
    let slow = backend.push_gated();
    let fast = backend.push_gated();

    let mut pool = LocalPool::new();
    let spawner = pool.spawner();
    let first = store.clone();
    spawner.spawn_local(async move { first.check_session().await }).unwrap();
    pool.run_until_stalled();

    let second = store.clone();
    spawner
        .spawn_local(async move { second.set_token("fresh", PrincipalKind::Company).await })
        .unwrap();
    pool.run_until_stalled();

    fast.send(Ok(acme())).unwrap();
    pool.run_until_stalled();
    slow.send(Err(unauthorized())).unwrap();
    pool.run_until_stalled();

    assert_eq!(backend.seen(), vec!["slow".to_owned(), "fresh".to_owned()]);
    assert_eq!(store.snapshot(), SessionState::resolved(Some(acme())));
    assert_eq!(tokens.get(PrincipalKind::Company).as_deref(), Some("fresh"));
}

#[test]
fn logout_clears_slots_and_state() {
    let (store, tokens, _) = setup(
        MemoryTokenStore::with_token(PrincipalKind::User, "u"),
        ScriptedBackend::replying(vec![Ok(alice())]),
    );
    block_on(store.initialize());
    store.logout();

    assert_eq!(store.snapshot(), SessionState::unauthenticated());
    assert_eq!(tokens.get(PrincipalKind::User), None);
    assert_eq!(tokens.get(PrincipalKind::Company), None);
}

#[test]
fn logout_discards_check_in_flight() {
    let (store, _, backend) = setup(
        MemoryTokenStore::with_token(PrincipalKind::User, "u"),
        ScriptedBackend::default(),
    );
    let gate = backend.push_gated();

    let mut pool = LocalPool::new();
    let pending = store.clone();
    pool.spawner().spawn_local(async move { pending.check_session().await }).unwrap();
    pool.run_until_stalled();
    assert!(store.snapshot().loading);

    store.logout();
    gate.send(Ok(alice())).unwrap();
    pool.run_until_stalled();

    assert_eq!(store.snapshot(), SessionState::unauthenticated());
}

#[test]
fn storage_removal_in_other_tab_signs_out() {
    let (store, tokens, _) = setup(
        MemoryTokenStore::with_token(PrincipalKind::User, "u"),
        ScriptedBackend::replying(vec![Ok(alice())]),
    );
    block_on(store.initialize());

    tokens.remove(PrincipalKind::User);
    block_on(store.apply_storage_change(classify(Some("token"), None)));
    assert_eq!(store.snapshot(), SessionState::unauthenticated());
}

#[test]
fn storage_clear_in_other_tab_signs_out() {
    let (store, tokens, _) = setup(
        MemoryTokenStore::with_token(PrincipalKind::Company, "c"),
        ScriptedBackend::replying(vec![Ok(acme())]),
    );
    block_on(store.initialize());

    tokens.remove(PrincipalKind::Company);
    block_on(store.apply_storage_change(classify(None, None)));
    assert_eq!(store.snapshot(), SessionState::unauthenticated());
}

#[test]
fn storage_login_in_other_tab_rechecks() {
    let (store, tokens, backend) = setup(
        MemoryTokenStore::default(),
        ScriptedBackend::replying(vec![Ok(acme())]),
    );
    block_on(store.initialize());
    assert!(!store.snapshot().is_authenticated());

    token::store_exclusive(tokens.as_ref(), PrincipalKind::Company, "c");
    block_on(store.apply_storage_change(classify(Some("companyToken"), Some("c"))));
    block_on(store.apply_storage_change(classify(Some("token"), None)));

    assert_eq!(backend.seen(), vec!["c".to_owned()]);
    assert_eq!(store.snapshot(), SessionState::resolved(Some(acme())));
}

#[test]
fn unrelated_storage_key_is_ignored() {
    let (store, _, backend) = setup(
        MemoryTokenStore::with_token(PrincipalKind::User, "u"),
        ScriptedBackend::replying(vec![Ok(alice())]),
    );
    block_on(store.initialize());
    block_on(store.apply_storage_change(classify(Some("theme"), Some("dark"))));
    assert_eq!(backend.seen().len(), 1);
    assert!(store.snapshot().is_authenticated());
}

#[test]
fn unsubscribe_stops_notifications() {
    let (store, _, _) = setup(MemoryTokenStore::default(), ScriptedBackend::default());
    let seen = Arc::new(Mutex::new(0usize));
    let sink = Arc::clone(&seen);
    let id = store.subscribe(move |_| *sink.lock().unwrap() += 1);

    block_on(store.initialize());
    assert_eq!(*seen.lock().unwrap(), 1);
    store.unsubscribe(id);
    store.sign_out();
    assert_eq!(*seen.lock().unwrap(), 1);
}

#[test]
fn dispose_ignores_late_results() {
    let (store, _, backend) = setup(
        MemoryTokenStore::with_token(PrincipalKind::User, "u"),
        ScriptedBackend::default(),
    );
    let gate = backend.push_gated();
    let seen = record(&store);

    let mut pool = LocalPool::new();
    let pending = store.clone();
    pool.spawner().spawn_local(async move { pending.check_session().await }).unwrap();
    pool.run_until_stalled();

    store.dispose();
    gate.send(Ok(alice())).unwrap();
    pool.run_until_stalled();

    assert!(store.snapshot().loading);
    assert_eq!(seen.lock().unwrap().len(), 1);
}

#[test]
fn sign_in_as_matching_kind_keeps_session() {
    let (store, tokens, _) = setup(MemoryTokenStore::default(), ScriptedBackend::replying(vec![Ok(alice())]));

    assert!(block_on(store.sign_in("validusertoken123", PrincipalKind::User)));

    assert_eq!(store.snapshot().kind(), Some(PrincipalKind::User));
    assert_eq!(tokens.get(PrincipalKind::User).as_deref(), Some("validusertoken123"));
}

#[test]
fn sign_in_resolving_as_other_kind_signs_out() {
    let (store, tokens, _) = setup(MemoryTokenStore::default(), ScriptedBackend::replying(vec![Ok(acme())]));

    assert!(!block_on(store.sign_in("u-token", PrincipalKind::User)));

    assert_eq!(store.snapshot(), SessionState::unauthenticated());
    assert_eq!(tokens.get(PrincipalKind::User), None);
    assert_eq!(tokens.get(PrincipalKind::Company), None);
}

#[test]
fn sign_in_with_rejected_token_reports_failure() {
    let (store, tokens, _) = setup(MemoryTokenStore::default(), ScriptedBackend::replying(vec![Err(unauthorized())]));

    assert!(!block_on(store.sign_in("stale", PrincipalKind::Company)));

    assert!(!store.snapshot().is_authenticated());
    assert_eq!(tokens.get(PrincipalKind::Company), None);
}
