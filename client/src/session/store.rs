//! The session store: single source of truth for who is signed in, as what.
//!
//! SYSTEM CONTEXT
//! ==============
//! Built once in `App`, provided through context, and mirrored into an
//! `RwSignal<SessionState>` via [`SessionStore::subscribe`]. Pages that obtain
//! a token call [`SessionStore::sign_in`]; the navbar calls [`SessionStore::logout`];
//! the `storage` listener in [`super::sync`] feeds cross-tab changes in.
//!
//! DESIGN
//! ======
//! Checks are serialized by a generation counter. Each check takes a new
//! generation before its request goes out and may only publish if no newer
//! check, sign-out, or dispose happened meanwhile. A slow response for an old
//! token therefore never overwrites the state produced by a newer one.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use super::backend::SessionBackend;
use super::sync::StorageChange;
use super::token::{self, TokenStore};
use super::{SessionError, claims};
use crate::state::session::{Principal, PrincipalKind, SessionState};

/// Handle returned by [`SessionStore::subscribe`].
pub type SubscriptionId = u64;

type Listener = Arc<dyn Fn(&SessionState) + Send + Sync>;

struct Inner {
    tokens: Arc<dyn TokenStore>,
    backend: Arc<dyn SessionBackend>,
    state: Mutex<SessionState>,
    generation: AtomicU64,
    listeners: Mutex<Vec<(SubscriptionId, Listener)>>,
    next_listener: AtomicU64,
    disposed: AtomicBool,
}

/// Cheaply cloneable handle to the tab's session.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore").field("state", &self.snapshot()).finish_non_exhaustive()
    }
}

impl SessionStore {
    /// A store in the application-start state (no principal, loading).
    pub fn new(tokens: Arc<dyn TokenStore>, backend: Arc<dyn SessionBackend>) -> Self {
        Self {
            inner: Arc::new(Inner {
                tokens,
                backend,
                state: Mutex::new(SessionState::default()),
                generation: AtomicU64::new(0),
                listeners: Mutex::new(Vec::new()),
                next_listener: AtomicU64::new(0),
                disposed: AtomicBool::new(false),
            }),
        }
    }

    /// Current state.
    pub fn snapshot(&self) -> SessionState {
        self.inner.state.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// The token slots this store manages.
    pub fn tokens(&self) -> Arc<dyn TokenStore> {
        Arc::clone(&self.inner.tokens)
    }

    /// Call `listener` with every state this store publishes from now on.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&SessionState) + Send + Sync + 'static,
    {
        let id = self.inner.next_listener.fetch_add(1, Ordering::Relaxed);
        self.inner
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Arc::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.inner
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(|(existing, _)| *existing != id);
    }

    /// Resolve the state persisted from a previous visit.
    ///
    /// Without any stored token this settles signed-out immediately and makes
    /// no request.
    pub async fn initialize(&self) {
        if token::active_token(self.inner.tokens.as_ref()).is_none() {
            self.next_generation();
            log::debug!("no stored token; starting signed out");
            self.publish(SessionState::unauthenticated());
            return;
        }
        self.check_session().await;
    }

    /// Re-validate the active token against the backend.
    ///
    /// Never fails: any problem clears both token slots and settles
    /// signed-out. Always ends with `loading == false` unless a newer
    /// operation has taken over.
    pub async fn check_session(&self) {
        if self.is_disposed() {
            return;
        }
        let generation = self.next_generation();
        let principal = self.snapshot().principal;
        self.publish(SessionState { principal, loading: true });

        let outcome = self.resolve().await;
        if !self.is_current(generation) {
            log::debug!("discarding superseded session check #{generation}");
            return;
        }
        match outcome {
            Ok(principal) => {
                log::debug!("session resolved as {} {}", principal.kind().as_str(), principal.email());
                self.publish(SessionState::resolved(Some(principal)));
            }
            Err(SessionError::NoToken) => {
                self.publish(SessionState::unauthenticated());
            }
            Err(err) => {
                log::warn!("session check failed: {err}");
                token::clear_all(self.inner.tokens.as_ref());
                self.publish(SessionState::unauthenticated());
            }
        }
    }

    /// Persist a freshly issued token for `kind`, drop the other role's token,
    /// and resolve the resulting principal.
    ///
    /// Callers await this before navigating, since where to go depends on the
    /// resolved kind.
    pub async fn set_token(&self, token: &str, kind: PrincipalKind) {
        token::store_exclusive(self.inner.tokens.as_ref(), kind, token);
        log::info!("stored {} token", kind.as_str());
        self.check_session().await;
    }

    /// [`set_token`](Self::set_token), then confirm the session resolved as
    /// `kind`.
    ///
    /// A token that resolves as the other principal kind is not kept: the
    /// store signs out and this returns `false`, as it does for a failed check.
    pub async fn sign_in(&self, token: &str, kind: PrincipalKind) -> bool {
        self.set_token(token, kind).await;
        let resolved = self.snapshot().kind();
        if resolved == Some(kind) {
            return true;
        }
        if let Some(other) = resolved {
            log::warn!("{} sign-in resolved as {}; signing out", kind.as_str(), other.as_str());
            self.sign_out();
        }
        false
    }

    /// Clear both slots, settle signed-out, and reload the app at `/`.
    ///
    /// The full navigation discards whatever in-memory state pages hold.
    pub fn logout(&self) {
        self.sign_out();
        log::info!("signed out");
        crate::util::location::hard_redirect("/");
    }

    /// Clear both slots and settle signed-out, without navigating.
    pub fn sign_out(&self) {
        self.next_generation();
        token::clear_all(self.inner.tokens.as_ref());
        self.publish(SessionState::unauthenticated());
    }

    /// React to a token slot changed by another tab.
    pub async fn apply_storage_change(&self, change: StorageChange) {
        match change {
            StorageChange::TokenSet(kind) => {
                log::debug!("{} token changed in another tab", kind.as_str());
                self.check_session().await;
            }
            StorageChange::TokenRemoved(_) | StorageChange::Cleared => {
                if token::active_token(self.inner.tokens.as_ref()).is_none() {
                    log::debug!("tokens removed in another tab");
                    self.sign_out();
                }
            }
            StorageChange::Unrelated => {}
        }
    }

    /// Detach all subscribers and ignore any check still in flight.
    pub fn dispose(&self) {
        self.inner.disposed.store(true, Ordering::SeqCst);
        self.next_generation();
        self.inner.listeners.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }

    async fn resolve(&self) -> Result<Principal, SessionError> {
        let (kind, token) = token::active_token(self.inner.tokens.as_ref()).ok_or(SessionError::NoToken)?;
        if claims::is_expired(&token, claims::now_ms()) {
            return Err(SessionError::Expired);
        }
        let principal = self.inner.backend.fetch_session(&token).await?;
        if principal.kind() != kind {
            log::warn!(
                "{} token resolved to a {} session",
                kind.as_str(),
                principal.kind().as_str()
            );
        }
        Ok(principal)
    }

    fn next_generation(&self) -> u64 {
        self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, generation: u64) -> bool {
        !self.is_disposed() && self.inner.generation.load(Ordering::SeqCst) == generation
    }

    fn is_disposed(&self) -> bool {
        self.inner.disposed.load(Ordering::SeqCst)
    }

    fn publish(&self, state: SessionState) {
        if self.is_disposed() {
            return;
        }
        *self.inner.state.lock().unwrap_or_else(PoisonError::into_inner) = state.clone();
        let listeners: Vec<Listener> = self
            .inner
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in listeners {
            listener(&state);
        }
    }
}
