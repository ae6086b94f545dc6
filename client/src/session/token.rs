//! Persisted bearer-token slots.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two `localStorage` keys, one per principal kind, shared by every tab of the
//! same origin. The session store owns all writes; the REST client reads the
//! slot a request is authorized by.
//!
//! TRADE-OFFS
//! ==========
//! Storage access is best-effort: a missing window or a storage exception
//! reads as an empty slot and writes are dropped. SSR uses the in-memory store.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use crate::state::session::PrincipalKind;

/// Key-value access to the two token slots.
pub trait TokenStore: Send + Sync {
    fn get(&self, slot: PrincipalKind) -> Option<String>;
    fn set(&self, slot: PrincipalKind, token: &str);
    fn remove(&self, slot: PrincipalKind);
}

/// Persist `token` for `kind` and clear the other slot.
///
/// A tab holds credentials for at most one role at a time.
pub fn store_exclusive(store: &dyn TokenStore, kind: PrincipalKind, token: &str) {
    store.set(kind, token);
    store.remove(kind.other());
}

/// Clear both slots.
pub fn clear_all(store: &dyn TokenStore) {
    store.remove(PrincipalKind::User);
    store.remove(PrincipalKind::Company);
}

/// The token a session check should present, with the kind it belongs to.
///
/// The company slot wins if both are somehow populated. Empty strings count as
/// absent.
pub fn active_token(store: &dyn TokenStore) -> Option<(PrincipalKind, String)> {
    [PrincipalKind::Company, PrincipalKind::User]
        .into_iter()
        .find_map(|kind| store.get(kind).filter(|t| !t.is_empty()).map(|t| (kind, t)))
}

/// Log a storage write the browser refused. Returns whether it succeeded.
///
/// A refused remove can leave both slots populated.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
pub(crate) fn checked_write<E: std::fmt::Debug>(result: Result<(), E>, action: &str, slot: PrincipalKind) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            log::warn!("failed to {action} {} token: {err:?}", slot.as_str());
            false
        }
    }
}

/// In-process token slots used for SSR and tests.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    slots: Mutex<HashMap<PrincipalKind, String>>,
}

impl MemoryTokenStore {
    pub fn with_token(kind: PrincipalKind, token: &str) -> Self {
        let store = Self::default();
        store.set(kind, token);
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self, slot: PrincipalKind) -> Option<String> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner).get(&slot).cloned()
    }

    fn set(&self, slot: PrincipalKind, token: &str) {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(slot, token.to_owned());
    }

    fn remove(&self, slot: PrincipalKind) {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner).remove(&slot);
    }
}

/// Token slots backed by `window.localStorage`.
///
/// Holds no JS handles; every call looks the storage object up again, which
/// keeps the type `Send + Sync` for Leptos context.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageTokens;

#[cfg(feature = "hydrate")]
impl LocalStorageTokens {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

#[cfg(feature = "hydrate")]
impl TokenStore for LocalStorageTokens {
    fn get(&self, slot: PrincipalKind) -> Option<String> {
        Self::storage()?.get_item(slot.storage_key()).ok().flatten()
    }

    fn set(&self, slot: PrincipalKind, token: &str) {
        if let Some(storage) = Self::storage() {
            checked_write(storage.set_item(slot.storage_key(), token), "persist", slot);
        }
    }

    fn remove(&self, slot: PrincipalKind) {
        if let Some(storage) = Self::storage() {
            checked_write(storage.remove_item(slot.storage_key()), "remove", slot);
        }
    }
}

/// Token store for the current build target.
pub fn default_token_store() -> std::sync::Arc<dyn TokenStore> {
    #[cfg(feature = "hydrate")]
    {
        std::sync::Arc::new(LocalStorageTokens)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::sync::Arc::new(MemoryTokenStore::default())
    }
}
