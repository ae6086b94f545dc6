//! Cross-tab session synchronization.
//!
//! Browsers fire `storage` on every *other* tab of the origin when a
//! `localStorage` key changes. Token-slot changes are turned into
//! [`StorageChange`]s and applied to the store; everything else is ignored.

#[cfg(test)]
#[path = "sync_test.rs"]
mod sync_test;

use crate::state::session::PrincipalKind;

/// A `storage` event as it concerns the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageChange {
    /// A token slot gained or replaced its value.
    TokenSet(PrincipalKind),
    /// A token slot was removed or emptied.
    TokenRemoved(PrincipalKind),
    /// The whole storage area was cleared.
    Cleared,
    Unrelated,
}

/// Classify a `storage` event by its `key` and `newValue`.
///
/// A `None` key is what `localStorage.clear()` produces.
pub fn classify(key: Option<&str>, new_value: Option<&str>) -> StorageChange {
    let Some(key) = key else {
        return StorageChange::Cleared;
    };
    let Some(kind) = PrincipalKind::from_storage_key(key) else {
        return StorageChange::Unrelated;
    };
    match new_value {
        Some(value) if !value.is_empty() => StorageChange::TokenSet(kind),
        _ => StorageChange::TokenRemoved(kind),
    }
}

/// Listen for token changes made in other tabs.
///
/// The caller removes the returned handle when the app unmounts.
#[cfg(feature = "hydrate")]
pub fn install_storage_listener(store: super::store::SessionStore) -> leptos::prelude::WindowListenerHandle {
    use wasm_bindgen::JsCast;

    leptos::prelude::window_event_listener_untyped("storage", move |event| {
        let Ok(event) = event.dyn_into::<web_sys::StorageEvent>() else {
            return;
        };
        let change = classify(event.key().as_deref(), event.new_value().as_deref());
        if change == StorageChange::Unrelated {
            return;
        }
        let store = store.clone();
        leptos::task::spawn_local(async move {
            store.apply_storage_change(change).await;
        });
    })
}
