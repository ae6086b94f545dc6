//! Dual-role session management.
//!
//! SYSTEM CONTEXT
//! ==============
//! One [`store::SessionStore`] is built at the app root and shared through
//! Leptos context. It owns the two persisted token slots, runs the session
//! check against the backend, and publishes [`SessionState`] snapshots that
//! the reactive layer mirrors into a signal.
//!
//! ERROR HANDLING
//! ==============
//! Every failure while resolving a session is absorbed by the store and shows
//! up only as a signed-out state. [`SessionError`] exists for logging and for
//! backend implementations; it never reaches page code.
//!
//! [`SessionState`]: crate::state::session::SessionState

pub mod backend;
pub mod claims;
pub mod store;
pub mod sync;
pub mod token;

use crate::net::error::ApiError;

/// Why a session check ended signed out.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("no token")]
    NoToken,
    #[error("token expired")]
    Expired,
    #[error("session fetch failed: {0}")]
    Api(#[from] ApiError),
}
