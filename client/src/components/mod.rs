//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the session from Leptos context; pages compose them.

pub mod auth_guard;
pub mod google_sign_in;
pub mod loading;
pub mod navbar;
