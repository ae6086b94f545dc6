//! Route-guard decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! `components::auth_guard::AuthGuard` wraps every protected page and applies
//! the decision computed here on each session change. Keeping the rule a pure
//! function of `(state, options, path)` lets it be tested without a router.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use std::collections::HashMap;

use crate::state::session::{PrincipalKind, SessionState};

/// Where role mismatches land unless a per-route override applies.
pub const NOT_AUTHORIZED_ROUTE: &str = "/not-authorized";

/// Access rule for one protected page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuardOptions {
    /// Role the page is restricted to; `None` admits any signed-in principal.
    pub required_role: Option<PrincipalKind>,
    /// Destination for signed-out visitors.
    pub redirect_to: String,
    /// Per-path destinations that override both defaults when access is denied.
    pub route_redirects: HashMap<String, String>,
}

impl Default for GuardOptions {
    fn default() -> Self {
        Self { required_role: None, redirect_to: "/".to_owned(), route_redirects: HashMap::new() }
    }
}

impl GuardOptions {
    /// Restrict to `role`.
    pub fn role(role: PrincipalKind) -> Self {
        Self { required_role: Some(role), ..Self::default() }
    }

    #[must_use]
    pub fn redirect_to(mut self, path: &str) -> Self {
        path.clone_into(&mut self.redirect_to);
        self
    }

    #[must_use]
    pub fn route_redirect(mut self, from: &str, to: &str) -> Self {
        self.route_redirects.insert(from.to_owned(), to.to_owned());
        self
    }
}

/// What the guard does for the current state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session still resolving: show the loading placeholder.
    Pending,
    Render,
    /// Replace the current history entry with this path and render nothing.
    Redirect(String),
}

/// Decide access to `path` for `state`.
pub fn decide(state: &SessionState, options: &GuardOptions, path: &str) -> GuardDecision {
    if state.loading {
        return GuardDecision::Pending;
    }
    let override_for_path = options.route_redirects.get(path);
    let Some(kind) = state.kind() else {
        let target = override_for_path.unwrap_or(&options.redirect_to);
        return GuardDecision::Redirect(target.clone());
    };
    match options.required_role {
        Some(required) if required != kind => GuardDecision::Redirect(
            override_for_path.map_or_else(|| NOT_AUTHORIZED_ROUTE.to_owned(), Clone::clone),
        ),
        _ => GuardDecision::Render,
    }
}
