//! Session state for the signed-in principal of this browser tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mirrored into an `RwSignal<SessionState>` at the app root. Route guards,
//! the navbar, and role-aware pages read it; only the session store writes it.
//!
//! DESIGN
//! ======
//! A session holds at most one principal. The user/company split is a tagged
//! enum rather than two nullable slots, so "both populated" cannot be built.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

/// Which kind of account a session (or a token slot) belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrincipalKind {
    /// Job seeker.
    User,
    /// Hiring organization.
    Company,
}

impl PrincipalKind {
    /// `localStorage` key holding the bearer token for this kind.
    pub fn storage_key(self) -> &'static str {
        match self {
            Self::User => "token",
            Self::Company => "companyToken",
        }
    }

    /// Inverse of [`PrincipalKind::storage_key`].
    pub fn from_storage_key(key: &str) -> Option<Self> {
        match key {
            "token" => Some(Self::User),
            "companyToken" => Some(Self::Company),
            _ => None,
        }
    }

    /// The other kind.
    pub fn other(self) -> Self {
        match self {
            Self::User => Self::Company,
            Self::Company => Self::User,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Company => "company",
        }
    }
}

/// A signed-in job seeker as reported by the session endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPrincipal {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub google_id: Option<String>,
}

/// A signed-in company as reported by the session endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyPrincipal {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub google_id: Option<String>,
}

/// The authenticated entity of a session.
///
/// Deserializes directly from the `GET /auth/session` body, where the `type`
/// field selects the variant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Principal {
    User(UserPrincipal),
    Company(CompanyPrincipal),
}

impl Principal {
    pub fn kind(&self) -> PrincipalKind {
        match self {
            Self::User(_) => PrincipalKind::User,
            Self::Company(_) => PrincipalKind::Company,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::User(u) => &u.name,
            Self::Company(c) => &c.name,
        }
    }

    pub fn email(&self) -> &str {
        match self {
            Self::User(u) => &u.email,
            Self::Company(c) => &c.email,
        }
    }

    /// Avatar for users, logo for companies.
    pub fn picture(&self) -> Option<&str> {
        match self {
            Self::User(u) => u.avatar.as_deref(),
            Self::Company(c) => c.logo.as_deref(),
        }
    }
}

/// Authentication state tracking the current principal and loading status.
///
/// `Default` is the application-start state: no principal, still loading.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub principal: Option<Principal>,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { principal: None, loading: true }
    }
}

impl SessionState {
    /// A settled state with the given principal (or none).
    pub fn resolved(principal: Option<Principal>) -> Self {
        Self { principal, loading: false }
    }

    /// A settled, signed-out state.
    pub fn unauthenticated() -> Self {
        Self::resolved(None)
    }

    pub fn is_authenticated(&self) -> bool {
        self.principal.is_some()
    }

    pub fn kind(&self) -> Option<PrincipalKind> {
        self.principal.as_ref().map(Principal::kind)
    }

    pub fn user(&self) -> Option<&UserPrincipal> {
        match &self.principal {
            Some(Principal::User(u)) => Some(u),
            _ => None,
        }
    }

    pub fn company(&self) -> Option<&CompanyPrincipal> {
        match &self.principal {
            Some(Principal::Company(c)) => Some(c),
            _ => None,
        }
    }
}
