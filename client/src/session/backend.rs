//! The session-check round trip, behind a trait so the store can be driven
//! without a browser.

use async_trait::async_trait;

use super::SessionError;
use crate::net::auth;
use crate::net::client::ApiClient;
use crate::state::session::Principal;

/// Converts a bearer token into the principal it authenticates.
#[async_trait(?Send)]
pub trait SessionBackend: Send + Sync {
    /// # Errors
    ///
    /// Returns [`SessionError::Api`] for transport failures, non-2xx
    /// statuses, and payloads that do not describe a user or a company.
    async fn fetch_session(&self, token: &str) -> Result<Principal, SessionError>;
}

/// [`SessionBackend`] calling `GET /auth/session` on the REST backend.
#[derive(Clone, Debug)]
pub struct HttpSessionBackend {
    api: ApiClient,
}

impl HttpSessionBackend {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait(?Send)]
impl SessionBackend for HttpSessionBackend {
    async fn fetch_session(&self, token: &str) -> Result<Principal, SessionError> {
        Ok(auth::fetch_session(&self.api, token).await?)
    }
}
