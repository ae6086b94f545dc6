//! Shared HTTP plumbing for backend calls.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every request resolves to [`ApiError::Unavailable`],
//! since these endpoints are only meaningful in the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each call names the token slot that authorizes it. User-facing services
//! present the user token, company services the company token, and the
//! session check presents an explicit token.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::session::token::TokenStore;
use crate::state::session::PrincipalKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

/// Which credential a request carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Auth<'a> {
    /// No `Authorization` header.
    Anonymous,
    /// The token currently persisted for this principal kind, if any.
    Slot(PrincipalKind),
    /// An explicit bearer token.
    Token(&'a str),
}

/// REST client bound to the backend base URL and the persisted token slots.
#[derive(Clone)]
pub struct ApiClient {
    base_url: Arc<str>,
    tokens: Arc<dyn TokenStore>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient").field("base_url", &self.base_url).finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(base_url: &str, tokens: Arc<dyn TokenStore>) -> Self {
        Self { base_url: Arc::from(base_url.trim_end_matches('/')), tokens }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an endpoint path (`"/auth/session"`).
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }

    /// Value for the `Authorization` header, when the request carries a token.
    pub fn authorization(&self, auth: Auth<'_>) -> Option<String> {
        let token = match auth {
            Auth::Anonymous => None,
            Auth::Slot(kind) => self.tokens.get(kind),
            Auth::Token(token) => Some(token.to_owned()),
        }?;
        (!token.is_empty()).then(|| format!("Bearer {token}"))
    }

    /// Send a request without a body and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-2xx status (carrying the
    /// server message or `fallback`), or an undecodable body.
    pub async fn call<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        auth: Auth<'_>,
        fallback: &str,
    ) -> Result<T, ApiError> {
        self.call_with::<(), T>(method, path, auth, None, fallback).await
    }

    /// Send a request with an optional JSON body and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::call`].
    pub async fn call_with<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        auth: Auth<'_>,
        body: Option<&B>,
        fallback: &str,
    ) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let url = self.url(path);
            let mut builder = match method {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
                Method::Put => Request::put(&url),
                Method::Patch => Request::patch(&url),
                Method::Delete => Request::delete(&url),
            };
            if let Some(header) = self.authorization(auth) {
                builder = builder.header("Authorization", &header);
            }
            let resp = match body {
                Some(body) => builder
                    .json(body)
                    .map_err(|e| ApiError::Network(e.to_string()))?
                    .send()
                    .await,
                None => builder.send().await,
            }
            .map_err(|e| ApiError::Network(e.to_string()))?;
            read_json(resp, fallback).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (method, path, auth, body, fallback);
            Err(ApiError::Unavailable)
        }
    }

    /// Send a multipart form (browser only).
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::call`].
    #[cfg(feature = "hydrate")]
    pub async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        auth: Auth<'_>,
        form: web_sys::FormData,
        fallback: &str,
    ) -> Result<T, ApiError> {
        use gloo_net::http::Request;

        // No explicit Content-Type: the browser adds the multipart boundary.
        let mut builder = Request::post(&self.url(path));
        if let Some(header) = self.authorization(auth) {
            builder = builder.header("Authorization", &header);
        }
        let resp = builder
            .body(form)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(resp, fallback).await
    }
}

#[cfg(feature = "hydrate")]
pub(super) async fn read_json<T: DeserializeOwned>(resp: gloo_net::http::Response, fallback: &str) -> Result<T, ApiError> {
    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::from_response(resp.status(), &body, fallback));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}
