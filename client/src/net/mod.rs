//! Networking modules for the job-board REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `client` holds the shared request plumbing, `types` the wire schema,
//! `error` the failure taxonomy, `google` the OAuth hop for social login. The
//! remaining modules are one per backend resource (auth, jobs, applications,
//! interviews, profiles).

pub mod applications;
pub mod auth;
pub mod client;
pub mod error;
pub mod google;
pub mod interviews;
pub mod jobs;
pub mod profile;
pub mod types;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters `encodeURIComponent` leaves alone.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a path segment or query value.
pub fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, URI_COMPONENT).to_string()
}
