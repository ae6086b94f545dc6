//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure rules (guard decisions, formatting, status text, job browsing) live
//! here so pages stay thin and the rules are testable without a browser.
//! `location` is the one browser-touching helper.

pub mod format;
pub mod guard;
pub mod jobs;
pub mod location;
pub mod status;
