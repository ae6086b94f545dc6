//! Reactive state shapes shared through Leptos context.

pub mod session;
