//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped data loading and mutations. Access rules are
//! not enforced here; `app` wraps protected pages in `AuthGuard`.

pub mod applied_jobs;
pub mod apply_job;
pub mod company_application;
pub mod company_dashboard;
pub mod company_interviews;
pub mod company_profile;
pub mod google_callback;
pub mod home;
pub mod jobs;
pub mod login;
pub mod not_authorized;
pub mod password;
pub mod register;
pub mod user_profile;
