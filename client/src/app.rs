//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns the session lifecycle: it builds the token store, REST client,
//! and session store once, provides them through context, mirrors session
//! transitions into an `RwSignal<SessionState>`, starts the initial check
//! after mount, and tears everything down on cleanup.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::auth_guard::AuthGuard;
use crate::components::navbar::Navbar;
use crate::config::ClientConfig;
use crate::net::client::ApiClient;
use crate::pages::{
    applied_jobs::AppliedJobsPage,
    apply_job::ApplyJobPage,
    company_application::CompanyApplicationPage,
    company_dashboard::CompanyDashboardPage,
    company_interviews::CompanyInterviewsPage,
    company_profile::CompanyProfilePage,
    google_callback::GoogleCallbackPage,
    home::HomePage,
    jobs::JobsPage,
    login::{CompanyLoginPage, UserLoginPage, login_path},
    not_authorized::NotAuthorizedPage,
    password::{ForgotPasswordPage, ResetPasswordPage},
    register::{RegisterPage, VerifyAccountPage},
    user_profile::UserProfilePage,
};
use crate::session::backend::HttpSessionBackend;
use crate::session::store::SessionStore;
use crate::session::token::default_token_store;
use crate::state::session::{PrincipalKind, SessionState};
use crate::util::guard::GuardOptions;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="id">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

fn user_only() -> GuardOptions {
    GuardOptions::role(PrincipalKind::User).redirect_to(login_path(PrincipalKind::User))
}

fn company_only() -> GuardOptions {
    GuardOptions::role(PrincipalKind::Company).redirect_to(login_path(PrincipalKind::Company))
}

/// Root application component.
///
/// Provides the build configuration, the session store, its mirrored signal,
/// and the REST client, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let tokens = default_token_store();
    let api = ApiClient::new(&config.api_base_url, Arc::clone(&tokens));
    let store = SessionStore::new(tokens, Arc::new(HttpSessionBackend::new(api.clone())));

    let session = RwSignal::new(store.snapshot());
    let subscription = store.subscribe(move |state| session.set(state.clone()));

    provide_context(config);
    provide_context(api);
    provide_context(store.clone());
    provide_context(session);

    // Effects only run in the browser, so SSR always renders the loading state.
    let init_store = store.clone();
    Effect::new(move || {
        let store = init_store.clone();
        leptos::task::spawn_local(async move { store.initialize().await });
    });

    #[cfg(feature = "hydrate")]
    {
        let listener = crate::session::sync::install_storage_listener(store.clone());
        on_cleanup(move || listener.remove());
    }

    on_cleanup(move || {
        store.unsubscribe(subscription);
        store.dispose();
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/jobboard.css"/>
        <Title text="JobBoard"/>

        <Router>
            <Navbar/>
            <main class="app-main">
                <Routes fallback=|| "Halaman tidak ditemukan.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("not-authorized") view=NotAuthorizedPage/>
                    <Route path=(StaticSegment("auth"), StaticSegment("user"), StaticSegment("login")) view=UserLoginPage/>
                    <Route
                        path=(StaticSegment("auth"), StaticSegment("company"), StaticSegment("login"))
                        view=CompanyLoginPage
                    />
                    <Route
                        path=(StaticSegment("auth"), StaticSegment("user"), StaticSegment("register"))
                        view=|| view! { <RegisterPage kind=PrincipalKind::User/> }
                    />
                    <Route
                        path=(StaticSegment("auth"), StaticSegment("company"), StaticSegment("register"))
                        view=|| view! { <RegisterPage kind=PrincipalKind::Company/> }
                    />
                    <Route
                        path=(StaticSegment("auth"), StaticSegment("user"), StaticSegment("verify-user"), ParamSegment("token"))
                        view=|| view! { <VerifyAccountPage kind=PrincipalKind::User/> }
                    />
                    <Route
                        path=(
                            StaticSegment("auth"),
                            StaticSegment("company"),
                            StaticSegment("verify-company"),
                            ParamSegment("token"),
                        )
                        view=|| view! { <VerifyAccountPage kind=PrincipalKind::Company/> }
                    />
                    <Route
                        path=(StaticSegment("auth"), StaticSegment("user"), StaticSegment("forgot-password"))
                        view=|| view! { <ForgotPasswordPage kind=PrincipalKind::User/> }
                    />
                    <Route
                        path=(StaticSegment("auth"), StaticSegment("company"), StaticSegment("forgot-password"))
                        view=|| view! { <ForgotPasswordPage kind=PrincipalKind::Company/> }
                    />
                    <Route
                        path=(StaticSegment("auth"), StaticSegment("user"), StaticSegment("reset-password"))
                        view=|| view! { <ResetPasswordPage kind=PrincipalKind::User/> }
                    />
                    <Route
                        path=(StaticSegment("auth"), StaticSegment("company"), StaticSegment("reset-password"))
                        view=|| view! { <ResetPasswordPage kind=PrincipalKind::Company/> }
                    />
                    <Route
                        path=(StaticSegment("auth"), StaticSegment("user"), StaticSegment("google-callback"))
                        view=|| view! { <GoogleCallbackPage kind=PrincipalKind::User/> }
                    />
                    <Route
                        path=(StaticSegment("auth"), StaticSegment("company"), StaticSegment("google-callback"))
                        view=|| view! { <GoogleCallbackPage kind=PrincipalKind::Company/> }
                    />
                    <Route
                        path=StaticSegment("jobs")
                        view=|| view! { <AuthGuard options=user_only()><JobsPage/></AuthGuard> }
                    />
                    <Route
                        path=(StaticSegment("jobs"), ParamSegment("slug"), StaticSegment("apply"))
                        view=|| view! { <AuthGuard options=user_only()><ApplyJobPage/></AuthGuard> }
                    />
                    <Route
                        path=(StaticSegment("user"), StaticSegment("applied-jobs"))
                        view=|| view! { <AuthGuard options=user_only()><AppliedJobsPage/></AuthGuard> }
                    />
                    <Route
                        path=(StaticSegment("user"), StaticSegment("profile"))
                        view=|| view! { <AuthGuard options=user_only()><UserProfilePage/></AuthGuard> }
                    />
                    <Route
                        path=(StaticSegment("company"), StaticSegment("dashboard"))
                        view=|| view! { <AuthGuard options=company_only()><CompanyDashboardPage/></AuthGuard> }
                    />
                    <Route
                        path=(StaticSegment("company"), StaticSegment("applications"), ParamSegment("id"))
                        view=|| view! { <AuthGuard options=company_only()><CompanyApplicationPage/></AuthGuard> }
                    />
                    <Route
                        path=(StaticSegment("company"), StaticSegment("interviews"))
                        view=|| view! { <AuthGuard options=company_only()><CompanyInterviewsPage/></AuthGuard> }
                    />
                    <Route
                        path=(StaticSegment("company"), StaticSegment("profile"))
                        view=|| view! { <AuthGuard options=company_only()><CompanyProfilePage/></AuthGuard> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
