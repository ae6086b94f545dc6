//! Email + password sign-in, one page per principal kind.
//!
//! SYSTEM CONTEXT
//! ==============
//! A successful login hands the issued token to the session store and waits
//! for the session check to finish before navigating, so the destination's
//! guard already sees the resolved principal.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::google_sign_in::GoogleSignInButton;
use crate::net::auth;
use crate::net::client::ApiClient;
use crate::net::types::AuthResponse;
use crate::pages::password::forgot_password_path;
use crate::pages::register::register_path;
use crate::session::store::SessionStore;
use crate::state::session::PrincipalKind;

/// Where a freshly signed-in principal lands.
pub fn landing_path(kind: PrincipalKind) -> &'static str {
    match kind {
        PrincipalKind::User => "/jobs",
        PrincipalKind::Company => "/company/dashboard",
    }
}

pub(crate) const SESSION_REJECTED: &str = "Login Gagal: sesi tidak dapat diverifikasi.";

/// Login route for `kind`.
pub fn login_path(kind: PrincipalKind) -> &'static str {
    match kind {
        PrincipalKind::User => "/auth/user/login",
        PrincipalKind::Company => "/auth/company/login",
    }
}

/// Trim the email and require both fields.
pub(crate) fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Email dan kata sandi harus diisi.");
    }
    if !looks_like_email(email) {
        return Err("Format email tidak valid.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

pub(crate) fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !value.chars().any(char::is_whitespace)
        && domain.split('.').count() > 1
        && domain.split('.').all(|part| !part.is_empty())
}

#[component]
pub fn UserLoginPage() -> impl IntoView {
    view! { <LoginForm kind=PrincipalKind::User/> }
}

#[component]
pub fn CompanyLoginPage() -> impl IntoView {
    view! { <LoginForm kind=PrincipalKind::Company/> }
}

#[component]
fn LoginForm(kind: PrincipalKind) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let store = expect_context::<SessionStore>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
            Ok(values) => values,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Memproses...".to_owned());

        let api = api.clone();
        let store = store.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match auth::login(&api, kind, &email_value, &password_value).await {
                Ok(AuthResponse { token: Some(token), .. }) if !token.is_empty() => {
                    if store.sign_in(&token, kind).await {
                        log::info!("{} signed in as {email_value}", kind.as_str());
                        navigate(landing_path(kind), NavigateOptions::default());
                        return;
                    }
                    info.set(SESSION_REJECTED.to_owned());
                }
                Ok(response) => {
                    info.set(response.message.unwrap_or_else(|| "Login Gagal".to_owned()));
                }
                Err(e) => info.set(format!("Login Gagal: {e}")),
            }
            busy.set(false);
        });
    };

    let (title, subtitle, other_label) = match kind {
        PrincipalKind::User => ("Masuk", "Temukan pekerjaan impianmu", "Masuk sebagai perusahaan"),
        PrincipalKind::Company => ("Masuk Perusahaan", "Kelola lowongan dan pelamar", "Masuk sebagai pencari kerja"),
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>{title}</h1>
                <p class="login-card__subtitle">{subtitle}</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Kata sandi"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Masuk"
                    </button>
                </form>
                <div class="login-forgot">
                    <A href=forgot_password_path(kind)>"Lupa kata sandi?"</A>
                </div>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <GoogleSignInButton kind=kind/>
                <div class="login-divider"></div>
                <A href=register_path(kind)>"Belum punya akun? Daftar"</A>
                <A href=login_path(kind.other())>{other_label}</A>
            </div>
        </div>
    }
}
