//! Forgotten-password flow: request a reset email, then set a new password
//! from the emailed `/auth/{kind}/reset-password?token=...` link.

#[cfg(test)]
#[path = "password_test.rs"]
mod password_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::auth;
use crate::net::client::ApiClient;
use crate::pages::login::login_path;
use crate::pages::register::validate_email;
use crate::state::session::PrincipalKind;

pub const MIN_PASSWORD_CHARS: usize = 8;

pub fn forgot_password_path(kind: PrincipalKind) -> &'static str {
    match kind {
        PrincipalKind::User => "/auth/user/forgot-password",
        PrincipalKind::Company => "/auth/company/forgot-password",
    }
}

/// A new password and its confirmation; returns the password.
pub(crate) fn validate_new_password(password: &str, confirm: &str) -> Result<String, &'static str> {
    if password.is_empty() {
        return Err("Kata sandi diperlukan");
    }
    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Err("Kata sandi harus minimal 8 karakter");
    }
    if password != confirm {
        return Err("Kata sandi harus cocok");
    }
    Ok(password.to_owned())
}

#[component]
pub fn ForgotPasswordPage(kind: PrincipalKind) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let email = RwSignal::new(String::new());
    let info = RwSignal::new(None::<String>);
    let sent = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let address = match validate_email(&email.get_untracked()) {
            Ok(address) => address,
            Err(message) => {
                info.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        info.set(None);
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match auth::forgot_password(&api, kind, &address).await {
                Ok(_) => sent.set(true),
                Err(e) => info.set(Some(format!("Gagal mengirim email reset password: {e}"))),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <Show
                    when=move || sent.get()
                    fallback=move || view! {
                        <h1>"Lupa Password"</h1>
                        <p class="login-card__subtitle">
                            "Masukkan alamat email Anda dan kami akan mengirimkan link untuk reset password."
                        </p>
                        <form class="login-form" on:submit=on_submit.clone()>
                            <input
                                class="login-input"
                                type="email"
                                placeholder="Alamat Email"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                            <button class="login-button" type="submit" disabled=move || busy.get()>
                                "Kirim Link Reset"
                            </button>
                        </form>
                    }
                >
                    <h1>"Cek Email Anda"</h1>
                    <p>
                        "Kami telah mengirimkan link reset password ke email Anda. Silakan cek email Anda dan ikuti instruksi untuk reset password."
                    </p>
                </Show>
                <Show when=move || info.get().is_some()>
                    <p class="login-message">{move || info.get().unwrap_or_default()}</p>
                </Show>
                <div class="login-divider"></div>
                <A href=login_path(kind)>"Kembali ke Login"</A>
            </div>
        </div>
    }
}

#[component]
pub fn ResetPasswordPage(kind: PrincipalKind) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let navigate = use_navigate();
    let query = use_query_map();
    let token = Memo::new(move |_| query.with(|q| q.get("token").unwrap_or_default()));

    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let info = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let done = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let token_value = token.get_untracked();
        if token_value.is_empty() {
            info.set(Some("Token tidak valid".to_owned()));
            return;
        }
        let new_password = match validate_new_password(&password.get_untracked(), &confirm.get_untracked()) {
            Ok(value) => value,
            Err(message) => {
                info.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        info.set(None);
        let api = api.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match auth::reset_password(&api, kind, &token_value, &new_password).await {
                Ok(_) => {
                    log::info!("{} password reset", kind.as_str());
                    done.set(true);
                    navigate(login_path(kind), NavigateOptions::default());
                }
                Err(e) => info.set(Some(format!("Gagal mereset password: {e}"))),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Reset Password Anda"</h1>
                <Show when=move || token.get().is_empty()>
                    <p class="login-message">
                        "Link reset password tidak valid atau sudah kadaluarsa. Silakan minta link reset password baru."
                    </p>
                    <A href=forgot_password_path(kind)>"Minta Link Reset Password Baru"</A>
                </Show>
                <Show when=move || done.get()>
                    <p>"Password Anda telah berhasil direset."</p>
                </Show>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password Baru"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Konfirmasi Password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get() || token.get().is_empty()>
                        "Reset Password"
                    </button>
                </form>
                <Show when=move || info.get().is_some()>
                    <p class="login-message">{move || info.get().unwrap_or_default()}</p>
                </Show>
            </div>
        </div>
    }
}
