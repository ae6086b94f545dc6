//! Sign-up: request a verification email, then finish the account from the
//! emailed link.
//!
//! SYSTEM CONTEXT
//! ==============
//! Registration only takes an email; the backend mails a link to
//! `/auth/user/verify-user/{token}` or `/auth/company/verify-company/{token}`.
//! The verification page sets the name, password and phone. If the backend
//! answers with a session token the new account is signed in right away;
//! otherwise the page sends the visitor to the login form.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::google_sign_in::GoogleSignInButton;
use crate::components::loading::Loading;
use crate::net::auth;
use crate::net::client::ApiClient;
use crate::net::types::{AuthResponse, VerificationDetails};
use crate::pages::login::{SESSION_REJECTED, landing_path, login_path, looks_like_email};
use crate::pages::password::{MIN_PASSWORD_CHARS, validate_new_password};
use crate::session::store::SessionStore;
use crate::state::session::PrincipalKind;

pub fn register_path(kind: PrincipalKind) -> &'static str {
    match kind {
        PrincipalKind::User => "/auth/user/register",
        PrincipalKind::Company => "/auth/company/register",
    }
}

/// Route segment under `/auth/{kind}/` that carries the verification token.
pub fn verify_segment(kind: PrincipalKind) -> &'static str {
    match kind {
        PrincipalKind::User => "verify-user",
        PrincipalKind::Company => "verify-company",
    }
}

/// Trimmed, well-formed email.
pub(crate) fn validate_email(raw: &str) -> Result<String, &'static str> {
    let email = raw.trim();
    if email.is_empty() {
        return Err("Email harus diisi");
    }
    if !looks_like_email(email) {
        return Err("Email tidak valid");
    }
    Ok(email.to_owned())
}

/// Raw values of the verification form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct VerificationForm {
    pub name: String,
    pub password: String,
    pub confirm_password: String,
    pub phone: String,
}

/// Check the verification form for `kind`.
///
/// Users give digits only; companies may prefix `+` and need 10 to 15 digits.
pub(crate) fn validate_verification(
    kind: PrincipalKind,
    form: &VerificationForm,
) -> Result<VerificationDetails, &'static str> {
    let name = form.name.trim();
    if name.is_empty() {
        return Err(match kind {
            PrincipalKind::User => "Nama pengguna diperlukan",
            PrincipalKind::Company => "Nama perusahaan harus diisi",
        });
    }
    let password = validate_new_password(&form.password, &form.confirm_password)?;
    let phone = form.phone.trim();
    if phone.is_empty() {
        return Err("Nomor telepon diperlukan");
    }
    let valid_phone = match kind {
        PrincipalKind::User => phone.chars().all(|c| c.is_ascii_digit()),
        PrincipalKind::Company => {
            let digits = phone.strip_prefix('+').unwrap_or(phone);
            digits.chars().all(|c| c.is_ascii_digit()) && (10..=15).contains(&digits.len())
        }
    };
    if !valid_phone {
        return Err("Nomor telepon tidak valid");
    }
    Ok(VerificationDetails { name: name.to_owned(), password, phone: phone.to_owned() })
}

#[component]
pub fn RegisterPage(kind: PrincipalKind) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let email = RwSignal::new(String::new());
    let info = RwSignal::new(None::<String>);
    let sent_to = RwSignal::new(None::<String>);
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
            match auth::register(&api, kind, &address).await {
                Ok(_) => {
                    log::info!("{} registration requested for {address}", kind.as_str());
                    sent_to.set(Some(address));
                }
                Err(e) => info.set(Some(format!("Pendaftaran Gagal: {e}"))),
            }
            busy.set(false);
        });
    };

    let subtitle = match kind {
        PrincipalKind::User => "Buat akun untuk mulai melamar pekerjaan",
        PrincipalKind::Company => "Daftarkan perusahaan untuk mulai merekrut",
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Daftar"</h1>
                <p class="login-card__subtitle">{subtitle}</p>
                {move || match sent_to.get() {
                    Some(address) => view! {
                        <div class="login-success">
                            <h2>"Email Verifikasi Terkirim!"</h2>
                            <p>{format!("Kami telah mengirimkan email verifikasi ke {address}.")}</p>
                            <p>"Silakan cek email Anda dan klik tombol verifikasi untuk melanjutkan pendaftaran."</p>
                        </div>
                    }
                    .into_any(),
                    None => view! {
                        <form class="login-form" on:submit=on_submit.clone()>
                            <input
                                class="login-input"
                                type="email"
                                placeholder="Email"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                            <button class="login-button" type="submit" disabled=move || busy.get()>
                                {move || if busy.get() { "Memproses..." } else { "Daftar" }}
                            </button>
                        </form>
                    }
                    .into_any(),
                }}
                <Show when=move || info.get().is_some()>
                    <p class="login-message">{move || info.get().unwrap_or_default()}</p>
                </Show>
                <GoogleSignInButton kind=kind/>
                <div class="login-divider"></div>
                <A href=login_path(kind)>"Sudah punya akun? Masuk"</A>
            </div>
        </div>
    }
}

#[component]
pub fn VerifyAccountPage(kind: PrincipalKind) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let store = expect_context::<SessionStore>();
    let navigate = use_navigate();
    let params = use_params_map();
    let token = Memo::new(move |_| params.read().get("token").unwrap_or_default());

    let form = RwSignal::new(VerificationForm::default());
    let info = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let check_api = api.clone();
    let status = LocalResource::new(move || {
        let api = check_api.clone();
        let token = token.get();
        async move { auth::check_verification(&api, kind, &token).await }
    });

    let already_verified = Memo::new(move |_| {
        matches!(status.get(), Some(Ok(AuthResponse { is_verified: Some(true), .. })))
    });
    let navigate_verified = navigate.clone();
    Effect::new(move || {
        if already_verified.get() {
            log::info!("{} verification link already used", kind.as_str());
            navigate_verified(login_path(kind), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let token_value = token.get_untracked();
        if token_value.is_empty() {
            info.set(Some("Token verifikasi tidak valid".to_owned()));
            return;
        }
        let details = match validate_verification(kind, &form.get_untracked()) {
            Ok(details) => details,
            Err(message) => {
                info.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        info.set(Some("Memverifikasi...".to_owned()));
        let api = api.clone();
        let store = store.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match auth::complete_verification(&api, kind, &token_value, &details).await {
                Ok(AuthResponse { token: Some(session), .. }) if !session.is_empty() => {
                    if store.sign_in(&session, kind).await {
                        log::info!("{} verified and signed in", kind.as_str());
                        navigate(landing_path(kind), NavigateOptions::default());
                        return;
                    }
                    info.set(Some(SESSION_REJECTED.to_owned()));
                }
                Ok(_) => {
                    log::info!("{} verified", kind.as_str());
                    navigate(login_path(kind), NavigateOptions::default());
                    return;
                }
                Err(e) => info.set(Some(format!("Verifikasi Gagal: {e}"))),
            }
            busy.set(false);
        });
    };

    let name_label = match kind {
        PrincipalKind::User => "Nama pengguna",
        PrincipalKind::Company => "Nama perusahaan",
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Verifikasi Akun Anda"</h1>
                <Show when=move || status.get().is_none()>
                    <Loading/>
                </Show>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder=name_label
                        prop:value=move || form.get().name
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder=format!("Kata sandi (min. {MIN_PASSWORD_CHARS} karakter)")
                        prop:value=move || form.get().password
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Konfirmasi kata sandi"
                        prop:value=move || form.get().confirm_password
                        on:input=move |ev| form.update(|f| f.confirm_password = event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="tel"
                        placeholder="Nomor telepon"
                        prop:value=move || form.get().phone
                        on:input=move |ev| form.update(|f| f.phone = event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Verifikasi Akun"
                    </button>
                </form>
                <Show when=move || info.get().is_some()>
                    <p class="login-message">{move || info.get().unwrap_or_default()}</p>
                </Show>
            </div>
        </div>
    }
}
