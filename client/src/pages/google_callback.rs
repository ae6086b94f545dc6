//! Landing page for Google's OAuth redirect.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the access token from the URL fragment, fetches the Google profile,
//! trades it for a backend token via social login, and hands that to the
//! session store. Navigation waits for the session check like the password
//! login does.

#[cfg(test)]
#[path = "google_callback_test.rs"]
mod google_callback_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::loading::Loading;
use crate::net::auth;
use crate::net::client::ApiClient;
use crate::net::google::{self, OAuthRedirect};
use crate::net::types::AuthResponse;
use crate::pages::login::{SESSION_REJECTED, landing_path, login_path};
use crate::session::store::SessionStore;
use crate::state::session::PrincipalKind;

/// The Google access token from a redirect meant for `kind`.
pub(crate) fn granted_token(redirect: OAuthRedirect, kind: PrincipalKind) -> Result<String, String> {
    match redirect {
        OAuthRedirect::Granted { access_token, state } if state.as_deref() == Some(kind.as_str()) => Ok(access_token),
        OAuthRedirect::Granted { .. } => Err("Login Gagal: respons Google tidak cocok.".to_owned()),
        OAuthRedirect::Denied(reason) => Err(format!("Login Gagal: {reason}")),
        OAuthRedirect::Missing => Err("Login Gagal: token Google tidak ditemukan.".to_owned()),
    }
}

fn redirect_fragment() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.location().hash().ok()).unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

async fn social_sign_in(api: &ApiClient, store: &SessionStore, kind: PrincipalKind) -> Result<(), String> {
    let access_token = granted_token(google::parse_redirect_fragment(&redirect_fragment()), kind)?;
    let identity = google::fetch_identity(&access_token).await.map_err(|e| format!("Login Gagal: {e}"))?;
    let token = match auth::social_login(api, kind, &identity).await {
        Ok(AuthResponse { token: Some(token), .. }) if !token.is_empty() => token,
        Ok(response) => return Err(response.message.unwrap_or_else(|| "Login Gagal".to_owned())),
        Err(e) => return Err(format!("Login Gagal: {e}")),
    };
    if store.sign_in(&token, kind).await {
        log::info!("{} signed in with Google as {}", kind.as_str(), identity.email);
        Ok(())
    } else {
        Err(SESSION_REJECTED.to_owned())
    }
}

#[component]
pub fn GoogleCallbackPage(kind: PrincipalKind) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let store = expect_context::<SessionStore>();
    let navigate = use_navigate();
    let failure = RwSignal::new(None::<String>);

    Effect::new(move || {
        let api = api.clone();
        let store = store.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match social_sign_in(&api, &store, kind).await {
                Ok(()) => navigate(landing_path(kind), NavigateOptions { replace: true, ..NavigateOptions::default() }),
                Err(message) => {
                    log::warn!("Google sign-in failed: {message}");
                    failure.set(Some(message));
                }
            }
        });
    });

    view! {
        <div class="login-page">
            <div class="login-card">
                <Show
                    when=move || failure.get().is_some()
                    fallback=|| view! { <Loading label="Menghubungkan akun Google..."/> }
                >
                    <p class="login-message">{move || failure.get().unwrap_or_default()}</p>
                    <A href=login_path(kind)>"Kembali ke Login"</A>
                </Show>
            </div>
        </div>
    }
}
