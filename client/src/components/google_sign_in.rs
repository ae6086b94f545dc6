//! "Lanjutkan dengan Google" button.
//!
//! Leaves the app for Google's consent screen; `pages::google_callback`
//! finishes the sign-in when Google redirects back. Hidden when the build has
//! no Google client id.

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::state::session::PrincipalKind;

pub fn google_callback_path(kind: PrincipalKind) -> &'static str {
    match kind {
        PrincipalKind::User => "/auth/user/google-callback",
        PrincipalKind::Company => "/auth/company/google-callback",
    }
}

#[component]
pub fn GoogleSignInButton(kind: PrincipalKind) -> impl IntoView {
    let client_id = use_context::<ClientConfig>().and_then(|config| config.google_client_id);

    client_id.map(|client_id| {
        let on_click = move |_| start_google_sign_in(&client_id, kind);
        view! {
            <button class="google-button" type="button" on:click=on_click>
                "Lanjutkan dengan Google"
            </button>
        }
    })
}

fn start_google_sign_in(client_id: &str, kind: PrincipalKind) {
    #[cfg(feature = "hydrate")]
    {
        let Some(origin) = web_sys::window().and_then(|w| w.location().origin().ok()) else {
            log::error!("cannot start Google sign-in without a window origin");
            return;
        };
        let redirect_uri = format!("{origin}{}", google_callback_path(kind));
        let url = crate::net::google::authorize_url(client_id, &redirect_uri, kind.as_str());
        log::info!("starting Google sign-in for {}", kind.as_str());
        crate::util::location::hard_redirect(&url);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (client_id, kind);
    }
}
