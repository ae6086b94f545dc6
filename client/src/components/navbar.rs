//! Top navigation bar with role-aware links and sign-out.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::session::store::SessionStore;
use crate::state::session::{PrincipalKind, SessionState};

/// Links shown to each kind of principal.
fn links_for(kind: Option<PrincipalKind>) -> &'static [(&'static str, &'static str)] {
    match kind {
        Some(PrincipalKind::User) => &[
            ("/jobs", "Lowongan"),
            ("/user/applied-jobs", "Lamaran Saya"),
            ("/user/profile", "Profil"),
        ],
        Some(PrincipalKind::Company) => &[
            ("/company/dashboard", "Dashboard"),
            ("/company/interviews", "Wawancara"),
            ("/company/profile", "Profil Perusahaan"),
        ],
        None => &[("/auth/user/login", "Masuk"), ("/auth/company/login", "Untuk Perusahaan")],
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let store = expect_context::<SessionStore>();

    let on_logout = move |_| store.logout();

    view! {
        <nav class="navbar">
            <A href="/">"JobBoard"</A>
            <div class="navbar__links">
                {move || {
                    links_for(session.get().kind())
                        .iter()
                        .map(|(href, label)| view! { <A href=*href>{*label}</A> })
                        .collect_view()
                }}
            </div>
            <Show when=move || session.get().is_authenticated()>
                <div class="navbar__account">
                    {move || {
                        session
                            .get()
                            .principal
                            .and_then(|p| p.picture().map(str::to_owned))
                            .map(|src| view! { <img class="navbar__avatar" src=src alt=""/> })
                    }}
                    <span class="navbar__name">
                        {move || session.get().principal.map(|p| p.name().to_owned()).unwrap_or_default()}
                    </span>
                    <button class="navbar__logout" on:click=on_logout.clone()>
                        "Keluar"
                    </button>
                </div>
            </Show>
        </nav>
    }
}
