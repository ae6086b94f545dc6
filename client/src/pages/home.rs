//! Public landing page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::pages::login::{landing_path, login_path};
use crate::state::session::{PrincipalKind, SessionState};

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <section class="home">
            <h1 class="home__title">"Temukan pekerjaan yang tepat"</h1>
            <p class="home__lead">"Ribuan lowongan dari perusahaan terpercaya."</p>
            {move || match session.get().kind() {
                Some(kind) => view! {
                    <A href=landing_path(kind)>"Lanjutkan"</A>
                }
                .into_any(),
                None => view! {
                    <div class="home__actions">
                        <A href=login_path(PrincipalKind::User)>"Cari Kerja"</A>
                        <A href=login_path(PrincipalKind::Company)>"Pasang Lowongan"</A>
                    </div>
                }
                .into_any(),
            }}
        </section>
    }
}
