//! Landing spot for signed-in principals that hit another role's page.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotAuthorizedPage() -> impl IntoView {
    view! {
        <section class="not-authorized">
            <h1>"Akses Ditolak"</h1>
            <p>"Anda tidak memiliki izin untuk membuka halaman ini."</p>
            <A href="/">"Kembali ke beranda"</A>
        </section>
    }
}
