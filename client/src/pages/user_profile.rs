//! Job seeker profile with contact details, experience, and education.

#[cfg(test)]
#[path = "user_profile_test.rs"]
mod user_profile_test;

use leptos::prelude::*;

use crate::components::loading::Loading;
use crate::net::client::ApiClient;
use crate::net::profile;
use crate::net::types::{Education, Experience, UserProfile, UserProfilePatch};
use crate::util::format::display_date;

/// `start - end` for a dated entry; current entries end at "Sekarang".
pub(crate) fn period(start: &str, end: Option<&str>, current: bool) -> String {
    let end = match end {
        _ if current => "Sekarang".to_owned(),
        Some(end) if !end.trim().is_empty() => display_date(end),
        _ => "-".to_owned(),
    };
    format!("{} - {end}", display_date(start))
}

/// Optional text field from a form input: blank means unset.
pub(crate) fn optional_field(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

#[component]
pub fn UserProfilePage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let notice = RwSignal::new(None::<String>);
    let phone = RwSignal::new(String::new());
    let bio = RwSignal::new(String::new());

    let fetch_api = api.clone();
    let loaded = LocalResource::new(move || {
        let api = fetch_api.clone();
        async move { profile::user_profile(&api).await }
    });

    Effect::new(move || {
        if let Some(Ok(p)) = loaded.get() {
            phone.set(p.phone.unwrap_or_default());
            bio.set(p.bio.unwrap_or_default());
        }
    });

    let save = move |current: UserProfile| {
        let api = api.clone();
        let patch = UserProfilePatch {
            name: current.name,
            email: current.email,
            phone: optional_field(&phone.get_untracked()),
            bio: optional_field(&bio.get_untracked()),
            ..UserProfilePatch::default()
        };
        leptos::task::spawn_local(async move {
            match profile::update_user_profile(&api, &patch).await {
                Ok(_) => {
                    notice.set(Some("Profil diperbarui.".to_owned()));
                    loaded.refetch();
                }
                Err(e) => notice.set(Some(format!("Gagal memperbarui profil: {e}"))),
            }
        });
    };

    view! {
        <div class="profile">
            <Show when=move || notice.get().is_some()>
                <p class="profile__notice">{move || notice.get().unwrap_or_default()}</p>
            </Show>
            <Suspense fallback=move || view! { <Loading/> }>
                {move || {
                    let save = save.clone();
                    loaded
                        .get()
                        .map(move |result| match result {
                            Err(e) => view! { <p class="profile__error">{e.to_string()}</p> }.into_any(),
                            Ok(p) => {
                                let current = p.clone();
                                let on_submit = move |ev: leptos::ev::SubmitEvent| {
                                    ev.prevent_default();
                                    save(current.clone());
                                };
                                view! {
                                    <header class="profile__header">
                                        {p.avatar.clone().map(|src| view! { <img class="profile__avatar" src=src alt=""/> })}
                                        <h1>{p.name.clone()}</h1>
                                        <p>{p.email.clone()}</p>
                                        <p class="profile__since">"Bergabung " {display_date(&p.created_at)}</p>
                                    </header>
                                    <form class="profile__form" on:submit=on_submit>
                                        <label>
                                            "Telepon"
                                            <input
                                                type="tel"
                                                prop:value=move || phone.get()
                                                on:input=move |ev| phone.set(event_target_value(&ev))
                                            />
                                        </label>
                                        <label>
                                            "Tentang saya"
                                            <textarea
                                                prop:value=move || bio.get()
                                                on:input=move |ev| bio.set(event_target_value(&ev))
                                            ></textarea>
                                        </label>
                                        <button type="submit">"Simpan"</button>
                                    </form>
                                    <section class="profile__skills">
                                        <h2>"Keahlian"</h2>
                                        <ul>{p.skills.into_iter().map(|s| view! { <li>{s}</li> }).collect_view()}</ul>
                                    </section>
                                    <section class="profile__experience">
                                        <h2>"Pengalaman"</h2>
                                        <ul>{p.experience.into_iter().map(experience_item).collect_view()}</ul>
                                    </section>
                                    <section class="profile__education">
                                        <h2>"Pendidikan"</h2>
                                        <ul>{p.education.into_iter().map(education_item).collect_view()}</ul>
                                    </section>
                                }
                                .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

fn experience_item(item: Experience) -> impl IntoView {
    let when = period(&item.start_date, item.end_date.as_deref(), item.current);
    view! {
        <li class="profile__entry">
            <strong>{item.title}</strong>
            " · "
            {item.company}
            <div class="profile__period">{when}</div>
            {item.description.map(|d| view! { <p>{d}</p> })}
        </li>
    }
}

fn education_item(item: Education) -> impl IntoView {
    let when = period(&item.start_date, item.end_date.as_deref(), item.current);
    view! {
        <li class="profile__entry">
            <strong>{item.school}</strong>
            " · "
            {format!("{} {}", item.degree, item.field_of_study)}
            <div class="profile__period">{when}</div>
        </li>
    }
}
