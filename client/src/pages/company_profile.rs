//! Company profile with editable public details.

use leptos::prelude::*;

use crate::components::loading::Loading;
use crate::net::client::ApiClient;
use crate::net::profile;
use crate::net::types::{CompanyProfile, CompanyProfilePatch};
use crate::pages::user_profile::optional_field;
use crate::util::format::display_date;

/// Editable text fields, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Field {
    Description,
    Website,
    Location,
    Industry,
    Size,
}

impl Field {
    const ALL: [Self; 5] = [Self::Description, Self::Website, Self::Location, Self::Industry, Self::Size];

    fn label(self) -> &'static str {
        match self {
            Self::Description => "Deskripsi",
            Self::Website => "Situs web",
            Self::Location => "Lokasi",
            Self::Industry => "Industri",
            Self::Size => "Ukuran",
        }
    }

    fn slot(self, patch: &mut CompanyProfilePatch) -> &mut Option<String> {
        match self {
            Self::Description => &mut patch.description,
            Self::Website => &mut patch.website,
            Self::Location => &mut patch.location,
            Self::Industry => &mut patch.industry,
            Self::Size => &mut patch.size,
        }
    }

    fn value(self, patch: &CompanyProfilePatch) -> String {
        let value = match self {
            Self::Description => &patch.description,
            Self::Website => &patch.website,
            Self::Location => &patch.location,
            Self::Industry => &patch.industry,
            Self::Size => &patch.size,
        };
        value.clone().unwrap_or_default()
    }
}

fn patch_from(profile: &CompanyProfile) -> CompanyProfilePatch {
    CompanyProfilePatch {
        name: Some(profile.name.clone()),
        description: profile.description.clone(),
        website: profile.website.clone(),
        logo: profile.logo.clone(),
        location: profile.location.clone(),
        industry: profile.industry.clone(),
        size: profile.size.clone(),
        password: None,
    }
}

#[component]
pub fn CompanyProfilePage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let notice = RwSignal::new(None::<String>);
    let draft = RwSignal::new(CompanyProfilePatch::default());

    let fetch_api = api.clone();
    let loaded = LocalResource::new(move || {
        let api = fetch_api.clone();
        async move { profile::company_profile(&api).await }
    });

    Effect::new(move || {
        if let Some(Ok(p)) = loaded.get() {
            draft.set(patch_from(&p));
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let patch = draft.get_untracked();
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match profile::update_company_profile(&api, &patch).await {
                Ok(_) => {
                    notice.set(Some("Profil perusahaan diperbarui.".to_owned()));
                    loaded.refetch();
                }
                Err(e) => notice.set(Some(format!("Gagal memperbarui profil: {e}"))),
            }
        });
    };

    view! {
        <div class="company-profile">
            <Show when=move || notice.get().is_some()>
                <p class="company-profile__notice">{move || notice.get().unwrap_or_default()}</p>
            </Show>
            <Suspense fallback=move || view! { <Loading/> }>
                {move || {
                    loaded
                        .get()
                        .map(|result| match result {
                            Err(e) => view! { <p class="company-profile__error">{e.to_string()}</p> }.into_any(),
                            Ok(p) => view! {
                                <header class="company-profile__header">
                                    {p.logo.map(|src| view! { <img class="company-profile__logo" src=src alt=""/> })}
                                    <h1>{p.name}</h1>
                                    <p>{p.email}</p>
                                    <p>{if p.is_verified { "Terverifikasi" } else { "Belum terverifikasi" }}</p>
                                    <p class="company-profile__since">"Bergabung " {display_date(&p.created_at)}</p>
                                </header>
                            }
                            .into_any(),
                        })
                }}
            </Suspense>
            <form class="company-profile__form" on:submit=on_submit>
                {Field::ALL
                    .into_iter()
                    .map(|field| {
                        view! {
                            <label>
                                {field.label()}
                                <input
                                    type="text"
                                    prop:value=move || draft.with(|d| field.value(d))
                                    on:input=move |ev| {
                                        draft.update(|d| *field.slot(d) = optional_field(&event_target_value(&ev)));
                                    }
                                />
                            </label>
                        }
                    })
                    .collect_view()}
                <button type="submit">"Simpan"</button>
            </form>
        </div>
    }
}
