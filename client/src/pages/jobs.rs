//! Job board for signed-in job seekers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The URL is the page state: `search` drives the listing request and `job`
//! names the highlighted posting. Jobs the user already applied to are left
//! out of the listing.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::loading::Loading;
use crate::net::client::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::Job;
use crate::net::{applications, jobs};
use crate::util::format::display_date;
use crate::util::jobs::{JobSelection, apply_path, available_jobs, jobs_path, salary_text, select_job};

async fn load_available_jobs(api: &ApiClient, search: &str) -> Result<Vec<Job>, ApiError> {
    let applied = applications::list_user_applications(api).await?;
    let listing = jobs::list_public_jobs(api, search).await?;
    Ok(available_jobs(listing, &applied))
}

#[component]
pub fn JobsPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let query = use_query_map();
    let navigate = use_navigate();

    let search = Memo::new(move |_| query.with(|q| q.get("search").unwrap_or_default()));
    let requested = Memo::new(move |_| query.with(|q| q.get("job").unwrap_or_default()));
    let search_input = RwSignal::new(search.get_untracked());

    let listing = LocalResource::new(move || {
        let api = api.clone();
        let term = search.get();
        async move { load_available_jobs(&api, &term).await }
    });

    // Name the stand-in job in the URL when the requested one is missing.
    let navigate_default = navigate.clone();
    Effect::new(move || {
        let Some(Ok(list)) = listing.get() else {
            return;
        };
        if let JobSelection::Defaulted(first) = select_job(&list, &requested.get()) {
            let path = jobs_path(&search.get_untracked(), Some(&first.slug));
            navigate_default(&path, NavigateOptions { replace: true, scroll: false, ..NavigateOptions::default() });
        }
    });

    let navigate_search = navigate.clone();
    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        navigate_search(&jobs_path(&search_input.get_untracked(), None), NavigateOptions::default());
    };
    let on_clear = move |_| {
        search_input.set(String::new());
        navigate("/jobs", NavigateOptions { replace: true, scroll: false, ..NavigateOptions::default() });
    };

    view! {
        <div class="jobs-page">
            <form class="jobs-search" on:submit=on_search>
                <input
                    class="jobs-search__input"
                    type="search"
                    placeholder="Cari posisi atau perusahaan"
                    prop:value=move || search_input.get()
                    on:input=move |ev| search_input.set(event_target_value(&ev))
                />
                <button class="jobs-search__submit" type="submit">"Cari"</button>
                <button class="jobs-search__clear" type="button" on:click=on_clear>"Hapus"</button>
            </form>
            <Suspense fallback=move || view! { <Loading/> }>
                {move || {
                    listing
                        .get()
                        .map(|result| match result {
                            Err(e) => view! { <p class="jobs-page__error">{format!("Gagal memuat lowongan: {e}")}</p> }
                                .into_any(),
                            Ok(list) if list.is_empty() => view! {
                                <p class="jobs-page__empty">"Tidak ada lowongan yang tersedia."</p>
                            }
                            .into_any(),
                            Ok(list) => {
                                let term = search.get();
                                let selected = select_job(&list, &requested.get()).job().cloned();
                                let selected_id = selected.as_ref().map(|j| j.id);
                                view! {
                                    <div class="jobs-board">
                                        <ul class="jobs-board__list">
                                            {list
                                                .into_iter()
                                                .map(|job| job_card(job, &term, selected_id))
                                                .collect_view()}
                                        </ul>
                                        {selected.map(job_detail)}
                                    </div>
                                }
                                .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

fn job_card(job: Job, search: &str, selected_id: Option<i64>) -> impl IntoView {
    let href = jobs_path(search, Some(&job.slug));
    let class = if selected_id == Some(job.id) { "job-card job-card--selected" } else { "job-card" };
    view! {
        <li class=class>
            <A href=href>
                <span class="job-card__title">{job.title}</span>
                <span class="job-card__company">{job.company.name}</span>
                <span class="job-card__meta">
                    {job.location.unwrap_or_else(|| "-".to_owned())}
                    " • "
                    {job.job_type.label()}
                </span>
            </A>
        </li>
    }
}

fn job_detail(job: Job) -> impl IntoView {
    let salary = salary_text(&job);
    let apply_href = apply_path(&job.slug);
    view! {
        <article class="job-detail">
            <header class="job-detail__header">
                {job.company.logo.clone().map(|src| view! { <img class="job-detail__logo" src=src alt=""/> })}
                <h2 class="job-detail__title">{job.title.clone()}</h2>
                <p class="job-detail__company">{job.company.name.clone()}</p>
            </header>
            <dl class="job-detail__facts">
                <dt>"Lokasi"</dt>
                <dd>{job.location.clone().unwrap_or_else(|| "-".to_owned())}</dd>
                <dt>"Gaji"</dt>
                <dd>{salary}</dd>
                <dt>"Jenis"</dt>
                <dd>{job.job_type.label()}</dd>
                <dt>"Pengalaman"</dt>
                <dd>{job.experience.label()}</dd>
                <dt>"Dibuat pada"</dt>
                <dd>{display_date(&job.created_at)}</dd>
                <dt>"Batas waktu"</dt>
                <dd>{job.deadline.as_deref().map_or_else(|| "Not set".to_owned(), display_date)}</dd>
            </dl>
            <section class="job-detail__section">
                <h3>"Deskripsi"</h3>
                <div inner_html=job.description></div>
            </section>
            <section class="job-detail__section">
                <h3>"Persyaratan"</h3>
                <div inner_html=job.requirements></div>
            </section>
            <div class="job-detail__apply">
                <A href=apply_href>"Lamar Sekarang"</A>
            </div>
        </article>
    }
}
