//! Application form for one posting, with optional cover letter and resume
//! uploads.

use leptos::html;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::loading::Loading;
use crate::net::client::ApiClient;
use crate::net::error::ApiError;
use crate::net::jobs;
use crate::util::jobs::check_attachment;

const APPLIED_JOBS_PATH: &str = "/user/applied-jobs";

#[component]
pub fn ApplyJobPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let navigate = use_navigate();
    let params = use_params_map();
    let slug = Memo::new(move |_| params.read().get("slug").unwrap_or_default());

    let fetch_api = api.clone();
    let job = LocalResource::new(move || {
        let api = fetch_api.clone();
        let slug = slug.get();
        async move { jobs::public_job(&api, &slug).await }
    });

    let include_cover = RwSignal::new(true);
    let include_resume = RwSignal::new(true);
    let cover_value = RwSignal::new(String::new());
    let resume_value = RwSignal::new(String::new());
    let cover_input = NodeRef::<html::Input>::new();
    let resume_input = NodeRef::<html::Input>::new();
    let info = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let Some(Ok(target)) = job.get_untracked() else {
            info.set(Some("Lowongan tidak ditemukan.".to_owned()));
            return;
        };
        let attachments = check_attachment(include_cover.get_untracked(), &cover_value.get_untracked(), "Pilih file cover letter")
            .and_then(|cover| {
                check_attachment(include_resume.get_untracked(), &resume_value.get_untracked(), "Pilih file CV")
                    .map(|resume| (cover, resume))
            });
        let (send_cover, send_resume) = match attachments {
            Ok(choice) => choice,
            Err(message) => {
                info.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        info.set(Some("Mengirim lamaran...".to_owned()));
        let api = api.clone();
        let navigate = navigate.clone();
        let cover = send_cover.then_some(cover_input);
        let resume = send_resume.then_some(resume_input);
        leptos::task::spawn_local(async move {
            match submit_application(&api, target.id, cover, resume).await {
                Ok(()) => {
                    log::info!("applied to {}", target.slug);
                    navigate(APPLIED_JOBS_PATH, NavigateOptions::default());
                    return;
                }
                Err(e) => info.set(Some(format!("Gagal mengirim lamaran: {e}"))),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="apply-page">
            <Suspense fallback=move || view! { <Loading/> }>
                {move || {
                    job.get()
                        .map(|result| match result {
                            Ok(job) => view! {
                                <h1>{format!("Lamar {}", job.title)}</h1>
                                <p class="apply-page__company">{job.company.name}</p>
                            }
                            .into_any(),
                            Err(e) => view! {
                                <p class="apply-page__error">{format!("Lowongan tidak ditemukan: {e}")}</p>
                            }
                            .into_any(),
                        })
                }}
            </Suspense>
            <form class="apply-form" on:submit=on_submit>
                <label class="apply-form__toggle">
                    <input
                        type="checkbox"
                        prop:checked=move || include_cover.get()
                        on:change=move |ev| {
                            include_cover.set(event_target_checked(&ev));
                            cover_value.set(String::new());
                        }
                    />
                    "Sertakan Cover Letter"
                </label>
                <Show when=move || include_cover.get()>
                    <label>
                        "Unggah Cover Letter"
                        <input
                            type="file"
                            accept=".pdf,.doc,.docx"
                            node_ref=cover_input
                            on:change=move |ev| cover_value.set(event_target_value(&ev))
                        />
                    </label>
                </Show>
                <label class="apply-form__toggle">
                    <input
                        type="checkbox"
                        prop:checked=move || include_resume.get()
                        on:change=move |ev| {
                            include_resume.set(event_target_checked(&ev));
                            resume_value.set(String::new());
                        }
                    />
                    "Sertakan CV"
                </label>
                <Show when=move || include_resume.get()>
                    <label>
                        "Unggah CV"
                        <input
                            type="file"
                            accept=".pdf,.doc,.docx"
                            node_ref=resume_input
                            on:change=move |ev| resume_value.set(event_target_value(&ev))
                        />
                    </label>
                </Show>
                <button class="apply-form__submit" type="submit" disabled=move || busy.get()>
                    "Kirim Lamaran"
                </button>
            </form>
            <Show when=move || info.get().is_some()>
                <p class="apply-page__notice">{move || info.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn selected_file(input: NodeRef<html::Input>) -> Option<web_sys::File> {
    input.get_untracked()?.files()?.item(0)
}

#[cfg(feature = "hydrate")]
async fn submit_application(
    api: &ApiClient,
    job_id: i64,
    cover: Option<NodeRef<html::Input>>,
    resume: Option<NodeRef<html::Input>>,
) -> Result<(), ApiError> {
    let cover = cover.and_then(selected_file);
    let resume = resume.and_then(selected_file);
    crate::net::applications::create_application(api, job_id, cover.as_ref(), resume.as_ref())
        .await
        .map(|_| ())
}

#[cfg(not(feature = "hydrate"))]
#[allow(clippy::unused_async)]
async fn submit_application(
    _api: &ApiClient,
    _job_id: i64,
    _cover: Option<NodeRef<html::Input>>,
    _resume: Option<NodeRef<html::Input>>,
) -> Result<(), ApiError> {
    Err(ApiError::Unavailable)
}
