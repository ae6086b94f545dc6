//! One incoming application as a company sees it: the applicant, their
//! attachments, and the next review step.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reached from the dashboard's incoming list at `/company/applications/{id}`.
//! A pending application is either rejected (back to the dashboard) or taken
//! into processing. A processing application gets an interview slot, which
//! also marks it accepted. Once an interview exists the page only reports it.

#[cfg(test)]
#[path = "company_application_test.rs"]
mod company_application_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::loading::Loading;
use crate::net::client::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::{Application, ApplicationStatus, NewInterview};
use crate::net::{applications, interviews};
use crate::pages::user_profile::optional_field;
use crate::util::format::{display_date, display_date_time, parse_timestamp};
use crate::util::status::{application_status_label, latest_interview};

const DASHBOARD_PATH: &str = "/company/dashboard";

pub fn company_application_path(application_id: i64) -> String {
    format!("/company/applications/{application_id}")
}

/// Which controls the detail page offers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ReviewStage {
    /// Reject or take into processing.
    Decide,
    /// Pick an interview slot.
    Schedule,
    /// An interview exists already.
    Scheduled,
    /// Accepted or rejected without an interview; nothing left to do.
    Closed,
}

pub(crate) fn review_stage(status: ApplicationStatus, has_interview: bool) -> ReviewStage {
    if has_interview {
        return ReviewStage::Scheduled;
    }
    match status {
        ApplicationStatus::Pending => ReviewStage::Decide,
        ApplicationStatus::Processing => ReviewStage::Schedule,
        ApplicationStatus::Accepted | ApplicationStatus::Rejected => ReviewStage::Closed,
    }
}

/// Build the interview request from the form's `datetime-local` value.
pub(crate) fn interview_request(
    application_id: i64,
    scheduled_at: &str,
    notes: &str,
) -> Result<NewInterview, &'static str> {
    let scheduled_at = scheduled_at.trim();
    if scheduled_at.is_empty() {
        return Err("Tanggal dan waktu interview harus diisi");
    }
    if parse_timestamp(scheduled_at).is_err() {
        return Err("Tanggal dan waktu interview tidak valid");
    }
    Ok(NewInterview { application_id, scheduled_at: scheduled_at.to_owned(), notes: optional_field(notes) })
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum ReviewAction {
    Reject,
    Process,
    Schedule(NewInterview),
}

async fn run_action(api: &ApiClient, application_id: i64, action: ReviewAction) -> Result<(), ApiError> {
    match action {
        ReviewAction::Reject => {
            applications::update_application_status(api, application_id, ApplicationStatus::Rejected).await?;
        }
        ReviewAction::Process => {
            applications::update_application_status(api, application_id, ApplicationStatus::Processing).await?;
        }
        ReviewAction::Schedule(interview) => {
            interviews::create_interview(api, &interview).await?;
            applications::update_application_status(api, application_id, ApplicationStatus::Accepted).await?;
        }
    }
    Ok(())
}

#[component]
pub fn CompanyApplicationPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let navigate = use_navigate();
    let params = use_params_map();
    let application_id = Memo::new(move |_| params.read().get("id").and_then(|raw| raw.parse::<i64>().ok()));

    let fetch_api = api.clone();
    let application = LocalResource::new(move || {
        let api = fetch_api.clone();
        let id = application_id.get();
        async move {
            match id {
                Some(id) => applications::company_application(&api, id).await,
                None => Err(ApiError::Decode("invalid application id".to_owned())),
            }
        }
    });

    let notice = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let slot = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());
    let rejected = RwSignal::new(false);

    Effect::new(move || {
        if rejected.get() {
            navigate(DASHBOARD_PATH, NavigateOptions::default());
        }
    });

    let act = move |action: ReviewAction| {
        let Some(id) = application_id.get_untracked() else {
            return;
        };
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let api = api.clone();
        leptos::task::spawn_local(async move {
            let leaves_page = action == ReviewAction::Reject;
            match run_action(&api, id, action).await {
                Ok(()) if leaves_page => {
                    log::info!("rejected application {id}");
                    rejected.set(true);
                    return;
                }
                Ok(()) => {
                    notice.set(None);
                    slot.set(String::new());
                    notes.set(String::new());
                    application.refetch();
                }
                Err(e) => notice.set(Some(format!("Gagal memperbarui lamaran: {e}"))),
            }
            busy.set(false);
        });
    };

    let reject = act.clone();
    let process = act.clone();
    let schedule = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(id) = application_id.get_untracked() else {
            return;
        };
        match interview_request(id, &slot.get_untracked(), &notes.get_untracked()) {
            Ok(interview) => act(ReviewAction::Schedule(interview)),
            Err(message) => notice.set(Some(message.to_owned())),
        }
    };

    let stage = Memo::new(move |_| {
        application.get().and_then(Result::ok).map(|app| review_stage(app.status, !app.interviews.is_empty()))
    });

    view! {
        <div class="application-detail">
            <div class="application-detail__back">
                <A href=DASHBOARD_PATH>"Kembali ke Dashboard"</A>
            </div>
            <Suspense fallback=move || view! { <Loading/> }>
                {move || {
                    application
                        .get()
                        .map(|result| match result {
                            Ok(app) => application_summary(app).into_any(),
                            Err(e) => view! {
                                <p class="application-detail__error">{format!("Gagal memuat lamaran: {e}")}</p>
                            }
                            .into_any(),
                        })
                }}
            </Suspense>
            <Show when=move || notice.get().is_some()>
                <p class="application-detail__notice">{move || notice.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || stage.get() == Some(ReviewStage::Decide)>
                <div class="application-detail__decide">
                    <button
                        class="application-detail__reject"
                        disabled=move || busy.get()
                        on:click={
                            let reject = reject.clone();
                            move |_| reject(ReviewAction::Reject)
                        }
                    >
                        "Tolak"
                    </button>
                    <button
                        class="application-detail__accept"
                        disabled=move || busy.get()
                        on:click={
                            let process = process.clone();
                            move |_| process(ReviewAction::Process)
                        }
                    >
                        "Terima"
                    </button>
                </div>
            </Show>
            <Show when=move || stage.get() == Some(ReviewStage::Schedule)>
                <form class="application-detail__schedule" on:submit=schedule.clone()>
                    <h2>"Jadwalkan Interview"</h2>
                    <input
                        type="datetime-local"
                        prop:value=move || slot.get()
                        on:input=move |ev| slot.set(event_target_value(&ev))
                    />
                    <textarea
                        placeholder="Catatan untuk pelamar (opsional)"
                        prop:value=move || notes.get()
                        on:input=move |ev| notes.set(event_target_value(&ev))
                    ></textarea>
                    <button type="submit" disabled=move || busy.get()>"Jadwalkan"</button>
                </form>
            </Show>
            <Show when=move || stage.get() == Some(ReviewStage::Scheduled)>
                <p class="application-detail__scheduled">"Interview Sudah Dijadwalkan"</p>
            </Show>
        </div>
    }
}

fn application_summary(app: Application) -> impl IntoView {
    let applied = app.created_at.as_deref().map_or_else(|| "-".to_owned(), display_date);
    let interview = latest_interview(&app.interviews).map(|iv| display_date_time(&iv.scheduled_at));
    let applicant = app.applicant;
    let cover = app.cover_letter.filter(|url| !url.is_empty());
    let resume = app.resume.filter(|url| !url.is_empty());
    view! {
        <header class="application-detail__header">
            <h1>{app.job.title}</h1>
            <span class="application-detail__status">{application_status_label(app.status)}</span>
            <span class="application-detail__applied">{format!("Dilamar {applied}")}</span>
        </header>
        {applicant.map(|who| {
            let phone = who.phone.unwrap_or_else(|| "-".to_owned());
            view! {
                <section class="application-detail__applicant">
                    <h2>{who.name}</h2>
                    <p>{who.email}</p>
                    <p>{phone}</p>
                    {who.bio.map(|bio| view! { <p class="application-detail__bio">{bio}</p> })}
                    <ul class="application-detail__skills">
                        {who.skills.into_iter().map(|skill| view! { <li>{skill}</li> }).collect_view()}
                    </ul>
                    <ul class="application-detail__experience">
                        {who
                            .experience
                            .into_iter()
                            .map(|exp| view! { <li>{format!("{} di {}", exp.title, exp.company)}</li> })
                            .collect_view()}
                    </ul>
                    <ul class="application-detail__education">
                        {who
                            .education
                            .into_iter()
                            .map(|edu| view! { <li>{format!("{} {}, {}", edu.degree, edu.field, edu.school)}</li> })
                            .collect_view()}
                    </ul>
                </section>
            }
        })}
        <section class="application-detail__documents">
            {match cover {
                Some(url) => view! { <a href=url target="_blank" rel="noopener">"Lihat Cover Letter"</a> }.into_any(),
                None => view! { <span>"Tidak ada cover letter"</span> }.into_any(),
            }}
            {match resume {
                Some(url) => view! { <a href=url target="_blank" rel="noopener">"Lihat CV"</a> }.into_any(),
                None => view! { <span>"Tidak ada CV"</span> }.into_any(),
            }}
        </section>
        {interview.map(|at| view! { <p class="application-detail__interview">{format!("Interview: {at}")}</p> })}
    }
}
