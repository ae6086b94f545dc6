//! Company home: own postings, a posting form, and incoming applications.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded for company sessions. Every request is authorized by the company
//! token slot; after each mutation the affected list is fetched again rather
//! than patched locally.

#[cfg(test)]
#[path = "company_dashboard_test.rs"]
mod company_dashboard_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::loading::Loading;
use crate::net::client::ApiClient;
use crate::net::types::{Application, ApplicationStatus, ExperienceLevel, Job, JobDraft, JobPatch, JobType, NewInterview};
use crate::net::{applications, interviews, jobs};
use crate::pages::company_application::company_application_path;
use crate::util::format::{display_date, parse_timestamp};
use crate::util::status::application_status_label;

pub(crate) const MAX_LOCATION_CHARS: usize = 32;

/// Raw values of the posting form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct JobForm {
    pub title: String,
    pub description: String,
    pub location: String,
    pub requirements: String,
    pub salary: String,
    pub job_type: String,
    pub experience: String,
    pub deadline: String,
}

/// Check the posting form and build the request body.
pub(crate) fn validate_job_form(form: &JobForm) -> Result<JobDraft, &'static str> {
    let title = required(&form.title, "Judul pekerjaan harus diisi")?;
    let description = required(&form.description, "Deskripsi pekerjaan harus diisi")?;
    let location = required(&form.location, "Lokasi harus diisi")?;
    if location.chars().count() > MAX_LOCATION_CHARS {
        return Err("Lokasi harus kurang dari 32 karakter");
    }
    let requirements = required(&form.requirements, "Persyaratan pekerjaan harus diisi")?;
    let job_type = JobType::ALL
        .into_iter()
        .find(|t| t.label() == form.job_type)
        .ok_or("Jenis pekerjaan harus diisi")?;
    let experience = ExperienceLevel::ALL.into_iter().find(|e| e.label() == form.experience);
    let deadline = required(&form.deadline, "Deadline harus diisi")?;
    if parse_timestamp(&deadline).is_err() {
        return Err("Deadline tidak valid");
    }
    let salary = form.salary.trim();
    Ok(JobDraft {
        title,
        description,
        location,
        requirements,
        salary: (!salary.is_empty()).then(|| salary.to_owned()),
        job_type,
        experience,
        deadline,
    })
}

fn required(raw: &str, message: &'static str) -> Result<String, &'static str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() { Err(message) } else { Ok(trimmed.to_owned()) }
}

#[component]
pub fn CompanyDashboardPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let notice = RwSignal::new(None::<String>);
    let form = RwSignal::new(JobForm { job_type: JobType::FullTime.label().to_owned(), ..JobForm::default() });

    let jobs_api = api.clone();
    let postings = LocalResource::new(move || {
        let api = jobs_api.clone();
        async move { jobs::list_company_jobs(&api).await }
    });
    let apps_api = api.clone();
    let incoming = LocalResource::new(move || {
        let api = apps_api.clone();
        async move { applications::list_company_applications(&api).await }
    });

    let create_api = api.clone();
    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft = match validate_job_form(&form.get_untracked()) {
            Ok(draft) => draft,
            Err(message) => {
                notice.set(Some(message.to_owned()));
                return;
            }
        };
        let api = create_api.clone();
        leptos::task::spawn_local(async move {
            match jobs::create_job(&api, &draft).await {
                Ok(job) => {
                    log::info!("created job {}", job.slug);
                    notice.set(Some("Lowongan dibuat.".to_owned()));
                    form.set(JobForm { job_type: JobType::FullTime.label().to_owned(), ..JobForm::default() });
                    postings.refetch();
                }
                Err(e) => notice.set(Some(format!("Gagal membuat lowongan: {e}"))),
            }
        });
    };

    let job_api = api.clone();
    let job_action = move |job_id: i64, action: JobAction| {
        let api = job_api.clone();
        leptos::task::spawn_local(async move {
            let result = match action {
                JobAction::SetActive(is_active) => {
                    let patch = JobPatch { is_active: Some(is_active), ..JobPatch::default() };
                    jobs::update_job(&api, job_id, &patch).await.map(|_| ())
                }
                JobAction::Delete => jobs::delete_job(&api, job_id).await.map(|_| ()),
            };
            if let Err(e) = result {
                notice.set(Some(e.to_string()));
            }
            postings.refetch();
        });
    };

    let app_action = move |application_id: i64, action: ApplicationAction| {
        let api = api.clone();
        leptos::task::spawn_local(async move {
            let result = match action {
                ApplicationAction::SetStatus(status) => {
                    applications::update_application_status(&api, application_id, status).await.map(|_| ())
                }
                ApplicationAction::Schedule(scheduled_at) => {
                    let interview = NewInterview { application_id, scheduled_at, notes: None };
                    interviews::create_interview(&api, &interview).await.map(|_| ())
                }
            };
            match result {
                Ok(()) => notice.set(Some("Lamaran diperbarui.".to_owned())),
                Err(e) => notice.set(Some(e.to_string())),
            }
            incoming.refetch();
        });
    };

    view! {
        <div class="company-dashboard">
            <h1>"Dashboard Perusahaan"</h1>
            <Show when=move || notice.get().is_some()>
                <p class="company-dashboard__notice">{move || notice.get().unwrap_or_default()}</p>
            </Show>

            <section class="company-dashboard__postings">
                <h2>"Lowongan"</h2>
                <Suspense fallback=move || view! { <Loading/> }>
                    {move || {
                        let job_action = job_action.clone();
                        postings
                            .get()
                            .map(move |result| match result {
                                Err(e) => view! { <p class="company-dashboard__error">{e.to_string()}</p> }.into_any(),
                                Ok(list) => view! {
                                    <ul class="company-dashboard__jobs">
                                        {list.into_iter().map(|job| posting_row(job, job_action.clone())).collect_view()}
                                    </ul>
                                }
                                .into_any(),
                            })
                    }}
                </Suspense>
            </section>

            <section class="company-dashboard__create">
                <h2>"Pasang Lowongan"</h2>
                <form class="job-form" on:submit=on_create>
                    {text_field(form, "Judul", |f| &mut f.title, |f| f.title.clone())}
                    {text_field(form, "Lokasi", |f| &mut f.location, |f| f.location.clone())}
                    {text_field(form, "Gaji", |f| &mut f.salary, |f| f.salary.clone())}
                    {text_field(form, "Deskripsi", |f| &mut f.description, |f| f.description.clone())}
                    {text_field(form, "Persyaratan", |f| &mut f.requirements, |f| f.requirements.clone())}
                    <label>
                        "Jenis"
                        <select on:change=move |ev| form.update(|f| f.job_type = event_target_value(&ev))>
                            {JobType::ALL
                                .into_iter()
                                .map(|t| view! { <option value=t.label() selected=move || form.get().job_type == t.label()>{t.label()}</option> })
                                .collect_view()}
                        </select>
                    </label>
                    <label>
                        "Pengalaman"
                        <select on:change=move |ev| form.update(|f| f.experience = event_target_value(&ev))>
                            <option value="">"-"</option>
                            {ExperienceLevel::ALL
                                .into_iter()
                                .map(|e| view! { <option value=e.label()>{e.label()}</option> })
                                .collect_view()}
                        </select>
                    </label>
                    <label>
                        "Batas waktu"
                        <input
                            type="date"
                            prop:value=move || form.get().deadline
                            on:input=move |ev| form.update(|f| f.deadline = event_target_value(&ev))
                        />
                    </label>
                    <button type="submit">"Simpan"</button>
                </form>
            </section>

            <section class="company-dashboard__applications">
                <h2>"Lamaran Masuk"</h2>
                <Suspense fallback=move || view! { <Loading/> }>
                    {move || {
                        let app_action = app_action.clone();
                        incoming
                            .get()
                            .map(move |result| match result {
                                Err(e) => view! { <p class="company-dashboard__error">{e.to_string()}</p> }.into_any(),
                                Ok(page) => view! {
                                    <p class="company-dashboard__total">{format!("{} lamaran", page.total)}</p>
                                    <ul class="company-dashboard__apps">
                                        {page
                                            .applications
                                            .into_iter()
                                            .map(|app| application_row(app, app_action.clone()))
                                            .collect_view()}
                                    </ul>
                                }
                                .into_any(),
                            })
                    }}
                </Suspense>
            </section>
        </div>
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum JobAction {
    SetActive(bool),
    Delete,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum ApplicationAction {
    SetStatus(ApplicationStatus),
    Schedule(String),
}

fn text_field(
    form: RwSignal<JobForm>,
    label: &'static str,
    field: fn(&mut JobForm) -> &mut String,
    read: fn(&JobForm) -> String,
) -> impl IntoView {
    view! {
        <label>
            {label}
            <input
                type="text"
                prop:value=move || read(&form.get())
                on:input=move |ev| form.update(|f| *field(f) = event_target_value(&ev))
            />
        </label>
    }
}

fn posting_row(job: Job, act: impl Fn(i64, JobAction) + Clone + Send + Sync + 'static) -> impl IntoView {
    let job_id = job.id;
    let is_active = job.is_active;
    let applicants = job.applications.as_ref().map_or(0, Vec::len);
    let deadline = job.deadline.as_deref().map_or_else(|| "-".to_owned(), display_date);
    let delete = act.clone();
    view! {
        <li class="posting">
            <span class="posting__title">{job.title}</span>
            <span class="posting__type">{job.job_type.label()}</span>
            <span class="posting__deadline">{deadline}</span>
            <span class="posting__count">{format!("{applicants} pelamar")}</span>
            <button on:click=move |_| act(job_id, JobAction::SetActive(!is_active))>
                {if is_active { "Nonaktifkan" } else { "Aktifkan" }}
            </button>
            <button class="posting__delete" on:click=move |_| delete(job_id, JobAction::Delete)>"Hapus"</button>
        </li>
    }
}

fn application_row(
    app: Application,
    act: impl Fn(i64, ApplicationAction) + Clone + Send + Sync + 'static,
) -> impl IntoView {
    let app_id = app.id;
    let current = app.status;
    let applicant = app.applicant.as_ref().map(|a| a.name.clone()).unwrap_or_default();
    let slot = RwSignal::new(String::new());
    let schedule = act.clone();
    view! {
        <li class="incoming">
            <span class="incoming__who">{applicant}</span>
            <span class="incoming__job">{app.job.title}</span>
            <div class="incoming__detail">
                <A href=company_application_path(app_id)>"Detail"</A>
            </div>
            <select on:change=move |ev| {
                let chosen = event_target_value(&ev);
                if let Some(status) = ApplicationStatus::ALL.into_iter().find(|s| s.code() == chosen) {
                    act(app_id, ApplicationAction::SetStatus(status));
                }
            }>
                {ApplicationStatus::ALL
                    .into_iter()
                    .map(|s| view! { <option value=s.code() selected=s == current>{application_status_label(s)}</option> })
                    .collect_view()}
            </select>
            <input
                type="datetime-local"
                prop:value=move || slot.get()
                on:input=move |ev| slot.set(event_target_value(&ev))
            />
            <button on:click=move |_| {
                let at = slot.get_untracked();
                if !at.is_empty() {
                    schedule(app_id, ApplicationAction::Schedule(at));
                }
            }>"Jadwalkan Wawancara"</button>
        </li>
    }
}
