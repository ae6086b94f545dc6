//! Interview schedule for the signed-in company, with rescheduling.

use leptos::prelude::*;

use crate::components::loading::Loading;
use crate::net::client::ApiClient;
use crate::net::interviews;
use crate::net::types::{CompanyInterview, InterviewReschedule};
use crate::pages::user_profile::optional_field;
use crate::util::format::{display_date, display_date_time};
use crate::util::status::{company_interview_status_text, interview_status_tone};

#[component]
pub fn CompanyInterviewsPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let notice = RwSignal::new(None::<String>);

    let fetch_api = api.clone();
    let schedule = LocalResource::new(move || {
        let api = fetch_api.clone();
        async move { interviews::list_company_interviews(&api).await }
    });

    let reschedule = move |interview_id: i64, body: InterviewReschedule| {
        let api = api.clone();
        leptos::task::spawn_local(async move {
            let moved_to = display_date(&body.scheduled_at);
            match interviews::reschedule_interview(&api, interview_id, &body).await {
                Ok(_) => notice.set(Some(format!("Wawancara dipindahkan ke {moved_to}"))),
                Err(e) => {
                    log::warn!("reschedule of interview {interview_id} failed: {e}");
                    notice.set(Some(format!("Gagal menjadwalkan ulang: {e}")));
                }
            }
            schedule.refetch();
        });
    };

    view! {
        <div class="interviews">
            <h1>"Jadwal Wawancara"</h1>
            <Show when=move || notice.get().is_some()>
                <p class="interviews__notice">{move || notice.get().unwrap_or_default()}</p>
            </Show>
            <Suspense fallback=move || view! { <Loading/> }>
                {move || {
                    let reschedule = reschedule.clone();
                    schedule
                        .get()
                        .map(move |result| match result {
                            Err(e) => view! { <p class="interviews__error">{format!("Gagal memuat jadwal wawancara: {e}")}</p> }
                                .into_any(),
                            Ok(list) if list.is_empty() => view! {
                                <p class="interviews__empty">"Belum ada wawancara."</p>
                            }
                            .into_any(),
                            Ok(list) => view! {
                                <table class="interviews__table">
                                    <thead>
                                        <tr>
                                            <th>"Lowongan"</th>
                                            <th>"Pelamar"</th>
                                            <th>"Tanggal Wawancara"</th>
                                            <th>"Catatan"</th>
                                            <th>"Status"</th>
                                            <th>"Ubah Jadwal"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {list.into_iter().map(|iv| interview_row(iv, reschedule.clone())).collect_view()}
                                    </tbody>
                                </table>
                            }
                            .into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}

fn interview_row(
    iv: CompanyInterview,
    reschedule: impl Fn(i64, InterviewReschedule) + Clone + Send + Sync + 'static,
) -> impl IntoView {
    let interview_id = iv.id;
    let new_time = RwSignal::new(String::new());
    let notes = RwSignal::new(iv.notes.clone().unwrap_or_default());
    let applicant = iv.application.applicant;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let scheduled_at = new_time.get_untracked();
        if scheduled_at.is_empty() {
            return;
        }
        reschedule(interview_id, InterviewReschedule { scheduled_at, notes: optional_field(&notes.get_untracked()) });
    };

    view! {
        <tr>
            <td>{iv.application.job.title}</td>
            <td>
                <div>{applicant.name}</div>
                <div class="interviews__contact">{applicant.email}</div>
                {applicant.phone.map(|phone| view! { <div class="interviews__contact">{phone}</div> })}
            </td>
            <td>{display_date_time(&iv.scheduled_at)}</td>
            <td>{iv.notes.unwrap_or_else(|| "-".to_owned())}</td>
            <td>
                <span class=format!("status-badge status-badge--{}", interview_status_tone(iv.status))>
                    {company_interview_status_text(iv.status)}
                </span>
            </td>
            <td>
                <form class="interviews__reschedule" on:submit=on_submit>
                    <input
                        type="datetime-local"
                        prop:value=move || new_time.get()
                        on:input=move |ev| new_time.set(event_target_value(&ev))
                    />
                    <textarea
                        placeholder="Update catatan"
                        prop:value=move || notes.get()
                        on:input=move |ev| notes.set(event_target_value(&ev))
                    ></textarea>
                    <button type="submit">"Simpan"</button>
                </form>
            </td>
        </tr>
    }
}
