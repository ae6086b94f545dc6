//! Applications submitted by the signed-in job seeker, with interview
//! responses.

use leptos::prelude::*;

use crate::components::loading::Loading;
use crate::net::client::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::{Application, MessageResponse};
use crate::net::{applications, interviews};
use crate::util::format::{display_date, display_date_time};
use crate::util::status::{application_status_label, interview_status_text, latest_interview, respondable_interview};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Response {
    Accept,
    Reschedule,
    Withdraw,
}

async fn respond(api: &ApiClient, response: Response, id: i64) -> Result<MessageResponse, ApiError> {
    match response {
        Response::Accept => interviews::accept_interview(api, id).await,
        Response::Reschedule => interviews::request_reschedule(api, id).await,
        Response::Withdraw => applications::delete_application(api, id).await,
    }
}

fn done_message(response: Response) -> &'static str {
    match response {
        Response::Accept => "Wawancara diterima.",
        Response::Reschedule => "Permintaan jadwal ulang dikirim.",
        Response::Withdraw => "Lamaran dibatalkan.",
    }
}

#[component]
pub fn AppliedJobsPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let notice = RwSignal::new(None::<String>);

    let fetch_api = api.clone();
    let list = LocalResource::new(move || {
        let api = fetch_api.clone();
        async move { applications::list_user_applications(&api).await }
    });

    let act = move |response: Response, id: i64| {
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match respond(&api, response, id).await {
                Ok(ack) => notice.set(Some(ack.message.unwrap_or_else(|| done_message(response).to_owned()))),
                Err(e) => notice.set(Some(e.to_string())),
            }
            list.refetch();
        });
    };

    view! {
        <div class="applied-jobs">
            <h1>"Lamaran Saya"</h1>
            <Show when=move || notice.get().is_some()>
                <p class="applied-jobs__notice">{move || notice.get().unwrap_or_default()}</p>
            </Show>
            <Suspense fallback=move || view! { <Loading/> }>
                {move || {
                    let act = act.clone();
                    list.get()
                        .map(move |result| match result {
                            Err(e) => view! { <p class="applied-jobs__error">{e.to_string()}</p> }.into_any(),
                            Ok(items) if items.is_empty() => view! {
                                <p class="applied-jobs__empty">"Belum ada lamaran."</p>
                            }
                            .into_any(),
                            Ok(items) => view! {
                                <table class="applied-jobs__table">
                                    <thead>
                                        <tr>
                                            <th>"Posisi"</th>
                                            <th>"Status"</th>
                                            <th>"Dilamar"</th>
                                            <th>"Wawancara"</th>
                                            <th></th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {items.into_iter().map(|app| application_row(app, act.clone())).collect_view()}
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

fn application_row(app: Application, act: impl Fn(Response, i64) + Clone + Send + Sync + 'static) -> impl IntoView {
    let interview_text = interview_status_text(&app.interviews);
    let scheduled = latest_interview(&app.interviews).map(|iv| display_date_time(&iv.scheduled_at));
    let respondable = respondable_interview(&app.interviews).map(|iv| iv.id);
    let company = app.job.company.as_ref().map(|c| c.name.clone()).unwrap_or_default();
    let applied_on = app.created_at.as_deref().map_or_else(|| "-".to_owned(), display_date);
    let status = app.status;
    let app_id = app.id;
    let withdraw = act.clone();

    view! {
        <tr>
            <td>
                <div class="applied-jobs__title">{app.job.title}</div>
                <div class="applied-jobs__company">{company}</div>
            </td>
            <td>
                <span class=format!("status-badge status-badge--{}", status.code().to_lowercase())>
                    {application_status_label(status)}
                </span>
            </td>
            <td>{applied_on}</td>
            <td>
                <div>{interview_text}</div>
                {scheduled.map(|at| view! { <div class="applied-jobs__when">{at}</div> })}
                {respondable.map(|interview_id| {
                    let reschedule = act.clone();
                    view! {
                        <div class="applied-jobs__actions">
                            <button on:click=move |_| act(Response::Accept, interview_id)>"Terima"</button>
                            <button on:click=move |_| reschedule(Response::Reschedule, interview_id)>
                                "Minta Jadwal Ulang"
                            </button>
                        </div>
                    }
                })}
            </td>
            <td>
                <button class="applied-jobs__withdraw" on:click=move |_| withdraw(Response::Withdraw, app_id)>
                    "Batalkan"
                </button>
            </td>
        </tr>
    }
}
