//! Wrapper enforcing session and role requirements before a page renders.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route renders its page inside `AuthGuard`. The guard reads
//! the mirrored `RwSignal<SessionState>` and applies
//! [`crate::util::guard::decide`] whenever the session or the path changes.
//!
//! DESIGN
//! ======
//! Redirects replace the current history entry so "back" does not return to
//! a page the visitor may not see. Nothing of the wrapped page is mounted
//! until the decision is `Render`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::loading::Loading;
use crate::state::session::SessionState;
use crate::util::guard::{GuardDecision, GuardOptions, decide};

#[component]
pub fn AuthGuard(options: GuardOptions, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let location = use_location();
    let navigate = use_navigate();
    let options = StoredValue::new(options);

    let pathname = location.pathname;
    let decision = Memo::new(move |_| {
        let state = session.get();
        let path = pathname.get();
        options.with_value(|opts| decide(&state, opts, &path))
    });

    Effect::new(move || {
        if let GuardDecision::Redirect(target) = decision.get() {
            log::warn!("access to {} denied; redirecting to {target}", pathname.get_untracked());
            navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    move || match decision.get() {
        GuardDecision::Pending => view! { <Loading/> }.into_any(),
        GuardDecision::Render => children().into_any(),
        GuardDecision::Redirect(_) => ().into_any(),
    }
}
