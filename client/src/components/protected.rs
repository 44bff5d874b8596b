//! Route wrapper that renders its children only for a signed-in user.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[cfg(feature = "hydrate")]
use crate::app::use_client;
use crate::state::session::SessionState;
#[cfg(feature = "hydrate")]
use crate::util::auth::evaluate_guard;
use crate::util::auth::{GuardDecision, install_unauth_redirect};

/// Waits for the startup session check, then shows `children` or redirects
/// to `/login`. A later sign-out (including a failed token refresh) also
/// redirects.
#[component]
pub fn Protected(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let decision = RwSignal::new(None::<GuardDecision>);
    install_unauth_redirect(session, use_navigate());

    #[cfg(feature = "hydrate")]
    {
        if let Some(client) = use_client().get() {
            leptos::task::spawn_local(async move {
                let outcome = evaluate_guard(client.session()).await;
                let _ = decision.try_set(Some(outcome));
            });
        }
    }

    view! {
        <Show
            when=move || decision.get() == Some(GuardDecision::Allow) && session.get().logged_in
            fallback=|| view! { <p class="session-pending">"Checking your session…"</p> }
        >
            {children()}
        </Show>
    }
}
