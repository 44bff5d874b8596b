//! Top bar with brand link, account link and the sign-in / sign-out action.
//!
//! Signing out on a protected page leaves the redirect to the route guard.

use leptos::prelude::*;

use crate::app::use_client;
use crate::state::session::SessionState;
use crate::util::auth::LOGIN_ROUTE;

#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let client = use_client();
    let busy = RwSignal::new(false);

    let on_logout = move |_| {
        if busy.get() {
            return;
        }
        let Some(client) = client.get() else {
            return;
        };
        busy.set(true);
        leptos::task::spawn_local(async move {
            client.logout().await;
            let _ = busy.try_set(false);
        });
    };

    view! {
        <header class="app-header">
            <a class="app-header__brand" href="/">"Streamhall"</a>
            <nav class="app-header__actions">
                <Show
                    when=move || session.get().logged_in
                    fallback=|| view! { <a class="app-header__link" href=LOGIN_ROUTE>"Sign in"</a> }
                >
                    <a class="app-header__link" href="/account/password">"Account"</a>
                    <button class="app-header__button" disabled=move || busy.get() on:click=on_logout>
                        "Sign out"
                    </button>
                </Show>
            </nav>
        </header>
    }
}
