//! Email + password sign-in.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::use_client;
use crate::net::types::Credentials;
use crate::state::session::SessionState;
use crate::util::form::validate_login_input;

const AFTER_LOGIN_ROUTE: &str = "/videos";

#[component]
pub fn LoginPage() -> impl IntoView {
    let client = use_client();
    let session = expect_context::<RwSignal<SessionState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Signed in already, or just now: move on to the catalog.
    let navigate = use_navigate();
    Effect::new(move || {
        if session.get().logged_in {
            navigate(AFTER_LOGIN_ROUTE, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = Credentials { email: email.get().trim().to_owned(), password: password.get() };
        if let Err(message) = validate_login_input(&credentials.email, &credentials.password) {
            info.set(message.to_owned());
            return;
        }
        let Some(client) = client.get() else {
            return;
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        leptos::task::spawn_local(async move {
            match client.login(&credentials).await {
                Ok(()) => {
                    let _ = info.try_set(String::new());
                }
                Err(e) => {
                    log::info!("login rejected: {e}");
                    let _ = info.try_set(e.user_message());
                }
            }
            let _ = busy.try_set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign in"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        autocomplete="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-links">
                    <a href="/forgot-password">"Forgot password?"</a>
                    " · "
                    <a href="/register">"Create an account"</a>
                </p>
            </div>
        </div>
    }
}
