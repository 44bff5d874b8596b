//! Request a password-reset email.

use leptos::prelude::*;

use crate::app::use_client;
use crate::util::form::validate_email;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let client = use_client();
    let email = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get();
        if let Err(message) = validate_email(&email_value) {
            info.set(message.to_owned());
            return;
        }
        let Some(client) = client.get() else {
            return;
        };
        busy.set(true);

        leptos::task::spawn_local(async move {
            match client.request_password_reset(&email_value).await {
                Ok(()) => {
                    let _ = info.try_set("If that address has an account, a reset link is on its way.".to_owned());
                }
                Err(e) => {
                    let _ = info.try_set(e.user_message());
                }
            }
            let _ = busy.try_set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Reset password"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        autocomplete="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Send reset link"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-links"><a href="/login">"Back to sign in"</a></p>
            </div>
        </div>
    }
}
