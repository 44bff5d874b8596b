//! Account registration.

use leptos::prelude::*;

use crate::app::use_client;
use crate::net::types::RegistrationForm;
use crate::util::form::validate_registration;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let client = use_client();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirmed = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let done = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let form = RegistrationForm {
            email: email.get().trim().to_owned(),
            password: password.get(),
            confirmed_password: confirmed.get(),
        };
        if let Err(message) = validate_registration(&form.email, &form.password, &form.confirmed_password) {
            info.set(message.to_owned());
            return;
        }
        let Some(client) = client.get() else {
            return;
        };
        busy.set(true);
        info.set(String::new());

        leptos::task::spawn_local(async move {
            match client.register(&form).await {
                Ok(()) => {
                    let _ = done.try_set(true);
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
                <h1>"Create account"</h1>
                <Show
                    when=move || !done.get()
                    fallback=|| view! {
                        <p class="auth-message">"Account created. Check your inbox to activate it, then sign in."</p>
                        <a class="auth-button" href="/login">"Go to sign in"</a>
                    }
                >
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
                            autocomplete="new-password"
                            placeholder="Password (8+ characters)"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <input
                            class="auth-input"
                            type="password"
                            autocomplete="new-password"
                            placeholder="Confirm password"
                            prop:value=move || confirmed.get()
                            on:input=move |ev| confirmed.set(event_target_value(&ev))
                        />
                        <button class="auth-button" type="submit" disabled=move || busy.get()>
                            "Create account"
                        </button>
                    </form>
                </Show>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message auth-message--error">{move || info.get()}</p>
                </Show>
                <p class="auth-links"><a href="/login">"Already have an account? Sign in"</a></p>
            </div>
        </div>
    }
}
