//! Signed-in password change at `/account/password`.
//!
//! An expired access token is renewed and the request replayed by
//! `ApiClient::send`; a session that cannot be renewed signs out and the
//! route guard takes over.

use leptos::prelude::*;

use crate::app::use_client;
use crate::net::types::NewPasswordForm;
use crate::util::form::validate_new_password;

#[component]
pub fn ChangePasswordPage() -> impl IntoView {
    let client = use_client();
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
        let form = NewPasswordForm { new_password: password.get(), confirm_password: confirmed.get() };
        if let Err(message) = validate_new_password(&form.new_password, &form.confirm_password) {
            info.set(message.to_owned());
            return;
        }
        let Some(client) = client.get() else {
            return;
        };
        busy.set(true);
        info.set(String::new());

        leptos::task::spawn_local(async move {
            match client.set_password(&form).await {
                Ok(()) => {
                    let _ = done.try_set(true);
                    let _ = password.try_set(String::new());
                    let _ = confirmed.try_set(String::new());
                }
                Err(e) => {
                    log::warn!("password change failed: {e}");
                    let _ = info.try_set(e.user_message());
                }
            }
            let _ = busy.try_set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Change password"</h1>
                <Show
                    when=move || !done.get()
                    fallback=|| view! {
                        <p class="auth-message">"Your password has been changed."</p>
                        <a class="auth-button" href="/videos">"Back to videos"</a>
                    }
                >
                    <form class="auth-form" on:submit=on_submit>
                        <input
                            class="auth-input"
                            type="password"
                            autocomplete="new-password"
                            placeholder="New password (8+ characters)"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <input
                            class="auth-input"
                            type="password"
                            autocomplete="new-password"
                            placeholder="Confirm new password"
                            prop:value=move || confirmed.get()
                            on:input=move |ev| confirmed.set(event_target_value(&ev))
                        />
                        <button class="auth-button" type="submit" disabled=move || busy.get()>
                            "Update password"
                        </button>
                    </form>
                </Show>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message auth-message--error">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
