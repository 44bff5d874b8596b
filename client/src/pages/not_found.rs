use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Not found"</h1>
            <p>"That page or video does not exist."</p>
            <a class="auth-button" href="/videos">"Back to videos"</a>
        </div>
    }
}
