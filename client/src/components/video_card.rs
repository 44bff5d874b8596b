//! Thumbnail card for one catalog entry.

use leptos::prelude::*;

use crate::state::catalog::CatalogEntry;

#[component]
pub fn VideoCard(
    entry: CatalogEntry,
    #[prop(optional)] active: bool,
    on_select: Callback<u64>,
) -> impl IntoView {
    let id = entry.video.id;
    let title = entry.video.title.clone();
    let has_thumbnail = !entry.thumbnail.is_empty();

    view! {
        <button
            class="video-card"
            class:video-card--active=active
            title=title.clone()
            on:click=move |_| on_select.run(id)
        >
            <Show
                when=move || has_thumbnail
                fallback=|| view! { <span class="video-card__placeholder" aria-hidden="true"></span> }
            >
                <img class="video-card__thumb" src=entry.thumbnail.clone() alt="" loading="lazy"/>
            </Show>
            <span class="video-card__title">{title.clone()}</span>
        </button>
    }
}
