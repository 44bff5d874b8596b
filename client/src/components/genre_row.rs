//! One horizontal row of cards sharing a genre.

use leptos::prelude::*;

use crate::components::video_card::VideoCard;
use crate::state::catalog::GenreGroup;

#[component]
pub fn GenreRow(group: GenreGroup, selected: Option<u64>, on_select: Callback<u64>) -> impl IntoView {
    let heading = if group.genre.is_empty() { "Other".to_owned() } else { group.genre };

    view! {
        <section class="genre-row">
            <h2 class="genre-row__title">{heading}</h2>
            <div class="genre-row__cards">
                {group
                    .entries
                    .into_iter()
                    .map(|entry| {
                        let active = selected == Some(entry.video.id);
                        view! { <VideoCard entry active on_select/> }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
