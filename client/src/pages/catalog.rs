//! Catalog page: genre rows plus an inline preview on wide screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected landing route. Loads `GET /video/` once through the
//! refresh-aware client. Selecting a card swaps the preview on wide
//! viewports and opens the watch page on narrow ones.
//!
//! DESIGN
//! ======
//! Crossing below the preview breakpoint releases the preview's playback
//! session before the element is hidden, so `hls.js` never keeps loading
//! segments into a detached `<video>`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::genre_row::GenreRow;
use crate::components::video_player::{PlayerSlot, VideoPlayer, VideoPlayerProps};
use crate::config::ClientConfig;
use crate::state::catalog::CatalogState;
use crate::util::breakpoint::PreviewController;
use crate::util::stream_url::{Resolution, build_stream_url};

#[component]
pub fn CatalogPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let catalog = RwSignal::new(CatalogState { loading: true, ..CatalogState::default() });
    let preview_visible = RwSignal::new(false);
    let preview = StoredValue::new(PreviewController::default());
    let slot = PlayerSlot::new();

    #[cfg(feature = "hydrate")]
    {
        use crate::util::breakpoint::{PreviewTransition, ViewportWatch, viewport_is_wide};

        let apply_viewport = move |wide: bool| {
            let transition = preview.try_update_value(|p| p.on_viewport(wide)).flatten();
            match transition {
                Some(PreviewTransition::Hide) => {
                    slot.release();
                    preview_visible.set(false);
                }
                Some(PreviewTransition::Show) => preview_visible.set(true),
                None => {}
            }
        };

        let min_width = config.preview_min_width_px;
        let watch = StoredValue::new_local(None::<ViewportWatch>);
        Effect::new(move || {
            apply_viewport(viewport_is_wide(min_width));
            watch.set_value(ViewportWatch::min_width(min_width, apply_viewport));
        });
        on_cleanup(move || {
            let _ = watch.try_update_value(Option::take);
        });

        if let Some(client) = crate::app::use_client().get() {
            leptos::task::spawn_local(async move {
                match client.list_videos().await {
                    Ok(entries) => {
                        let _ = catalog.try_update(|s| s.load(entries));
                    }
                    Err(e) => {
                        log::warn!("catalog load failed: {e}");
                        let _ = catalog.try_update(|s| s.fail(e.user_message()));
                    }
                }
            });
        }
    }

    let media_host = config.media_host.clone();
    let preview_src = Signal::derive(move || {
        catalog.with(|s| {
            s.selected_entry()
                .map(|e| build_stream_url(&media_host, e.video.id, Resolution::default()))
                .unwrap_or_default()
        })
    });

    let navigate = use_navigate();
    let on_select = Callback::new(move |id: u64| {
        if preview.get_value().is_wide() {
            catalog.update(|s| s.select(id));
            return;
        }
        let slug = catalog.with_untracked(|s| {
            s.entries.iter().find(|e| e.video.id == id).map(|e| e.video.slug.clone())
        });
        if let Some(slug) = slug {
            navigate(&format!("/watch/{slug}"), NavigateOptions::default());
        }
    });

    view! {
        <div class="catalog-page">
            <Show when=move || preview_visible.get()>
                <section class="catalog-preview">
                    // `slot` is a reserved attribute in `view!`, so the props are built directly.
                    {VideoPlayer(
                        VideoPlayerProps::builder()
                            .src(preview_src)
                            .slot(slot)
                            .muted(true)
                            .autoplay(true)
                            .class("catalog-preview__player")
                            .build(),
                    )}
                    {move || {
                        catalog.with(|s| {
                            s.selected_entry().map(|e| {
                                let href = format!("/watch/{}", e.video.slug);
                                view! {
                                    <div class="catalog-preview__info">
                                        <h1>{e.video.title.clone()}</h1>
                                        <p>{e.video.description.clone()}</p>
                                        <a class="catalog-preview__play" href=href>"Play"</a>
                                    </div>
                                }
                            })
                        })
                    }}
                </section>
            </Show>
            <Show when=move || catalog.get().loading>
                <p class="catalog-page__status">"Loading videos..."</p>
            </Show>
            {move || catalog.get().error.map(|message| view! { <p class="catalog-page__status catalog-page__status--error">{message}</p> })}
            {move || {
                let state = catalog.get();
                let selected = state.selected;
                state
                    .groups()
                    .into_iter()
                    .map(|group| view! { <GenreRow group selected on_select/> })
                    .collect_view()
            }}
        </div>
    }
}
