//! Image grid with blur-up placeholders and a shared lightbox.

use leptos::prelude::*;

use crate::components::lightbox::Lightbox;
use crate::state::gallery::{GalleryItem, GalleryState};

/// Grid over `state.items`. Clicking a tile opens it in the lightbox; each
/// tile stays blurred until its image has decoded once.
#[component]
pub fn GalleryGrid(state: RwSignal<GalleryState>) -> impl IntoView {
    let on_close = Callback::new(move |()| state.update(GalleryState::close));
    // Memoized so tile load flags do not rebuild an open lightbox.
    let selected = Memo::new(move |_| state.with(|s| s.selected_item().cloned()));

    view! {
        <Show when=move || state.with(|s| s.advisory.is_some())>
            <p class="gallery__advisory" role="status">
                {move || state.with(|s| s.advisory.clone().unwrap_or_default())}
            </p>
        </Show>

        <Show
            when=move || !state.with(|s| s.loading)
            fallback=|| view! { <div class="gallery__loading" aria-busy="true">"Loading gallery…"</div> }
        >
            <div class="gallery-grid">
                <For
                    each=move || state.with(|s| s.items.clone())
                    key=|item| item.id
                    children=move |item| view! { <GalleryTile item state/> }
                />
            </div>
        </Show>

        {move || selected.get().map(|item| view! { <Lightbox item on_close/> })}
    }
}

#[component]
fn GalleryTile(item: GalleryItem, state: RwSignal<GalleryState>) -> impl IntoView {
    let id = item.id;
    let img_ref = NodeRef::<leptos::html::Img>::new();
    let loaded = move || state.with(|s| s.is_loaded(id));
    let mark_loaded = move || {
        if !state.with_untracked(|s| s.is_loaded(id)) {
            state.update(|s| {
                s.mark_loaded(id);
            });
        }
    };

    // Images cached before hydration never fire `load`.
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            if img_ref.get().is_some_and(|img| img.complete() && img.natural_width() > 0) {
                mark_loaded();
            }
        }
    });

    let tile_class = move || if loaded() { "gallery-tile gallery-tile--loaded" } else { "gallery-tile" };

    let GalleryItem { title, url, category, .. } = item;
    let label = format!("Open {title}");

    view! {
        <button class=tile_class aria-label=label on:click=move |_| {
            state.update(|s| {
                s.select(id);
            });
        }>
            <img
                class="gallery-tile__image"
                src=url
                alt=title.clone()
                loading="lazy"
                node_ref=img_ref
                on:load=move |_| mark_loaded()
            />
            <div class="gallery-tile__overlay">
                {category.map(|c| view! { <span class="gallery-tile__badge">{c}</span> })}
                <p class="gallery-tile__title">{title}</p>
            </div>
        </button>
    }
}
