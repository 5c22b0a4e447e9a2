//! Modal viewer for one gallery image.

use leptos::prelude::*;

use crate::state::gallery::GalleryItem;

/// Enlarged view of `item`. Closes on backdrop click, the close button, or
/// Escape. The dialog takes focus when it opens so Escape reaches it.
#[component]
pub fn Lightbox(item: GalleryItem, on_close: Callback<()>) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = dialog_ref.get() {
                crate::util::dom::focus(&el);
            }
        }
    });

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    let GalleryItem { title, url, category, .. } = item;
    let label = title.clone();
    let caption = title.clone();

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div
                class="dialog lightbox"
                role="dialog"
                aria-modal="true"
                aria-label=label
                tabindex="-1"
                node_ref=dialog_ref
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <button class="lightbox__close" aria-label="Close" on:click=move |_| on_close.run(())>
                    "×"
                </button>
                <div class="lightbox__frame">
                    <img class="lightbox__image" src=url alt=title/>
                </div>
                <div class="lightbox__caption">
                    <p>{caption}</p>
                    {category.map(|c| view! { <p class="lightbox__category">"Category: " {c}</p> })}
                </div>
            </div>
        </div>
    }
}
