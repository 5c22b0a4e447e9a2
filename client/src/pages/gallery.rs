//! Full gallery page with a tattoo / studio-tour toggle.

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::gallery_grid::GalleryGrid;
use crate::components::navbar::Navbar;
use crate::state::gallery::{GalleryState, LoadPlan, LoadTicket, ViewMode};

#[component]
pub fn GalleryPage() -> impl IntoView {
    let state = RwSignal::new(GalleryState::pending());

    let switch_to = move |mode: ViewMode| {
        if let Some(LoadPlan::Fetch(ticket)) = state.try_update(|s| s.load(mode)) {
            fetch_listing(state, ticket);
        }
    };

    // Initial load runs in the browser only; SSR renders the loading state.
    Effect::new(move || switch_to(ViewMode::Tattoos));

    let mode = move || state.with(|s| s.mode);
    let toggle_class = move |target: ViewMode| {
        move || if mode() == target { "btn btn--primary" } else { "btn btn--ghost" }
    };

    view! {
        <Navbar/>
        <main class="gallery-page">
            <section class="gallery-page__header">
                <a class="btn btn--ghost" href="/">"‹ Back Home"</a>
                <h1>{move || mode().label()}</h1>
                <p>{move || mode().blurb()}</p>
            </section>

            <nav class="gallery-page__modes" aria-label="Gallery view">
                {[ViewMode::Tattoos, ViewMode::Studio]
                    .into_iter()
                    .map(|target| {
                        view! {
                            <button
                                class=toggle_class(target)
                                aria-pressed=move || (mode() == target).to_string()
                                on:click=move |_| {
                                    if mode() != target {
                                        switch_to(target);
                                    }
                                }
                            >
                                {target.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>

            <section class="gallery-page__grid">
                <GalleryGrid state/>
            </section>
        </main>
        <Footer/>
    }
}

fn fetch_listing(state: RwSignal<GalleryState>, ticket: LoadTicket) {
    leptos::task::spawn_local(async move {
        let outcome = crate::net::api::fetch_full_gallery().await;
        if let Err(e) = &outcome {
            leptos::logging::warn!("gallery listing unavailable, using samples: {e}");
        }
        if state.try_update(|s| s.finish_load(ticket, outcome)) != Some(true) {
            leptos::logging::log!("dropped stale {:?} listing", ticket.mode());
        }
    });
}
