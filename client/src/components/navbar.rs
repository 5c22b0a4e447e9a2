//! Fixed site header with section links and a mobile menu.

use leptos::prelude::*;

use crate::content::{SECTIONS, STUDIO_NAME};
use crate::state::scroll::NavbarState;
use crate::util::dom::track_scroll;

#[component]
pub fn Navbar() -> impl IntoView {
    let nav = RwSignal::new(NavbarState::default());

    track_scroll(move |y| nav.maybe_update(|n| n.on_scroll(y)));

    let header_class = move || {
        if nav.with(|n| n.scrolled) { "navbar navbar--scrolled" } else { "navbar" }
    };
    let menu_open = move || nav.with(|n| n.menu_open);
    let close_menu = move |_| nav.update(NavbarState::close_menu);

    view! {
        <header class=header_class>
            <div class="navbar__inner">
                <a href="/" class="navbar__brand" aria-label=STUDIO_NAME>
                    <img src="/images/logo.png" alt=STUDIO_NAME width="50"/>
                </a>

                <nav class="navbar__links" aria-label="Sections">
                    {SECTIONS
                        .iter()
                        .map(|(label, anchor)| view! { <a class="navbar__link" href=format!("/{anchor}")>{*label}</a> })
                        .collect_view()}
                </nav>

                <button
                    class="navbar__toggle"
                    aria-label=move || if menu_open() { "Close menu" } else { "Open menu" }
                    aria-expanded=move || menu_open().to_string()
                    on:click=move |_| nav.update(NavbarState::toggle_menu)
                >
                    {move || if menu_open() { "✕" } else { "☰" }}
                </button>
            </div>

            <Show when=menu_open>
                <nav class="navbar__mobile" aria-label="Sections">
                    {SECTIONS
                        .iter()
                        .map(|(label, anchor)| {
                            view! {
                                <a class="navbar__mobile-link" href=format!("/{anchor}") on:click=close_menu>
                                    {*label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
            </Show>
        </header>
    }
}
