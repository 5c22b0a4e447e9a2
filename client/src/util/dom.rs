//! Window geometry reads. Requires a browser environment; SSR renders as if
//! the page were at the top with an unknown viewport.

/// Current vertical scroll offset in CSS pixels.
pub fn scroll_y() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Inner window height, when the browser reports one.
pub fn window_height() -> Option<f64> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.inner_height().ok())
            .and_then(|v| v.as_f64())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Move keyboard focus to `el`, logging if the browser refuses.
#[cfg(feature = "hydrate")]
pub fn focus(el: &web_sys::HtmlElement) {
    if let Err(e) = el.focus() {
        leptos::logging::warn!("focus failed: {e:?}");
    }
}

/// Call `f` with the scroll offset once after mount and on every window
/// scroll until the calling component is disposed.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn track_scroll(f: impl Fn(f64) + Clone + 'static) {
    #[cfg(feature = "hydrate")]
    {
        use leptos::prelude::{Effect, on_cleanup, window_event_listener};

        let initial = f.clone();
        Effect::new(move || initial(scroll_y()));
        let handle = window_event_listener(leptos::ev::scroll, move |_| f(scroll_y()));
        on_cleanup(move || handle.remove());
    }
}
