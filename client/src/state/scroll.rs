//! Scroll-driven presentation: navbar style and hero parallax.
//!
//! Everything here is a pure function of the window scroll offset (and
//! height), so components just recompute on each scroll event.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Scroll offset past which the navbar switches to its solid style.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// Navbar chrome state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavbarState {
    pub scrolled: bool,
    pub menu_open: bool,
}

impl NavbarState {
    /// Returns `true` when the scrolled style flipped.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        let scrolled = scroll_y > SCROLL_THRESHOLD;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Choosing a link closes the mobile menu.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}

/// Hero transforms for one scroll offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroParallax {
    pub background_offset: f64,
    pub background_scale: f64,
    pub background_blur_px: f64,
    pub background_brightness: f64,
    pub logo_scale: f64,
    pub logo_opacity: f64,
}

impl HeroParallax {
    /// Compute the hero transforms. `window_height` of `None` (or non-positive)
    /// leaves the logo at full size and opacity.
    #[must_use]
    pub fn at(scroll_y: f64, window_height: Option<f64>) -> Self {
        let s = scroll_y.max(0.0);
        let (logo_scale, logo_opacity) = match window_height.filter(|h| *h > 0.0) {
            Some(h) => ((1.0 - 0.5 * s / h).max(0.9), (1.0 - 2.0 * s / h).max(0.0)),
            None => (1.0, 1.0),
        };
        Self {
            background_offset: 0.3 * s,
            background_scale: 1.0 + 0.0002 * s,
            background_blur_px: 0.01 * s,
            background_brightness: 1.0 - 0.0005 * s,
            logo_scale,
            logo_opacity,
        }
    }

    /// Inline style for the hero background layer.
    #[must_use]
    pub fn background_style(&self) -> String {
        format!(
            "transform: translateY({:.1}px) scale({:.4}); filter: blur({:.2}px) brightness({:.4});",
            self.background_offset, self.background_scale, self.background_blur_px, self.background_brightness,
        )
    }

    /// Inline style for the hero logo.
    #[must_use]
    pub fn logo_style(&self) -> String {
        format!("transform: scale({:.4}); opacity: {:.4};", self.logo_scale, self.logo_opacity)
    }
}
