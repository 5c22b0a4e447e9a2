//! Gallery viewer state: item list, lightbox selection, and lazy-load flags.
//!
//! DESIGN
//! ======
//! Each `load` bumps a generation counter and hands back a [`LoadTicket`]
//! when a fetch is needed. `finish_load` applies a result only if its ticket
//! is still current, so a slow tattoo listing can never overwrite the studio
//! view the visitor switched to in the meantime. Every completed load leaves
//! a non-empty item list: remote data when usable, the fallback list
//! otherwise.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use std::collections::HashSet;

use crate::net::error::ApiError;
use crate::net::types::GalleryRecord;

/// Path prefix for site-served images.
pub const IMAGE_BASE_PATH: &str = "/images/";

/// Advisory shown when the listing could not be used.
pub const FALLBACK_ADVISORY: &str = "Failed to load gallery. Using sample images instead.";

/// Number of sample tattoos shown when the listing is unavailable.
pub const FALLBACK_TATTOO_COUNT: i64 = 14;

/// One image in a gallery grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryItem {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub category: Option<String>,
}

impl GalleryItem {
    fn new(id: i64, title: impl Into<String>, url: impl Into<String>) -> Self {
        Self { id, title: title.into(), url: url.into(), category: None }
    }

    fn from_record(record: GalleryRecord) -> Self {
        let url = normalize_image_url(&record.url);
        Self::new(record.id, record.title, url)
    }
}

/// Which collection the full gallery page shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// Remote tattoo portfolio (falls back to samples).
    #[default]
    Tattoos,
    /// Fixed studio-tour photos; never hits the network.
    Studio,
}

impl ViewMode {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Tattoos => "Tattoo Gallery",
            Self::Studio => "Studio Tour",
        }
    }

    #[must_use]
    pub fn blurb(self) -> &'static str {
        match self {
            Self::Tattoos => {
                "Browse our collection of custom tattoos and illustrations created by our talented artists"
            }
            Self::Studio => "Take a virtual tour of our professional studio facilities",
        }
    }
}

/// Keep absolute URLs; reduce anything else to its filename under `/images/`.
#[must_use]
pub fn normalize_image_url(url: &str) -> String {
    let url = url.trim();
    if url.starts_with("http://") || url.starts_with("https://") {
        return url.to_owned();
    }
    let filename = url.rsplit('/').next().unwrap_or(url);
    format!("{IMAGE_BASE_PATH}{filename}")
}

/// Sample tattoos used when the remote listing is empty or unreachable.
#[must_use]
pub fn fallback_tattoos() -> Vec<GalleryItem> {
    (1..=FALLBACK_TATTOO_COUNT)
        .map(|n| GalleryItem::new(n, format!("Tattoo artwork {n}"), format!("{IMAGE_BASE_PATH}tattoo{n}.jpg")))
        .collect()
}

/// Studio-tour photos.
#[must_use]
pub fn studio_images() -> Vec<GalleryItem> {
    vec![
        GalleryItem::new(101, "Studio", "/images/studio.jpg"),
        GalleryItem::new(102, "Studio front entrance", "/images/studio_entrance.jpg"),
        GalleryItem::new(103, "Artist workstation", "/images/workstation.jpg"),
    ]
}

/// The six featured pieces shown on the home page.
#[must_use]
pub fn featured_work() -> Vec<GalleryItem> {
    [
        (1, "Black and grey realistic portrait tattoo", "Black & Grey"),
        (2, "Colorful neo-traditional tattoo", "Color"),
        (3, "Japanese style sleeve tattoo", "Japanese"),
        (4, "Minimalist line work tattoo", "Minimalist"),
        (5, "Traditional American style tattoo", "Traditional"),
        (6, "Abstract geometric tattoo design", "Geometric"),
    ]
    .into_iter()
    .map(|(id, title, category)| GalleryItem {
        category: Some(category.to_owned()),
        ..GalleryItem::new(id, title, format!("{IMAGE_BASE_PATH}tattoo{id}.jpg"))
    })
    .collect()
}

/// Proof that a listing fetch was issued for a particular load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    mode: ViewMode,
}

impl LoadTicket {
    #[must_use]
    pub fn mode(self) -> ViewMode {
        self.mode
    }
}

/// What the caller must do after [`GalleryState::load`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadPlan {
    /// Fetch the listing, then pass the outcome to `finish_load`.
    Fetch(LoadTicket),
    /// Items are already in place.
    Ready,
}

/// State behind one gallery grid + lightbox.
#[derive(Clone, Debug, Default)]
pub struct GalleryState {
    pub mode: ViewMode,
    pub items: Vec<GalleryItem>,
    pub loading: bool,
    /// Non-fatal notice shown above the grid (fallback in use).
    pub advisory: Option<String>,
    /// Id of the item open in the lightbox.
    pub selected: Option<i64>,
    loaded: HashSet<i64>,
    generation: u64,
}

impl GalleryState {
    /// A grid over a fixed item list (no remote listing).
    #[must_use]
    pub fn with_items(items: Vec<GalleryItem>) -> Self {
        Self { items, ..Self::default() }
    }

    /// An empty grid waiting for its first `load`.
    #[must_use]
    pub fn pending() -> Self {
        Self { loading: true, ..Self::default() }
    }

    /// Switch to `mode`, discarding the current items, selection, and loaded
    /// flags. Any fetch still outstanding becomes stale.
    pub fn load(&mut self, mode: ViewMode) -> LoadPlan {
        self.generation += 1;
        self.mode = mode;
        self.selected = None;
        self.loaded.clear();
        self.advisory = None;

        match mode {
            ViewMode::Studio => {
                self.items = studio_images();
                self.loading = false;
                LoadPlan::Ready
            }
            ViewMode::Tattoos => {
                self.items.clear();
                self.loading = true;
                LoadPlan::Fetch(LoadTicket { generation: self.generation, mode })
            }
        }
    }

    /// Apply a listing outcome. Returns `false` when the ticket is stale and
    /// the outcome was ignored.
    pub fn finish_load(&mut self, ticket: LoadTicket, outcome: Result<Vec<GalleryRecord>, ApiError>) -> bool {
        if ticket.generation != self.generation || ticket.mode != self.mode {
            return false;
        }

        let items = outcome.map(dedupe_records).unwrap_or_default();
        if items.is_empty() {
            self.items = fallback_tattoos();
            self.advisory = Some(FALLBACK_ADVISORY.to_owned());
        } else {
            self.items = items;
            self.advisory = None;
        }
        self.loading = false;
        true
    }

    /// Open `id` in the lightbox. Unknown ids leave the selection unchanged.
    pub fn select(&mut self, id: i64) -> bool {
        if self.items.iter().any(|item| item.id == id) {
            self.selected = Some(id);
            true
        } else {
            false
        }
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    /// The item open in the lightbox, if it is in the current list.
    #[must_use]
    pub fn selected_item(&self) -> Option<&GalleryItem> {
        let id = self.selected?;
        self.items.iter().find(|item| item.id == id)
    }

    /// Record that `id` finished decoding. Returns `true` on the first call
    /// only; flags never revert.
    pub fn mark_loaded(&mut self, id: i64) -> bool {
        self.loaded.insert(id)
    }

    #[must_use]
    pub fn is_loaded(&self, id: i64) -> bool {
        self.loaded.contains(&id)
    }
}

fn dedupe_records(records: Vec<GalleryRecord>) -> Vec<GalleryItem> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|record| seen.insert(record.id))
        .map(GalleryItem::from_record)
        .collect()
}
