//! Per-component state models.
//!
//! DESIGN
//! ======
//! Each widget owns one plain struct (wrapped in an `RwSignal` by its
//! component) so the behavior can be unit-tested without a browser.

pub mod booking;
pub mod chat;
pub mod gallery;
pub mod scroll;
