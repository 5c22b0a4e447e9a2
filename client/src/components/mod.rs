//! Reusable UI components shared by the pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each component owns its widget state in a local `RwSignal` backed by a
//! plain model from `crate::state`, so pages only compose them.

pub mod artist_card;
pub mod booking_form;
pub mod chat_widget;
pub mod footer;
pub mod gallery_grid;
pub mod lightbox;
pub mod navbar;
pub mod service_card;
