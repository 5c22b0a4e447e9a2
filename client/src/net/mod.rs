//! Networking modules for the studio REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the three remote calls (gallery listing, booking intake,
//! chat), `error` classifies their failures, and `types` defines the wire
//! schema shared by both.

pub mod api;
pub mod error;
pub mod types;
