//! Build-time client configuration.
//!
//! The studio API base URL is the only knob. It is baked in at compile time
//! from `INK_API_BASE_URL` so the hydrated bundle and the SSR render agree.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL used when `INK_API_BASE_URL` was not set at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

/// Maximum number of resubmissions for one booking or chat message.
pub const RETRY_BUDGET: u32 = 2;

/// Delay before an automatic booking resubmission.
pub const BOOKING_RETRY_DELAY_MS: u32 = 1500;

/// Studio API base URL without a trailing slash.
pub fn api_base_url() -> String {
    normalize_base_url(option_env!("INK_API_BASE_URL"))
}

fn normalize_base_url(raw: Option<&str>) -> String {
    let trimmed = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(DEFAULT_API_BASE_URL);
    trimmed.trim_end_matches('/').to_owned()
}
