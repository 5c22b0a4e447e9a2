//! REST API helpers for communicating with the studio API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning a network error, since these endpoints
//! are only called from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Response interpretation (status
//! check, error-body sniffing, schema decode) lives in pure `decode_*`
//! helpers so the classification rules are testable without a browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{BookingReceipt, BookingRequest, GalleryRecord};
#[cfg(any(test, feature = "hydrate"))]
use super::types::{BookingResponse, ChatResponse, ErrorBody};

#[cfg(any(test, feature = "hydrate"))]
fn gallery_endpoint(base: &str) -> String {
    format!("{base}/view_full_gallery")
}

#[cfg(any(test, feature = "hydrate"))]
fn booking_endpoint(base: &str) -> String {
    format!("{base}/submit_booking")
}

#[cfg(any(test, feature = "hydrate"))]
fn chat_endpoint(base: &str) -> String {
    format!("{base}/chat")
}

#[cfg(any(test, feature = "hydrate"))]
fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Turn a non-2xx response into an error, keeping any explicit message.
#[cfg(any(test, feature = "hydrate"))]
fn failure_from_status(status: u16, body: &str) -> ApiError {
    match serde_json::from_str::<ErrorBody>(body).ok().and_then(ErrorBody::into_message) {
        Some(message) => ApiError::Rejected { status: Some(status), message },
        None => ApiError::Status { status },
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn decode_gallery(status: u16, body: &str) -> Result<Vec<GalleryRecord>, ApiError> {
    if !is_success(status) {
        return Err(failure_from_status(status, body));
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// A 2xx with an empty body is accepted without a message. Anything else
/// must parse as a booking response and not say `success: false`.
#[cfg(any(test, feature = "hydrate"))]
fn decode_booking(status: u16, body: &str) -> Result<BookingReceipt, ApiError> {
    if !is_success(status) {
        return Err(failure_from_status(status, body));
    }
    if body.trim().is_empty() {
        return Ok(BookingReceipt::default());
    }
    let parsed: BookingResponse = serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    if parsed.success == Some(false) {
        let message = parsed
            .message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| "The studio could not accept this booking.".to_owned());
        return Err(ApiError::Rejected { status: Some(status), message });
    }
    Ok(BookingReceipt { message: parsed.message })
}

#[cfg(any(test, feature = "hydrate"))]
fn decode_chat(status: u16, body: &str) -> Result<String, ApiError> {
    if !is_success(status) {
        return Err(failure_from_status(status, body));
    }
    let parsed: ChatResponse = serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(parsed.response)
}

#[cfg(feature = "hydrate")]
async fn read_body(resp: gloo_net::http::Response) -> Result<(u16, String), ApiError> {
    let status = resp.status();
    let body = resp.text().await?;
    Ok((status, body))
}

/// Fetch the full tattoo gallery listing via `GET /view_full_gallery`.
///
/// # Errors
///
/// Returns an error if the request fails, the server responds with a non-OK
/// status, or the body is not a JSON array of gallery records.
pub async fn fetch_full_gallery() -> Result<Vec<GalleryRecord>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = gallery_endpoint(&crate::config::api_base_url());
        let resp = gloo_net::http::Request::get(&url).send().await?;
        let (status, body) = read_body(resp).await?;
        decode_gallery(status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Submit a validated booking via `POST /submit_booking`.
///
/// # Errors
///
/// Returns an error if the request fails, the server responds with a non-OK
/// status, returns a body that is not a booking response, or reports
/// `success: false`.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub async fn submit_booking(request: &BookingRequest) -> Result<BookingReceipt, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = booking_endpoint(&crate::config::api_base_url());
        let resp = gloo_net::http::Request::post(&url).json(request)?.send().await?;
        let (status, body) = read_body(resp).await?;
        decode_booking(status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Send one visitor message to the chat assistant via `POST /chat`.
///
/// # Errors
///
/// Returns an error if the request fails, the server responds with a non-OK
/// status, or the body lacks a `response` string.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub async fn send_chat_message(message: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = chat_endpoint(&crate::config::api_base_url());
        let payload = super::types::ChatRequest { message };
        let resp = gloo_net::http::Request::post(&url).json(&payload)?.send().await?;
        let (status, body) = read_body(resp).await?;
        decode_chat(status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Network("not available on server".to_owned()))
    }
}
