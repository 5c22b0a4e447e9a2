//! Failure taxonomy for studio API calls.
//!
//! DESIGN
//! ======
//! Retry decisions key off [`FailureKind`], never off error text. Transport
//! failures, bare non-2xx statuses, and malformed bodies are transient; a
//! failure that carries an explicit server message is an application failure
//! and is shown to the visitor verbatim.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// How a failed call should be treated by retrying callers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureKind {
    /// Connection-level or unexpected-response failure; safe to resubmit.
    Transient,
    /// The server understood the request and refused it with a reason.
    Application,
}

/// Errors produced by the studio API client.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response (offline, refused, CORS).
    #[error("network error: {0}")]
    Network(String),

    /// Non-2xx response without a usable failure message.
    #[error("server responded with status {status}")]
    Status { status: u16 },

    /// The server reported an explicit failure message.
    #[error("{message}")]
    Rejected { status: Option<u16>, message: String },

    /// A 2xx response whose body did not match the expected schema.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Retry classification for this failure.
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Rejected { .. } => FailureKind::Application,
            Self::Network(_) | Self::Status { .. } | Self::Decode(_) => FailureKind::Transient,
        }
    }

    #[must_use]
    pub fn is_transient(&self) -> bool {
        self.kind() == FailureKind::Transient
    }

    /// Server-supplied message, when the failure carries one.
    #[must_use]
    pub fn explicit_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message, .. } => Some(message),
            _ => None,
        }
    }
}

#[cfg(feature = "hydrate")]
impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => Self::Decode(e.to_string()),
            other => Self::Network(other.to_string()),
        }
    }
}
