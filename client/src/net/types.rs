//! Wire DTOs for the studio REST API.
//!
//! DESIGN
//! ======
//! These mirror the JSON the studio API speaks. Decoding is lenient where the
//! API has historically been loose (`alt` vs `title`, optional `success`), and
//! encoding is exact (`date` is always `YYYY-MM-DD`).

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize, Serializer};
use time::Date;

/// One record from `GET /view_full_gallery`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryRecord {
    pub id: i64,
    #[serde(default, alias = "alt")]
    pub title: String,
    pub url: String,
}

/// Tattoo services offered in the booking form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceKind {
    Custom,
    Coverup,
    Blackgrey,
    Color,
    Traditional,
    Art,
}

impl ServiceKind {
    pub const ALL: [Self; 6] = [Self::Custom, Self::Coverup, Self::Blackgrey, Self::Color, Self::Traditional, Self::Art];

    /// Wire value, also used as the `<option value>`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Custom => "custom",
            Self::Coverup => "coverup",
            Self::Blackgrey => "blackgrey",
            Self::Color => "color",
            Self::Traditional => "traditional",
            Self::Art => "art",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Custom => "Custom Tattoo",
            Self::Coverup => "Cover-Up",
            Self::Blackgrey => "Black & Grey",
            Self::Color => "Color Work",
            Self::Traditional => "Traditional",
            Self::Art => "Custom Art",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == raw.trim())
    }
}

/// Validated appointment request, as posted to `/submit_booking`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    pub service: ServiceKind,
    #[serde(serialize_with = "serialize_calendar_date")]
    pub date: Date,
    pub description: String,
}

/// Format a date as `YYYY-MM-DD`.
#[must_use]
pub fn format_calendar_date(date: Date) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), u8::from(date.month()), date.day())
}

fn serialize_calendar_date<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_calendar_date(*date))
}

/// Body of a `/submit_booking` response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct BookingResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Accepted booking, with the studio's confirmation text if it sent one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookingReceipt {
    pub message: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Error payload shapes the API uses on non-2xx responses.
///
/// `detail` is a string for handled errors and a list for request
/// validation errors; only the string form is a displayable message.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    #[must_use]
    pub fn into_message(self) -> Option<String> {
        let detail = match self.detail {
            Some(serde_json::Value::String(text)) => Some(text),
            _ => None,
        };
        detail
            .or(self.message)
            .map(|text| text.trim().to_owned())
            .filter(|text| !text.is_empty())
    }
}
