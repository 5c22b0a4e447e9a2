use super::*;
use time::Month;

// =============================================================
// Helpers
// =============================================================

fn make_request() -> BookingRequest {
    BookingRequest {
        name: "Ada Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        phone: "5551234567".to_owned(),
        artist: None,
        service: ServiceKind::Blackgrey,
        date: Date::from_calendar_date(2026, Month::March, 7).unwrap(),
        description: "Small compass on the forearm".to_owned(),
    }
}

// =============================================================
// GalleryRecord
// =============================================================

#[test]
fn gallery_record_decodes_title() {
    let rec: GalleryRecord =
        serde_json::from_str(r#"{"id":3,"title":"Premium Tattoo Artwork 3","url":"/images/tattoo3.jpg"}"#).unwrap();
    assert_eq!(rec.id, 3);
    assert_eq!(rec.title, "Premium Tattoo Artwork 3");
    assert_eq!(rec.url, "/images/tattoo3.jpg");
}

#[test]
fn gallery_record_accepts_alt_alias_and_missing_title() {
    let rec: GalleryRecord = serde_json::from_str(r#"{"id":1,"alt":"Koi","url":"a.jpg"}"#).unwrap();
    assert_eq!(rec.title, "Koi");
    let rec: GalleryRecord = serde_json::from_str(r#"{"id":2,"url":"b.jpg"}"#).unwrap();
    assert_eq!(rec.title, "");
}

// =============================================================
// ServiceKind
// =============================================================

#[test]
fn service_kind_parses_every_wire_value() {
    for kind in ServiceKind::ALL {
        assert_eq!(ServiceKind::parse(kind.as_str()), Some(kind));
    }
}

#[test]
fn service_kind_rejects_unknown_and_empty() {
    assert_eq!(ServiceKind::parse(""), None);
    assert_eq!(ServiceKind::parse("watercolor"), None);
}

#[test]
fn service_kind_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&ServiceKind::Coverup).unwrap(), r#""coverup""#);
}

// =============================================================
// BookingRequest
// =============================================================

#[test]
fn booking_request_serializes_date_as_calendar_text() {
    let json = serde_json::to_value(make_request()).unwrap();
    assert_eq!(json["date"], "2026-03-07");
    assert_eq!(json["service"], "blackgrey");
    assert!(json.get("artist").is_none());
}

#[test]
fn booking_request_includes_artist_when_present() {
    let mut req = make_request();
    req.artist = Some("alex".to_owned());
    let json = serde_json::to_value(req).unwrap();
    assert_eq!(json["artist"], "alex");
}

#[test]
fn format_calendar_date_zero_pads() {
    let date = Date::from_calendar_date(2027, Month::January, 5).unwrap();
    assert_eq!(format_calendar_date(date), "2027-01-05");
}

// =============================================================
// ErrorBody
// =============================================================

#[test]
fn error_body_prefers_string_detail() {
    let body: ErrorBody = serde_json::from_str(r#"{"detail":"Chat service is unavailable."}"#).unwrap();
    assert_eq!(body.into_message().as_deref(), Some("Chat service is unavailable."));
}

#[test]
fn error_body_ignores_structured_detail() {
    let body: ErrorBody = serde_json::from_str(r#"{"detail":[{"loc":["body","message"]}]}"#).unwrap();
    assert_eq!(body.into_message(), None);
}

#[test]
fn error_body_falls_back_to_message() {
    let body: ErrorBody = serde_json::from_str(r#"{"message":"  Date unavailable  "}"#).unwrap();
    assert_eq!(body.into_message().as_deref(), Some("Date unavailable"));
}

#[test]
fn error_body_blank_message_is_none() {
    let body: ErrorBody = serde_json::from_str(r#"{"message":"   "}"#).unwrap();
    assert_eq!(body.into_message(), None);
}
