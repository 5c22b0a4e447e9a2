//! Calendar-date helpers for the booking form.
//!
//! `<input type="date">` yields `YYYY-MM-DD`; the studio API expects the same
//! text back. "Today" is the visitor's local date in the browser and the
//! server's UTC date during SSR.

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

use time::macros::format_description;
use time::{Date, Weekday};

/// Weekdays the studio does not take appointments.
pub const CLOSED_WEEKDAYS: [Weekday; 2] = [Weekday::Sunday, Weekday::Monday];

/// Parse a `YYYY-MM-DD` value from a date input.
#[must_use]
pub fn parse_calendar_date(raw: &str) -> Option<Date> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    Date::parse(raw, format_description!("[year]-[month]-[day]")).ok()
}

/// `true` when the studio is open on `date`.
#[must_use]
pub fn is_studio_open(date: Date) -> bool {
    !CLOSED_WEEKDAYS.contains(&date.weekday())
}

/// The current calendar date.
pub fn today() -> Date {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        let month = u8::try_from(now.get_month() + 1)
            .ok()
            .and_then(|m| time::Month::try_from(m).ok());
        let day = u8::try_from(now.get_date()).ok();
        let year = i32::try_from(now.get_full_year()).ok();
        match (year, month, day) {
            (Some(y), Some(m), Some(d)) => Date::from_calendar_date(y, m, d).unwrap_or(Date::MIN),
            // An unreadable clock disables the past-date check rather than every date.
            _ => Date::MIN,
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        time::OffsetDateTime::now_utc().date()
    }
}
