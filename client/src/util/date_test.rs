use super::*;
use time::Month;

fn date(y: i32, m: Month, d: u8) -> Date {
    Date::from_calendar_date(y, m, d).unwrap()
}

#[test]
fn parse_calendar_date_reads_input_value() {
    assert_eq!(parse_calendar_date("2026-11-03"), Some(date(2026, Month::November, 3)));
    assert_eq!(parse_calendar_date(" 2026-11-03 "), Some(date(2026, Month::November, 3)));
}

#[test]
fn parse_calendar_date_rejects_blank_and_garbage() {
    assert_eq!(parse_calendar_date(""), None);
    assert_eq!(parse_calendar_date("11/03/2026"), None);
    assert_eq!(parse_calendar_date("2026-02-30"), None);
}

#[test]
fn studio_is_closed_sunday_and_monday() {
    // 2026-10-18 is a Sunday.
    assert!(!is_studio_open(date(2026, Month::October, 18)));
    assert!(!is_studio_open(date(2026, Month::October, 19)));
}

#[test]
fn studio_is_open_tuesday_through_saturday() {
    for day in 20..=24 {
        assert!(is_studio_open(date(2026, Month::October, day)), "Oct {day} should be open");
    }
}

#[test]
fn today_is_after_min() {
    assert!(today() > Date::MIN);
}
