use super::*;

#[test]
fn every_service_kind_has_a_card() {
    for kind in ServiceKind::ALL {
        assert!(SERVICES.iter().any(|s| s.kind == kind), "{kind:?} missing a service card");
    }
}

#[test]
fn artist_first_name_and_instagram_url() {
    let jamie = artist_by_slug("jamie").unwrap();
    assert_eq!(jamie.first_name(), "Jamie");
    assert_eq!(jamie.instagram_url(), "https://instagram.com/jamie_irezumi");
}

#[test]
fn artist_by_slug_unknown_is_none() {
    assert!(artist_by_slug("alex").is_none());
}

#[test]
fn hours_mark_sunday_monday_closed() {
    assert_eq!(HOURS.last().map(|(_, h)| *h), Some("Closed"));
}
