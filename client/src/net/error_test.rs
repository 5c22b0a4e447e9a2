use super::*;

#[test]
fn network_failures_are_transient() {
    let err = ApiError::Network("connection refused".to_owned());
    assert_eq!(err.kind(), FailureKind::Transient);
    assert!(err.is_transient());
    assert_eq!(err.explicit_message(), None);
}

#[test]
fn bare_status_failures_are_transient() {
    assert!(ApiError::Status { status: 503 }.is_transient());
    assert!(ApiError::Status { status: 404 }.is_transient());
}

#[test]
fn decode_failures_are_transient() {
    assert!(ApiError::Decode("expected value".to_owned()).is_transient());
}

#[test]
fn rejected_failures_are_application_level() {
    let err = ApiError::Rejected { status: Some(500), message: "Please call the studio.".to_owned() };
    assert_eq!(err.kind(), FailureKind::Application);
    assert!(!err.is_transient());
    assert_eq!(err.explicit_message(), Some("Please call the studio."));
}

#[test]
fn rejected_display_is_the_server_message() {
    let err = ApiError::Rejected { status: None, message: "Slot already taken".to_owned() };
    assert_eq!(err.to_string(), "Slot already taken");
}

#[test]
fn status_display_includes_code() {
    assert_eq!(ApiError::Status { status: 502 }.to_string(), "server responded with status 502");
}
