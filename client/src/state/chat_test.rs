use super::*;

// =============================================================
// Helpers
// =============================================================

fn opened() -> ChatState {
    let mut state = ChatState::default();
    state.toggle();
    state
}

fn offline() -> ApiError {
    ApiError::Network("failed to fetch".to_owned())
}

fn roles(state: &ChatState) -> Vec<ChatRole> {
    state.messages.iter().map(|m| m.role).collect()
}

fn last_index(state: &ChatState) -> usize {
    state.messages.len() - 1
}

// =============================================================
// toggle
// =============================================================

#[test]
fn first_open_seeds_greeting() {
    let state = opened();
    assert!(state.open);
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].role, ChatRole::Assistant);
    assert_eq!(state.messages[0].content, GREETING);
}

#[test]
fn reopening_keeps_transcript_without_second_greeting() {
    let mut state = opened();
    let (ticket, _) = state.send("hello").unwrap();
    state.finish(ticket, Ok("hi!".to_owned()));
    state.toggle();
    state.toggle();
    assert_eq!(roles(&state), vec![ChatRole::Assistant, ChatRole::User, ChatRole::Assistant]);
}

#[test]
fn reply_after_close_is_discarded_and_slot_released() {
    let mut state = opened();
    let (ticket, _) = state.send("are you open sunday?").unwrap();
    state.toggle();
    assert!(!state.is_waiting());
    assert!(!state.finish(ticket, Ok("late".to_owned())));
    assert_eq!(state.messages.len(), 2);

    state.toggle();
    assert!(state.send("and monday?").is_some());
}

// =============================================================
// send / finish
// =============================================================

#[test]
fn send_appends_user_message_and_returns_trimmed_text() {
    let mut state = opened();
    let (_, text) = state.send("  price for a sleeve?  ").unwrap();
    assert_eq!(text, "price for a sleeve?");
    assert_eq!(state.messages[1].content, "price for a sleeve?");
    assert!(state.is_waiting());
}

#[test]
fn blank_input_is_ignored() {
    let mut state = opened();
    assert!(state.send("   ").is_none());
    assert_eq!(state.messages.len(), 1);
}

#[test]
fn send_while_waiting_is_refused() {
    let mut state = opened();
    state.send("one").unwrap();
    assert!(state.send("two").is_none());
    assert_eq!(state.messages.len(), 2);
}

#[test]
fn success_appends_assistant_reply() {
    let mut state = opened();
    let (ticket, _) = state.send("hours?").unwrap();
    assert!(state.finish(ticket, Ok("Tue-Sat 11AM-8PM".to_owned())));
    assert!(!state.is_waiting());
    assert_eq!(state.messages[2].role, ChatRole::Assistant);
    assert_eq!(state.messages[2].content, "Tue-Sat 11AM-8PM");
}

#[test]
fn duplicate_completion_is_ignored() {
    let mut state = opened();
    let (ticket, _) = state.send("hours?").unwrap();
    state.finish(ticket, Ok("open".to_owned()));
    assert!(!state.finish(ticket, Ok("open again".to_owned())));
    assert_eq!(state.messages.len(), 3);
}

#[test]
fn failure_text_depends_on_failure_kind() {
    assert_eq!(error_text(&offline()), NETWORK_ERROR_MESSAGE);
    assert_eq!(error_text(&ApiError::Status { status: 500 }), SERVER_ERROR_MESSAGE);
    assert_eq!(error_text(&ApiError::Decode("eof".to_owned())), SERVER_ERROR_MESSAGE);
    let rejected = ApiError::Rejected { status: Some(429), message: "Slow down.".to_owned() };
    assert_eq!(error_text(&rejected), "Slow down.");
}

#[test]
fn failure_appends_retryable_error() {
    let mut state = opened();
    let (ticket, _) = state.send("hours?").unwrap();
    state.finish(ticket, Err(offline()));
    let last = &state.messages[last_index(&state)];
    assert_eq!(last.role, ChatRole::Error);
    assert!(last.retryable);
}

// =============================================================
// retry
// =============================================================

#[test]
fn retry_resubmits_original_text_without_new_user_message() {
    let mut state = opened();
    let (ticket, _) = state.send("do you do cover-ups?").unwrap();
    state.finish(ticket, Err(offline()));

    let index = last_index(&state);
    let (_, text) = state.retry(index).unwrap();
    assert_eq!(text, "do you do cover-ups?");
    assert!(!state.messages[index].retryable);
    assert_eq!(roles(&state), vec![ChatRole::Assistant, ChatRole::User, ChatRole::Error]);
}

#[test]
fn retry_offer_is_consumed_once() {
    let mut state = opened();
    let (ticket, _) = state.send("hi").unwrap();
    state.finish(ticket, Err(offline()));
    let index = last_index(&state);
    let (ticket, _) = state.retry(index).unwrap();
    state.finish(ticket, Ok("hello".to_owned()));
    assert!(state.retry(index).is_none());
}

#[test]
fn retry_on_non_error_message_is_noop() {
    let mut state = opened();
    assert!(state.retry(0).is_none());
    assert!(state.retry(42).is_none());
}

#[test]
fn two_failures_then_success_yields_one_reply_and_one_user_message() {
    let mut state = opened();
    let (mut ticket, _) = state.send("book me in").unwrap();
    for _ in 0..2 {
        state.finish(ticket, Err(offline()));
        (ticket, _) = state.retry(last_index(&state)).unwrap();
    }
    state.finish(ticket, Ok("Use the booking form below.".to_owned()));

    let users = state.messages.iter().filter(|m| m.role == ChatRole::User).count();
    let replies = state.messages.iter().filter(|m| m.role == ChatRole::Assistant).count();
    assert_eq!(users, 1);
    // Greeting plus one reply.
    assert_eq!(replies, 2);
    assert!(state.messages.iter().all(|m| !m.retryable));
}

#[test]
fn third_failure_is_not_retryable() {
    let mut state = opened();
    let (mut ticket, _) = state.send("book me in").unwrap();
    for _ in 0..2 {
        state.finish(ticket, Err(ApiError::Status { status: 503 }));
        (ticket, _) = state.retry(last_index(&state)).unwrap();
    }
    state.finish(ticket, Err(ApiError::Status { status: 503 }));

    let index = last_index(&state);
    assert!(!state.messages[index].retryable);
    assert!(state.retry(index).is_none());
}
