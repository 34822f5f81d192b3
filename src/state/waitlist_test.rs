use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn waitlist_state_default_is_empty_and_unsubmitted() {
    let state = WaitlistState::default();
    assert!(state.email.is_empty());
    assert!(!state.submitted);
}

// =============================================================
// set_email
// =============================================================

#[test]
fn set_email_replaces_previous_value() {
    let mut state = WaitlistState::default();
    state.set_email("a@b.c".to_owned());
    state.set_email("chef@example.com".to_owned());
    assert_eq!(state.email, "chef@example.com");
}

#[test]
fn set_email_accepts_any_text_without_validation() {
    let mut state = WaitlistState::default();
    state.set_email("not an email".to_owned());
    assert_eq!(state.email, "not an email");
    assert!(!state.submitted);
}

// =============================================================
// submit
// =============================================================

#[test]
fn submit_with_empty_email_is_a_silent_no_op() {
    let mut state = WaitlistState::default();
    assert!(!state.submit());
    assert!(!state.submitted);
}

#[test]
fn submit_with_email_flips_submitted_once() {
    let mut state = WaitlistState::default();
    state.set_email("chef@example.com".to_owned());
    assert!(state.submit());
    assert!(state.submitted);
}

#[test]
fn submitted_never_returns_to_false() {
    let mut state = WaitlistState::default();
    state.set_email("chef@example.com".to_owned());
    state.submit();

    // Neither clearing the email nor re-submitting resets the flag.
    state.set_email(String::new());
    state.submit();
    assert!(state.submitted);
}

#[test]
fn email_edits_after_submit_keep_submitted() {
    let mut state = WaitlistState::default();
    state.set_email("chef@example.com".to_owned());
    state.submit();

    state.set_email("sous@example.com".to_owned());
    assert_eq!(state.email, "sous@example.com");
    assert!(state.submitted);
}
