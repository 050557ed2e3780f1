use super::*;

// =============================================================
// SessionState defaults and transitions
// =============================================================

#[test]
fn default_session_is_logged_out() {
    let state = SessionState::default();
    assert!(!state.is_logged_in());
    assert!(state.current_conversation_id.is_none());
}

#[test]
fn sign_in_populates_identity() {
    let mut state = SessionState::default();
    state.sign_in("42".to_owned(), "Ada Lovelace".to_owned(), "ada@example.com".to_owned());
    assert!(state.is_logged_in());
    assert_eq!(state.user_id.as_deref(), Some("42"));
    assert_eq!(state.display_name.as_deref(), Some("Ada Lovelace"));
    assert_eq!(state.email.as_deref(), Some("ada@example.com"));
}

#[test]
fn sign_out_clears_everything() {
    let mut state = SessionState::default();
    state.sign_in("42".to_owned(), "Ada".to_owned(), "ada@example.com".to_owned());
    state.remember_conversation("conv-9".to_owned());
    state.sign_out();
    assert_eq!(state, SessionState::default());
}

#[test]
fn remember_conversation_replaces_pointer() {
    let mut state = SessionState::default();
    state.remember_conversation("conv-1".to_owned());
    state.remember_conversation("conv-2".to_owned());
    assert_eq!(state.current_conversation_id.as_deref(), Some("conv-2"));
}

#[test]
fn session_round_trips_through_json() {
    let mut state = SessionState::default();
    state.sign_in("7".to_owned(), "Grace".to_owned(), "grace@example.com".to_owned());
    let json = serde_json::to_string(&state).expect("serialize");
    let back: SessionState = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(state, back);
}

#[test]
fn load_outside_a_browser_yields_default() {
    // Without the hydrate feature there is no storage to read from.
    assert_eq!(SessionState::load(), SessionState::default());
}
