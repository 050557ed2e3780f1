//! Explicit session identity threaded through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! Identity is constructed once at application start from the persistent
//! store and passed to every page that needs it, instead of each page
//! reading ambient browser storage. The snapshot is still mirrored to
//! localStorage on change so a reload recovers the session.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

use crate::util::persistence;

const SESSION_KEY: &str = "notewise.session";

/// Identity and conversation pointer for the current browser session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub user_id: Option<String>,
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub current_conversation_id: Option<String>,
}

impl SessionState {
    /// Restore the session snapshot persisted by a previous visit.
    pub fn load() -> Self {
        persistence::load_json(SESSION_KEY).unwrap_or_default()
    }

    /// Mirror the current snapshot to the persistent store.
    pub fn persist(&self) {
        persistence::save_json(SESSION_KEY, self);
    }

    pub fn is_logged_in(&self) -> bool {
        self.user_id.is_some()
    }

    /// Record a successful login.
    pub fn sign_in(&mut self, user_id: String, display_name: String, email: String) {
        self.user_id = Some(user_id);
        self.display_name = Some(display_name);
        self.email = Some(email);
    }

    /// Clear identity and the conversation pointer, and drop the persisted
    /// snapshot.
    pub fn sign_out(&mut self) {
        *self = Self::default();
        persistence::remove(SESSION_KEY);
    }

    /// Point the session at the conversation currently being viewed.
    pub fn remember_conversation(&mut self, conversation_id: String) {
        self.current_conversation_id = Some(conversation_id);
    }
}
