//! User Session Store
//!
//! Single-slot store for the auxiliary [`UserSession`] record. At most
//! one session is active at a time; starting a new session replaces the
//! current one wholesale.

use std::sync::RwLock;

use greet_domain::value_objects::UserSession;
use tracing::debug;

/// Session manager holding at most one active session.
///
/// Interior mutability lets the composition root hand out shared
/// references while callers start and end sessions. Last writer wins;
/// there is no merge or history.
///
/// ## Example
///
/// ```rust
/// use greet_application::session::UserSessionManager;
///
/// let sessions = UserSessionManager::new();
/// sessions.start_session("user123", "Alice", true);
/// assert!(sessions.is_session_active());
///
/// sessions.end_session();
/// assert!(sessions.current_session().is_none());
/// ```
#[derive(Debug, Default)]
pub struct UserSessionManager {
    current: RwLock<Option<UserSession>>,
}

impl UserSessionManager {
    /// Create an empty session manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session, replacing any active one
    pub fn start_session(
        &self,
        user_id: impl Into<String>,
        user_name: impl Into<String>,
        formal_preference: bool,
    ) {
        let session = UserSession::new(user_id, user_name, formal_preference);
        debug!(user_id = %session.user_id, "starting user session");
        *self.current.write().expect("session slot lock poisoned") = Some(session);
    }

    /// Get a snapshot of the current session, if any
    pub fn current_session(&self) -> Option<UserSession> {
        self.current
            .read()
            .expect("session slot lock poisoned")
            .clone()
    }

    /// End the current session, if any
    pub fn end_session(&self) {
        debug!("ending user session");
        *self.current.write().expect("session slot lock poisoned") = None;
    }

    /// Whether a session is currently active
    pub fn is_session_active(&self) -> bool {
        self.current
            .read()
            .expect("session slot lock poisoned")
            .is_some()
    }
}
