//! User Session Value Object
//!
//! Auxiliary session record consumed by the application-layer session
//! store. Not part of the greeting flow itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Value Object: User Session
///
/// Snapshot of one user session: who the user is, their formality
/// preference, and when the session started. Sessions are replaced
/// wholesale on restart and compared by value, timestamp included.
///
/// ## Example
///
/// ```rust
/// use greet_domain::value_objects::UserSession;
///
/// let session = UserSession::new("user123", "Alice", true);
/// assert_eq!(session.user_id, "user123");
/// assert!(session.formal_preference);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserSession {
    /// Unique identifier of the user
    pub user_id: String,
    /// Display name of the user
    pub user_name: String,
    /// Whether the user prefers formal greetings
    pub formal_preference: bool,
    /// When the session started
    pub started_at: DateTime<Utc>,
}

impl UserSession {
    /// Create a new session starting now
    pub fn new<I, N>(user_id: I, user_name: N, formal_preference: bool) -> Self
    where
        I: Into<String>,
        N: Into<String>,
    {
        Self {
            user_id: user_id.into(),
            user_name: user_name.into(),
            formal_preference,
            started_at: Utc::now(),
        }
    }
}
