//! Unit tests for the user session store

use greet_application::session::UserSessionManager;

#[test]
fn test_start_session_populates_slot() {
    let sessions = UserSessionManager::new();

    sessions.start_session("user123", "Alice", true);
    let session = sessions.current_session().expect("session should be active");

    assert_eq!(session.user_id, "user123");
    assert_eq!(session.user_name, "Alice");
    assert!(session.formal_preference);
    assert!(sessions.is_session_active());
}

#[test]
fn test_start_session_replaces_existing_session() {
    let sessions = UserSessionManager::new();

    sessions.start_session("user1", "Alice", false);
    let first = sessions.current_session().expect("first session");

    sessions.start_session("user2", "Bob", true);
    let second = sessions.current_session().expect("second session");

    assert_ne!(first, second);
    assert_eq!(second.user_id, "user2");
    assert_eq!(second.user_name, "Bob");
    assert!(second.formal_preference);
}

#[test]
fn test_end_session_clears_slot() {
    let sessions = UserSessionManager::new();

    sessions.start_session("user123", "Charlie", false);
    assert!(sessions.is_session_active());

    sessions.end_session();

    assert!(sessions.current_session().is_none());
    assert!(!sessions.is_session_active());
}

#[test]
fn test_end_session_without_active_session_is_noop() {
    let sessions = UserSessionManager::new();

    sessions.end_session();

    assert!(!sessions.is_session_active());
}
