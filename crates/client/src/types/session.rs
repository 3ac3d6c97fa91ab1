//! Session and message envelope types.

use serde::{Deserialize, Serialize};

/// The logged-in user, as reported by `GET /api/auth/me`.
///
/// The session itself lives in a cookie the client never inspects; this is
/// the only state the backend asserts about it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Authenticated username.
    pub username: String,
}

/// Generic `{"message": ...}` envelope the backend uses for login/logout
/// confirmations and error bodies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerMessage {
    /// Human-readable message.
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_deserializes() {
        let session: Session = serde_json::from_str(r#"{"username": "admin"}"#).expect("parse");
        assert_eq!(session.username, "admin");
    }

    #[test]
    fn test_message_deserializes() {
        let msg: ServerMessage =
            serde_json::from_str(r#"{"message": "Login successful"}"#).expect("parse");
        assert_eq!(msg.message, "Login successful");
    }
}
