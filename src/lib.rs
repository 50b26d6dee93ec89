//! Conversation engine for Vapi assistants.
//!
//! Provides:
//! - A `VapiClient` over the session and chat endpoints
//! - `Conversation` transcript management with single-flight turns
//! - A Whisper-based voice input adapter

pub mod conversation;
pub mod vapi;
pub mod voice;

use async_trait::async_trait;

pub use conversation::Conversation;
pub use vapi::{VapiClient, VapiConfig};
pub use voice::{VoiceClient, VoiceConfig};

/// Remote operations a conversation is built on: establish a session
/// once, then exchange one message at a time against it.
#[async_trait]
pub trait AssistantClient: Send + Sync {
    /// Create a new remote conversation context for `assistant_id`,
    /// returning the opaque session identifier.
    async fn create_session(&self, assistant_id: &str) -> Result<String, ClientError>;

    /// Submit one user turn to an existing session and return the
    /// assistant's complete reply text.
    async fn send_message(&self, session_id: &str, text: &str) -> Result<String, ClientError>;
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Request never reached the service.
    #[error("network error: {0}")]
    Transport(String),
    /// Credential rejected by the service.
    #[error("authentication rejected: {0}")]
    Auth(String),
    /// Session id is stale or unknown to the service.
    #[error("session not found: {0}")]
    NotFound(String),
    /// Structured failure response; the payload message is surfaced
    /// verbatim.
    #[error("{0}")]
    Remote(String),
    #[error("parse error: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_error_display() {
        let err = ClientError::Transport("connection refused".into());
        assert_eq!(err.to_string(), "network error: connection refused");

        let err = ClientError::Auth("HTTP 401 Unauthorized".into());
        assert_eq!(
            err.to_string(),
            "authentication rejected: HTTP 401 Unauthorized"
        );

        let err = ClientError::NotFound("HTTP 404 Not Found".into());
        assert_eq!(err.to_string(), "session not found: HTTP 404 Not Found");

        let err = ClientError::Remote("rate limited".into());
        assert_eq!(err.to_string(), "rate limited");

        let err = ClientError::Parse("no 'id' field in response".into());
        assert_eq!(err.to_string(), "parse error: no 'id' field in response");
    }

    #[test]
    fn role_serializes_lowercase() {
        let msg = Message {
            role: Role::Assistant,
            content: "hi".into(),
        };
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["role"], "assistant");
        assert_eq!(json["content"], "hi");

        let back: Message = serde_json::from_value(json).unwrap();
        assert_eq!(back.role, Role::Assistant);
    }
}
