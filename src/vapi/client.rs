//! Vapi API client struct, request building, and response parsing.

use serde_json::Value;

use crate::ClientError;

use super::config::VapiConfig;

/// Vapi API client.
pub struct VapiClient {
    pub(crate) config: VapiConfig,
    pub(crate) http: reqwest::Client,
}

impl VapiClient {
    pub fn new(config: VapiConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::builder()
                .connect_timeout(std::time::Duration::from_secs(10))
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("failed to build HTTP client"),
        }
    }

    pub(crate) fn session_url(&self) -> String {
        format!("{}/session", self.config.base_url)
    }

    pub(crate) fn chat_url(&self) -> String {
        format!("{}/chat", self.config.base_url)
    }

    /// Build the JSON request body for session creation.
    pub(crate) fn build_session_body(&self, assistant_id: &str) -> Value {
        serde_json::json!({ "assistantId": assistant_id })
    }

    /// Build the JSON request body for one chat turn.
    pub(crate) fn build_chat_body(&self, session_id: &str, text: &str) -> Value {
        serde_json::json!({ "sessionId": session_id, "input": text })
    }

    /// Parse a session-creation response into the session id.
    pub(crate) fn parse_session(&self, json: Value) -> Result<String, ClientError> {
        json["id"]
            .as_str()
            .map(String::from)
            .ok_or_else(|| ClientError::Parse("no 'id' field in response".to_string()))
    }

    /// Parse a chat response into the assistant reply text.
    ///
    /// The reply is the first assistant block in `output`.
    pub(crate) fn parse_reply(&self, json: Value) -> Result<String, ClientError> {
        json["output"]
            .as_array()
            .and_then(|blocks| {
                blocks.iter().find_map(|b| {
                    if b["role"] == "assistant" {
                        b["content"].as_str().map(String::from)
                    } else {
                        None
                    }
                })
            })
            .ok_or_else(|| ClientError::Parse("no assistant output in response".to_string()))
    }

    /// Classify a non-success HTTP response.
    ///
    /// A structured `message` field in the body wins over the generic
    /// `HTTP {status}` form so service error text reaches the user.
    pub(crate) fn classify_status(&self, status: reqwest::StatusCode, body: &str) -> ClientError {
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return ClientError::Auth(format!("HTTP {status}"));
        }
        if status == reqwest::StatusCode::NOT_FOUND {
            return ClientError::NotFound(format!("HTTP {status}"));
        }
        if let Ok(json) = serde_json::from_str::<Value>(body) {
            if let Some(message) = json["message"].as_str() {
                return ClientError::Remote(message.to_string());
            }
        }
        let text = body.chars().take(200).collect::<String>();
        ClientError::Remote(format!("HTTP {status}: {text}"))
    }
}
