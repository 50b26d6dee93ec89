//! AssistantClient trait implementation for VapiClient.

use async_trait::async_trait;
use tracing::debug;

use crate::{AssistantClient, ClientError};

use super::client::VapiClient;

#[async_trait]
impl AssistantClient for VapiClient {
    async fn create_session(&self, assistant_id: &str) -> Result<String, ClientError> {
        let body = self.build_session_body(assistant_id);

        debug!(assistant = %assistant_id, "Vapi create-session request");

        let response = self
            .http
            .post(self.session_url())
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            return Err(self.classify_status(status, &body_text));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))?;

        self.parse_session(json)
    }

    async fn send_message(&self, session_id: &str, text: &str) -> Result<String, ClientError> {
        let body = self.build_chat_body(session_id, text);

        debug!(session = %session_id, "Vapi chat request");

        let response = self
            .http
            .post(self.chat_url())
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            return Err(self.classify_status(status, &body_text));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))?;

        self.parse_reply(json)
    }
}
