//! Conversation struct and turn sequencing.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::debug;

use crate::{AssistantClient, ClientError, Message, Role};

use super::types::PendingGuard;

/// A conversation with a remote assistant: the ordered message history
/// plus the lazily-created session the messages flow through.
pub struct Conversation {
    /// Assistant the remote session is created for.
    assistant_id: String,
    /// Remote session id; set on the first successful creation, then
    /// reused for every later turn.
    session_id: Option<String>,
    /// Append-only message history.
    transcript: Vec<Message>,
    /// Whether a submit is currently in flight.
    pending: AtomicBool,
}

impl Conversation {
    pub fn new(assistant_id: impl Into<String>) -> Self {
        Self {
            assistant_id: assistant_id.into(),
            session_id: None,
            transcript: Vec::new(),
            pending: AtomicBool::new(false),
        }
    }

    /// Run one turn: append the user message, establish the remote
    /// session if this is the first turn, send the message, and append
    /// the assistant reply or a system error entry.
    ///
    /// Blank input and calls made while a turn is in flight are ignored.
    /// Failures never escape: every outcome lands in the transcript and
    /// the conversation returns to idle.
    pub async fn submit(&mut self, client: &dyn AssistantClient, text: &str) {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return;
        }
        let Some(_guard) = PendingGuard::acquire(&self.pending) else {
            return;
        };

        // Appended before any network work; the transcript records
        // attempted turns, not only successful ones.
        self.transcript.push(Message {
            role: Role::User,
            content: text.to_string(),
        });

        let session_id = match self.session_id.clone() {
            Some(id) => id,
            None => match client.create_session(&self.assistant_id).await {
                Ok(id) => {
                    debug!(session = %id, "Session created");
                    self.session_id = Some(id.clone());
                    id
                }
                Err(err) => {
                    debug!(error = %err, "Session creation failed");
                    self.transcript.push(system_entry(&err));
                    return;
                }
            },
        };

        match client.send_message(&session_id, trimmed).await {
            Ok(reply) => self.transcript.push(Message {
                role: Role::Assistant,
                content: reply,
            }),
            Err(err) => {
                debug!(error = %err, "Turn failed");
                self.transcript.push(system_entry(&err));
            }
        }
    }

    /// Full ordered message history.
    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    /// Whether a submit is currently in flight.
    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }

    /// Remote session id, once established.
    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    /// Number of messages in the transcript.
    pub fn message_count(&self) -> usize {
        self.transcript.len()
    }
}

/// Display-safe transcript entry for a failed operation. A structured
/// remote message takes precedence over the generic description through
/// `ClientError`'s `Display`.
fn system_entry(err: &ClientError) -> Message {
    Message {
        role: Role::System,
        content: format!("Error: {err}"),
    }
}
