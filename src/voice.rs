//! Whisper API client for voice input.
//!
//! Transcribes recorded audio to text; the caller feeds the result into
//! `Conversation::submit`. Holds no conversation state.

use tracing::debug;

use crate::ClientError;

const TRANSCRIPTION_API_URL: &str = "https://api.openai.com/v1/audio/transcriptions";

/// Transcription client configuration.
#[derive(Clone)]
pub struct VoiceConfig {
    pub api_key: String,
    pub model: String,
    pub language: Option<String>,
}

impl std::fmt::Debug for VoiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VoiceConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("language", &self.language)
            .finish()
    }
}

impl VoiceConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: "whisper-1".to_string(),
            language: None,
        }
    }

    pub fn with_language(mut self, lang: impl Into<String>) -> Self {
        self.language = Some(lang.into());
        self
    }
}

/// Speech-to-text client.
pub struct VoiceClient {
    config: VoiceConfig,
    http: reqwest::Client,
}

impl VoiceClient {
    pub fn new(config: VoiceConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::builder()
                .connect_timeout(std::time::Duration::from_secs(10))
                .timeout(std::time::Duration::from_secs(300))
                .build()
                .expect("failed to build HTTP client"),
        }
    }

    /// Transcribe audio bytes to text.
    ///
    /// `audio_data` should be valid audio in a supported format
    /// (mp3, m4a, wav, webm, ogg). `filename` is used for the multipart
    /// form and picks the MIME type (e.g., "clip.wav").
    pub async fn transcribe(&self, audio_data: Vec<u8>, filename: &str) -> Result<String, ClientError> {
        debug!(
            model = %self.config.model,
            size = audio_data.len(),
            "Transcription request"
        );

        let file_part = reqwest::multipart::Part::bytes(audio_data)
            .file_name(filename.to_string())
            .mime_str(mime_for(filename))
            .map_err(|e| ClientError::Parse(e.to_string()))?;

        let mut form = reqwest::multipart::Form::new()
            .part("file", file_part)
            .text("model", self.config.model.clone());

        if let Some(ref lang) = self.config.language {
            form = form.text("language", lang.clone());
        }

        let response = self
            .http
            .post(TRANSCRIPTION_API_URL)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .multipart(form)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(ClientError::Auth(format!("HTTP {status}")));
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let text = text.chars().take(200).collect::<String>();
            return Err(ClientError::Remote(format!("HTTP {status}: {text}")));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))?;

        json["text"]
            .as_str()
            .map(String::from)
            .ok_or_else(|| ClientError::Parse("no 'text' field in response".to_string()))
    }
}

fn mime_for(filename: &str) -> &'static str {
    match filename.rsplit('.').next() {
        Some("mp3") => "audio/mpeg",
        Some("m4a") => "audio/mp4",
        Some("webm") => "audio/webm",
        Some("ogg") => "audio/ogg",
        _ => "audio/wav",
    }
}
