//! Speech-to-text boundary.
//!
//! `Transcriber` turns recorded audio into answer text. `None` means nothing usable
//! was heard; callers treat it as "no answer provided", never as a fault.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum TranscriptionError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[async_trait]
pub trait Transcriber: Send + Sync {
    async fn transcribe(&self, audio: Bytes) -> Result<Option<String>, TranscriptionError>;
}

/// Calls the transcriber and folds every failure into `None`.
pub async fn audio_to_text(transcriber: &dyn Transcriber, audio: Bytes) -> Option<String> {
    if audio.is_empty() {
        return None;
    }
    match transcriber.transcribe(audio).await {
        Ok(text) => text,
        Err(e) => {
            warn!("Transcription failed: {e}");
            None
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// UnavailableTranscriber — used when no transcription endpoint is configured
// ────────────────────────────────────────────────────────────────────────────

pub struct UnavailableTranscriber;

#[async_trait]
impl Transcriber for UnavailableTranscriber {
    async fn transcribe(&self, _audio: Bytes) -> Result<Option<String>, TranscriptionError> {
        Ok(None)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// HttpTranscriber — prerecorded-audio REST endpoint (Deepgram response shape)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct TranscriptionResponse {
    results: TranscriptionResults,
}

#[derive(Debug, Deserialize)]
struct TranscriptionResults {
    channels: Vec<Channel>,
}

#[derive(Debug, Deserialize)]
struct Channel {
    alternatives: Vec<Alternative>,
}

#[derive(Debug, Deserialize)]
struct Alternative {
    transcript: String,
}

#[derive(Clone)]
pub struct HttpTranscriber {
    client: Client,
    url: String,
    api_key: Option<String>,
}

impl HttpTranscriber {
    pub fn new(url: String, api_key: Option<String>) -> Result<Self, TranscriptionError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()?;
        Ok(Self {
            client,
            url,
            api_key,
        })
    }
}

#[async_trait]
impl Transcriber for HttpTranscriber {
    async fn transcribe(&self, audio: Bytes) -> Result<Option<String>, TranscriptionError> {
        let mut request = self
            .client
            .post(&self.url)
            .header("content-type", "application/octet-stream")
            .body(audio);
        if let Some(key) = &self.api_key {
            request = request.header("authorization", format!("Token {key}"));
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(TranscriptionError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let transcript = parse_transcript(&body)?;
        debug!("Transcribed {} characters", transcript.as_deref().map_or(0, str::len));
        Ok(transcript)
    }
}

/// First alternative of the first channel; blank transcripts count as nothing heard.
fn parse_transcript(body: &str) -> Result<Option<String>, TranscriptionError> {
    let parsed: TranscriptionResponse = serde_json::from_str(body)?;
    Ok(parsed
        .results
        .channels
        .into_iter()
        .next()
        .and_then(|c| c.alternatives.into_iter().next())
        .map(|a| a.transcript.trim().to_string())
        .filter(|t| !t.is_empty()))
}
