use std::sync::Arc;

use crate::config::Config;
use crate::interview::service::InterviewService;
use crate::speech::transcriber::Transcriber;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Catalog plus every live session. Built once at startup.
    pub service: Arc<InterviewService>,
    /// Pluggable speech-to-text. Default: UnavailableTranscriber unless TRANSCRIPTION_URL is set.
    pub transcriber: Arc<dyn Transcriber>,
    pub config: Config,
}
