//! Axum route handlers for spoken answers.

use axum::{
    extract::{Multipart, Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::interview::session::SubmitOutcome;
use crate::speech::transcriber::audio_to_text;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct VoiceQuery {
    /// Also submit the transcript as the answer to the current question.
    #[serde(default)]
    pub submit: bool,
}

#[derive(Debug, Serialize)]
pub struct VoiceResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submission: Option<SubmitOutcome>,
}

/// POST /api/v1/interviews/:id/voice
///
/// Multipart upload with an `audio` field. An inaudible recording is a normal
/// outcome (`success: false`); with `?submit=true` it is recorded as an empty answer.
pub async fn handle_voice_answer(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Query(query): Query<VoiceQuery>,
    mut multipart: Multipart,
) -> Result<Json<VoiceResponse>, AppError> {
    // fail fast on unknown sessions before reading the upload
    state.service.current_question(session_id)?;

    let mut audio = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed upload: {e}")))?
    {
        if field.name() == Some("audio") {
            audio = Some(
                field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read audio: {e}")))?,
            );
            break;
        }
    }
    let audio = audio.ok_or_else(|| AppError::Validation("No audio file".to_string()))?;

    let text = audio_to_text(state.transcriber.as_ref(), audio).await;

    let submission = if query.submit {
        Some(state.service.submit_answer(
            session_id,
            text.as_deref().unwrap_or_default(),
            None,
        )?)
    } else {
        None
    };

    Ok(Json(VoiceResponse {
        success: text.is_some(),
        error: text
            .is_none()
            .then(|| "Could not understand audio".to_string()),
        text,
        submission,
    }))
}
