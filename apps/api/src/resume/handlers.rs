//! Axum route handlers for resume analysis.

use axum::{extract::Multipart, Json};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::resume::{ResumeErrorKind, ResumeOutcome};
use crate::resume::extract::{allowed_file, analyze_resume_upload};

/// POST /api/v1/resume/analyze
///
/// Multipart upload with a `resume` file field. Extraction failures come back as a
/// `failed` outcome with a reason rather than an HTTP error, so the candidate can
/// still start an interview without a resume.
pub async fn handle_analyze_resume(
    mut multipart: Multipart,
) -> Result<Json<ResumeOutcome>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed upload: {e}")))?
    {
        if field.name() != Some("resume") {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        if !allowed_file(&filename) {
            return Err(AppError::Validation("Invalid file type".to_string()));
        }

        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;

        let outcome = match tokio::task::spawn_blocking(move || {
            analyze_resume_upload(&filename, &bytes)
        })
        .await
        {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!("Resume extraction task failed: {e}");
                ResumeOutcome::Failed {
                    kind: ResumeErrorKind::Unreadable,
                    message: "could not read document".to_string(),
                }
            }
        };

        if let Some(signal) = outcome.signal() {
            info!(
                "Resume analyzed: {} skills, overall score {:.1}",
                signal.all_skills().len(),
                signal.overall_score
            );
        }

        return Ok(Json(outcome));
    }

    Err(AppError::Validation("No file uploaded".to_string()))
}
