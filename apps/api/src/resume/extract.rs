//! Document text extraction — the boundary between uploaded files and analysis.
//!
//! Failures here are converted into a typed `ResumeOutcome::Failed` by
//! `analyze_resume_upload`; nothing downstream sees a raw extraction error.

use thiserror::Error;
use tracing::warn;

use crate::models::resume::{ResumeErrorKind, ResumeOutcome};
use crate::resume::analyzer::analyze_resume_text;

/// Extensions accepted for upload.
pub const ALLOWED_EXTENSIONS: &[&str] = &["pdf", "docx", "txt"];

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("could not read PDF: {0}")]
    Pdf(String),

    #[error("document contains no text")]
    Empty,
}

impl ExtractError {
    pub fn kind(&self) -> ResumeErrorKind {
        match self {
            ExtractError::UnsupportedFormat(_) => ResumeErrorKind::UnsupportedFormat,
            ExtractError::Pdf(_) => ResumeErrorKind::Unreadable,
            ExtractError::Empty => ResumeErrorKind::Empty,
        }
    }
}

/// Lowercased extension of `filename`, if it has one.
pub fn file_extension(filename: &str) -> Option<String> {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .filter(|ext| !ext.is_empty())
}

pub fn allowed_file(filename: &str) -> bool {
    file_extension(filename)
        .map(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// Extracts plain text from an uploaded document. CPU-bound for PDFs; async callers
/// should run it on a blocking thread.
pub fn extract_text(filename: &str, bytes: &[u8]) -> Result<String, ExtractError> {
    let ext = file_extension(filename).unwrap_or_default();
    let text = match ext.as_str() {
        "pdf" => extract_pdf_text(bytes)?,
        "txt" => String::from_utf8_lossy(bytes).into_owned(),
        // .docx is accepted for upload but has no extractor yet
        _ => return Err(ExtractError::UnsupportedFormat(filename.to_string())),
    };

    if text.trim().is_empty() {
        return Err(ExtractError::Empty);
    }
    Ok(text)
}

/// `pdf-extract` panics on some well-formed documents (e.g. a content stream naming a
/// font the page never declares), so the call is isolated with `catch_unwind`.
fn extract_pdf_text(bytes: &[u8]) -> Result<String, ExtractError> {
    match std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes)) {
        Ok(result) => result.map_err(|e| ExtractError::Pdf(e.to_string())),
        Err(_) => Err(ExtractError::Pdf("extractor panicked".to_string())),
    }
}

/// Extracts and analyzes an uploaded resume, degrading failures into a typed outcome.
pub fn analyze_resume_upload(filename: &str, bytes: &[u8]) -> ResumeOutcome {
    match extract_text(filename, bytes) {
        Ok(text) => ResumeOutcome::Analyzed(analyze_resume_text(&text)),
        Err(e) => {
            warn!("Resume extraction failed for '{filename}': {e}");
            ResumeOutcome::Failed {
                kind: e.kind(),
                message: e.to_string(),
            }
        }
    }
}
