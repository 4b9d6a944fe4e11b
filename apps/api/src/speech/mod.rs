// Spoken answers: audio → optional transcript. Transcription is best-effort.

pub mod handlers;
pub mod transcriber;
