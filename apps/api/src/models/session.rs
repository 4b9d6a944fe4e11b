use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Structured breakdown of how an answer was scored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AnswerDetail {
    pub word_count: usize,
    pub sentence_count: usize,
    /// The literal keywords found, in catalog order.
    pub keywords_matched: Vec<String>,
    pub keyword_score: f64,
    pub length_score: f64,
}

/// One submitted answer. Created once, never modified, appended in submission order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnsweredResponse {
    pub question_index: usize,
    pub question_text: String,
    pub answer_text: String,
    pub score: f64,
    pub feedback: String,
    pub detail: AnswerDetail,
    pub answered_at: DateTime<Utc>,
}
