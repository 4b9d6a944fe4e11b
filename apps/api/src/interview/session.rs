//! Session state — one interview attempt and its append-only answer log.
//!
//! `current_index == responses.len()` holds between calls; the index only moves
//! forward, one step per scored answer, and stops at `questions.len()`.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::interview::scorer::AnswerScorer;
use crate::models::question::Question;
use crate::models::resume::ResumeSignal;
use crate::models::session::{AnswerDetail, AnsweredResponse};

#[derive(Debug, Error, PartialEq)]
pub enum InterviewError {
    #[error("No active interview session {0}")]
    NoActiveSession(Uuid),

    #[error("Invalid question index {index}: session has {total} questions")]
    InvalidQuestionIndex { index: usize, total: usize },

    #[error("Question {got} answered out of order: current question is {expected}")]
    QuestionOutOfOrder { expected: usize, got: usize },
}

#[derive(Debug, Clone)]
pub struct SessionState {
    pub session_id: Uuid,
    pub job_role: String,
    pub questions: Vec<Arc<Question>>,
    pub resume: Option<ResumeSignal>,
    pub started_at: DateTime<Utc>,
    current_index: usize,
    cumulative_score: f64,
    responses: Vec<AnsweredResponse>,
}

/// Result of a "submit answer" call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubmitOutcome {
    Scored {
        next_question: usize,
        score: f64,
        feedback: String,
        detail: AnswerDetail,
        completed: bool,
    },
    /// The session was already terminal; nothing was recorded.
    AlreadyCompleted { total_questions: usize },
}

impl SubmitOutcome {
    pub fn completed(&self) -> bool {
        match self {
            SubmitOutcome::Scored { completed, .. } => *completed,
            SubmitOutcome::AlreadyCompleted { .. } => true,
        }
    }
}

impl SessionState {
    pub fn new(
        job_role: impl Into<String>,
        questions: Vec<Arc<Question>>,
        resume: Option<ResumeSignal>,
    ) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            job_role: job_role.into(),
            questions,
            resume,
            started_at: Utc::now(),
            current_index: 0,
            cumulative_score: 0.0,
            responses: Vec::new(),
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn cumulative_score(&self) -> f64 {
        self.cumulative_score
    }

    pub fn responses(&self) -> &[AnsweredResponse] {
        &self.responses
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn is_complete(&self) -> bool {
        self.current_index >= self.questions.len()
    }

    /// The question awaiting an answer, or `None` once the session is terminal.
    pub fn current_question(&self) -> Option<&Arc<Question>> {
        self.questions.get(self.current_index)
    }

    /// Scores `answer` against the current question and records it.
    ///
    /// `question_index`, when given, must name a question in the sequence and, on a
    /// live session, must be the current one. Rejected calls leave the state untouched.
    pub fn submit(
        &mut self,
        answer: &str,
        question_index: Option<usize>,
        scorer: &dyn AnswerScorer,
    ) -> Result<SubmitOutcome, InterviewError> {
        let total = self.questions.len();

        if let Some(index) = question_index {
            if index >= total {
                return Err(InterviewError::InvalidQuestionIndex { index, total });
            }
        }

        if self.is_complete() {
            return Ok(SubmitOutcome::AlreadyCompleted {
                total_questions: total,
            });
        }

        if let Some(index) = question_index {
            if index != self.current_index {
                return Err(InterviewError::QuestionOutOfOrder {
                    expected: self.current_index,
                    got: index,
                });
            }
        }

        let question = Arc::clone(&self.questions[self.current_index]);
        let scored = scorer.score(answer, &question);

        self.responses.push(AnsweredResponse {
            question_index: self.current_index,
            question_text: question.text.clone(),
            answer_text: answer.to_string(),
            score: scored.score,
            feedback: scored.feedback.clone(),
            detail: scored.detail.clone(),
            answered_at: Utc::now(),
        });
        self.cumulative_score += scored.score;
        self.current_index += 1;

        Ok(SubmitOutcome::Scored {
            next_question: self.current_index,
            score: scored.score,
            feedback: scored.feedback,
            detail: scored.detail,
            completed: self.is_complete(),
        })
    }
}
