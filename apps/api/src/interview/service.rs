//! Interview Service — owns the question catalog and every live session.
//!
//! Constructed once at startup and shared behind an `Arc`. Sessions live in a
//! `DashMap`; a submission holds the entry's write guard for the whole
//! read-modify-write, so concurrent submissions to one session are serialized.

use std::sync::Arc;

use dashmap::DashMap;
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::interview::catalog::QuestionBank;
use crate::interview::report::{summarize, Report};
use crate::interview::scorer::{AnswerScorer, KeywordRubricScorer};
use crate::interview::selector::QuestionSelector;
use crate::interview::session::{InterviewError, SessionState, SubmitOutcome};
use crate::models::question::Question;
use crate::models::resume::ResumeSignal;

/// What the candidate should see next.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum NextQuestion {
    Pending {
        question: Arc<Question>,
        /// 1-based
        question_num: usize,
        total_questions: usize,
        time_limit_secs: u64,
    },
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StartedSession {
    pub session_id: Uuid,
    pub job_role: String,
    pub total_questions: usize,
    pub next: NextQuestion,
}

pub struct InterviewService {
    bank: QuestionBank,
    selector: QuestionSelector,
    scorer: Arc<dyn AnswerScorer>,
    time_limit_secs: u64,
    sessions: DashMap<Uuid, SessionState>,
}

impl InterviewService {
    pub fn new(bank: QuestionBank, selector: QuestionSelector, time_limit_secs: u64) -> Self {
        Self::with_scorer(bank, selector, Arc::new(KeywordRubricScorer), time_limit_secs)
    }

    pub fn with_scorer(
        bank: QuestionBank,
        selector: QuestionSelector,
        scorer: Arc<dyn AnswerScorer>,
        time_limit_secs: u64,
    ) -> Self {
        Self {
            bank,
            selector,
            scorer,
            time_limit_secs,
            sessions: DashMap::new(),
        }
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn active_sessions(&self) -> usize {
        self.sessions.len()
    }

    /// Builds the question sequence once and opens a new session.
    pub fn start_session(
        &self,
        job_role: &str,
        resume: Option<ResumeSignal>,
        question_count: Option<usize>,
    ) -> StartedSession {
        let questions = self
            .selector
            .select(&self.bank, job_role, resume.as_ref(), question_count);
        let session = SessionState::new(job_role, questions, resume);
        let started = StartedSession {
            session_id: session.session_id,
            job_role: session.job_role.clone(),
            total_questions: session.total_questions(),
            next: self.next_for(&session),
        };

        info!(
            "Started interview {} for role '{}' ({} questions, strategy {:?})",
            started.session_id,
            job_role,
            started.total_questions,
            self.selector.strategy()
        );
        self.sessions.insert(session.session_id, session);
        started
    }

    pub fn current_question(&self, session_id: Uuid) -> Result<NextQuestion, InterviewError> {
        let session = self
            .sessions
            .get(&session_id)
            .ok_or(InterviewError::NoActiveSession(session_id))?;
        Ok(self.next_for(&session))
    }

    pub fn submit_answer(
        &self,
        session_id: Uuid,
        answer: &str,
        question_index: Option<usize>,
    ) -> Result<SubmitOutcome, InterviewError> {
        let mut session = self
            .sessions
            .get_mut(&session_id)
            .ok_or(InterviewError::NoActiveSession(session_id))?;

        let outcome = session.submit(answer, question_index, self.scorer.as_ref())?;

        match &outcome {
            SubmitOutcome::Scored {
                next_question,
                score,
                completed,
                ..
            } => {
                debug!("Interview {session_id}: question {next_question} scored {score}");
                if *completed {
                    info!(
                        "Interview {session_id} completed with cumulative score {:.1}",
                        session.cumulative_score()
                    );
                }
            }
            SubmitOutcome::AlreadyCompleted { .. } => {
                debug!("Interview {session_id}: submission after completion ignored");
            }
        }

        Ok(outcome)
    }

    /// Summarizes whatever has been answered so far.
    pub fn report(&self, session_id: Uuid) -> Result<Report, InterviewError> {
        let session = self
            .sessions
            .get(&session_id)
            .ok_or(InterviewError::NoActiveSession(session_id))?;
        Ok(summarize(session.responses(), session.resume.as_ref()))
    }

    /// Discards a session; its answers are not retained anywhere.
    pub fn end_session(&self, session_id: Uuid) -> Result<(), InterviewError> {
        if self.sessions.remove(&session_id).is_none() {
            return Err(InterviewError::NoActiveSession(session_id));
        }
        info!("Ended interview {session_id}");
        Ok(())
    }

    fn next_for(&self, session: &SessionState) -> NextQuestion {
        match session.current_question() {
            Some(question) => NextQuestion::Pending {
                question: Arc::clone(question),
                question_num: session.current_index() + 1,
                total_questions: session.total_questions(),
                time_limit_secs: self.time_limit_secs,
            },
            None => NextQuestion::Completed,
        }
    }
}

impl Default for InterviewService {
    fn default() -> Self {
        Self::new(QuestionBank::built_in(), QuestionSelector::default(), 180)
    }
}
