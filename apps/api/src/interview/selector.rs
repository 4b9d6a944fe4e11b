//! Question Selector — builds the ordered question sequence for a new session.
//!
//! `CatalogOrder` takes the first `count` questions for the role as listed.
//! `ResumeWeighted` first moves questions whose keywords overlap the candidate's
//! skills to the front (stable, so ties keep catalog order), then truncates.

use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::interview::catalog::QuestionBank;
use crate::models::question::Question;
use crate::models::resume::ResumeSignal;

/// Questions per session when the caller does not ask for a specific number.
pub const DEFAULT_QUESTION_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionStrategy {
    #[default]
    CatalogOrder,
    ResumeWeighted,
}

impl FromStr for SelectionStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "catalog_order" => Ok(SelectionStrategy::CatalogOrder),
            "resume_weighted" => Ok(SelectionStrategy::ResumeWeighted),
            other => Err(format!("unknown selection strategy '{other}'")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct QuestionSelector {
    strategy: SelectionStrategy,
    default_count: usize,
    max_questions: usize,
}

impl QuestionSelector {
    pub fn new(strategy: SelectionStrategy, default_count: usize, max_questions: usize) -> Self {
        Self {
            strategy,
            default_count,
            max_questions,
        }
    }

    pub fn strategy(&self) -> SelectionStrategy {
        self.strategy
    }

    /// Selects up to `count` questions (`default_count` when unspecified, capped at
    /// `max_questions`).
    /// A missing resume behaves exactly like an empty one.
    pub fn select(
        &self,
        bank: &QuestionBank,
        job_role: &str,
        resume: Option<&ResumeSignal>,
        count: Option<usize>,
    ) -> Vec<Arc<Question>> {
        let count = count.unwrap_or(self.default_count).min(self.max_questions);
        let pool = bank.questions_for(job_role);

        match (self.strategy, resume) {
            (SelectionStrategy::ResumeWeighted, Some(signal)) if !signal.is_empty() => {
                let skills: Vec<String> = signal.all_skills().into_iter().collect();
                let mut ranked: Vec<(usize, &Arc<Question>)> = pool
                    .iter()
                    .map(|q| (skill_overlap(q, &skills), q))
                    .collect();
                // sort_by is stable: equal overlap keeps catalog order
                ranked.sort_by(|a, b| b.0.cmp(&a.0));
                ranked
                    .into_iter()
                    .take(count)
                    .map(|(_, q)| Arc::clone(q))
                    .collect()
            }
            _ => pool.iter().take(count).cloned().collect(),
        }
    }
}

impl Default for QuestionSelector {
    fn default() -> Self {
        Self::new(SelectionStrategy::default(), DEFAULT_QUESTION_COUNT, 10)
    }
}

/// Number of question keywords related to any resume skill.
fn skill_overlap(question: &Question, skills: &[String]) -> usize {
    question
        .keywords
        .iter()
        .map(|k| k.to_lowercase())
        .filter(|k| {
            skills
                .iter()
                .any(|s| k.contains(s.as_str()) || s.contains(k.as_str()))
        })
        .count()
}
