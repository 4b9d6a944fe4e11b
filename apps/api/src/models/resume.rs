use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Structured summary of a resume used as an input signal to question selection.
///
/// Created once per session and never mutated. `ResumeSignal::default()` is the
/// "no resume" value: empty collections and a zero score.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ResumeSignal {
    /// category → skills found in that category
    #[serde(default)]
    pub skills: BTreeMap<String, BTreeSet<String>>,
    #[serde(default)]
    pub experience_years: Option<u32>,
    #[serde(default)]
    pub degrees: BTreeSet<String>,
    #[serde(default)]
    pub overall_score: f64,
}

impl ResumeSignal {
    pub fn is_empty(&self) -> bool {
        self.skills.values().all(|s| s.is_empty())
            && self.experience_years.is_none()
            && self.degrees.is_empty()
    }

    /// All skills across categories, lowercased.
    pub fn all_skills(&self) -> BTreeSet<String> {
        self.skills
            .values()
            .flat_map(|set| set.iter().map(|s| s.to_lowercase()))
            .collect()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ResumeScores {
    pub skills_score: f64,
    pub experience_score: f64,
    pub education_score: f64,
    pub overall_score: f64,
}

/// Full resume quality report returned to the candidate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResumeAnalysis {
    pub word_count: usize,
    pub char_count: usize,
    pub signal: ResumeSignal,
    pub scores: ResumeScores,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ResumeErrorKind {
    UnsupportedFormat,
    Unreadable,
    Empty,
}

/// Result of the document boundary: either a typed analysis or a typed failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ResumeOutcome {
    Analyzed(ResumeAnalysis),
    Failed {
        kind: ResumeErrorKind,
        message: String,
    },
}

impl ResumeOutcome {
    /// The signal to feed into question selection; failures degrade to "no resume".
    pub fn signal(&self) -> Option<&ResumeSignal> {
        match self {
            ResumeOutcome::Analyzed(analysis) => Some(&analysis.signal),
            ResumeOutcome::Failed { .. } => None,
        }
    }
}
