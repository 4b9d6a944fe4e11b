use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum QuestionCategory {
    Technical,
    Behavioral,
    Situational,
    Motivational,
}

impl QuestionCategory {
    pub const ALL: [QuestionCategory; 4] = [
        QuestionCategory::Technical,
        QuestionCategory::Behavioral,
        QuestionCategory::Situational,
        QuestionCategory::Motivational,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionCategory::Technical => "technical",
            QuestionCategory::Behavioral => "behavioral",
            QuestionCategory::Situational => "situational",
            QuestionCategory::Motivational => "motivational",
        }
    }

    /// Human-facing label shown next to a question.
    pub fn display_name(&self) -> &'static str {
        match self {
            QuestionCategory::Technical => "Technical Skills",
            QuestionCategory::Behavioral => "Behavioral",
            QuestionCategory::Situational => "Situational",
            QuestionCategory::Motivational => "Motivational",
        }
    }
}

impl fmt::Display for QuestionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

/// A single catalog question. Immutable once loaded; sessions hold it behind an `Arc`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Question {
    pub text: String,
    pub category: QuestionCategory,
    /// Expected terms, matched case-insensitively as substrings of the answer.
    /// Catalog order is preserved; it drives the order of "missing keyword" hints.
    pub keywords: Vec<String>,
    pub difficulty: Difficulty,
}

impl Question {
    pub fn new(
        text: impl Into<String>,
        category: QuestionCategory,
        keywords: &[&str],
        difficulty: Difficulty,
    ) -> Self {
        Self {
            text: text.into(),
            category,
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            difficulty,
        }
    }
}
