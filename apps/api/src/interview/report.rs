//! Report aggregation — rolls the answer log up into a final verdict.
//!
//! Two independent bandings are reported: `tier` from the overall percentage and the
//! narrative adjective from the average per-question score.

use serde::{Deserialize, Serialize};

use crate::interview::scorer::MAX_SCORE;
use crate::models::resume::ResumeSignal;
use crate::models::session::AnsweredResponse;

pub const NO_RESPONSES_NARRATIVE: &str = "No responses to evaluate.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreTier {
    Excellent, // [80, 100]
    Good,      // [60, 80)
    Average,   // [40, 60)
    Poor,      // [0, 40)
}

impl ScoreTier {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 80.0 {
            ScoreTier::Excellent
        } else if percentage >= 60.0 {
            ScoreTier::Good
        } else if percentage >= 40.0 {
            ScoreTier::Average
        } else {
            ScoreTier::Poor
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreTier::Excellent => "Excellent",
            ScoreTier::Good => "Good",
            ScoreTier::Average => "Average",
            ScoreTier::Poor => "Needs Improvement",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Report {
    pub total_score: f64,
    pub max_possible: u32,
    pub percentage: f64,
    pub tier: ScoreTier,
    pub tier_label: String,
    pub average_score: f64,
    pub answered: usize,
    pub narrative: String,
    pub resume_overall_score: Option<f64>,
    pub responses: Vec<AnsweredResponse>,
}

pub fn summarize(responses: &[AnsweredResponse], resume: Option<&ResumeSignal>) -> Report {
    let answered = responses.len();
    let total_score: f64 = responses.iter().map(|r| r.score).sum();
    let max_possible = answered as u32 * MAX_SCORE as u32;

    let percentage = if max_possible > 0 {
        total_score / max_possible as f64 * 100.0
    } else {
        0.0
    };
    let average_score = if answered > 0 {
        total_score / answered as f64
    } else {
        0.0
    };

    let tier = ScoreTier::from_percentage(percentage);

    Report {
        total_score,
        max_possible,
        percentage,
        tier,
        tier_label: tier.label().to_string(),
        average_score,
        answered,
        narrative: build_narrative(responses),
        resume_overall_score: resume.map(|r| r.overall_score),
        responses: responses.to_vec(),
    }
}

/// Performance adjective for an average per-question score.
pub fn strength_label(average_score: f64) -> &'static str {
    if average_score >= 8.0 {
        "strong"
    } else if average_score >= 6.0 {
        "good"
    } else if average_score >= 4.0 {
        "average"
    } else {
        "needs improvement"
    }
}

fn build_narrative(responses: &[AnsweredResponse]) -> String {
    if responses.is_empty() {
        return NO_RESPONSES_NARRATIVE.to_string();
    }
    let total: f64 = responses.iter().map(|r| r.score).sum();
    let average = total / responses.len() as f64;
    format!(
        "Overall, you demonstrated {} performance in this interview with an average score of {:.1}/10.",
        strength_label(average),
        average
    )
}
