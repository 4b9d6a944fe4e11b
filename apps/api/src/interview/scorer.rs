//! Answer Scoring — pluggable, trait-based rubric for a single free-text answer.
//!
//! Default: `KeywordRubricScorer` (pure, deterministic, no I/O).
//!
//! `InterviewService` holds an `Arc<dyn AnswerScorer>`, so the rubric can be swapped
//! without touching session or handler code.

use serde::{Deserialize, Serialize};

use crate::models::question::Question;
use crate::models::session::AnswerDetail;

/// Points available from keyword coverage.
pub const KEYWORD_POINTS: f64 = 6.0;
/// Points available from answer length.
pub const LENGTH_POINTS: f64 = 4.0;
/// Words per length point.
pub const WORDS_PER_POINT: f64 = 25.0;
pub const MAX_SCORE: f64 = 10.0;

/// Max number of missing keywords suggested in low-tier feedback.
const MISSING_HINT_LIMIT: usize = 3;

pub const EMPTY_ANSWER_FEEDBACK: &str = "Please provide an answer to the question.";

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

/// Per-answer feedback bucket, evaluated high to low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackTier {
    Excellent,   // ≥ 8
    Good,        // ≥ 6
    Average,     // ≥ 4
    NeedsImprovement,
}

impl FeedbackTier {
    pub fn from_score(score: f64) -> Self {
        if score >= 8.0 {
            FeedbackTier::Excellent
        } else if score >= 6.0 {
            FeedbackTier::Good
        } else if score >= 4.0 {
            FeedbackTier::Average
        } else {
            FeedbackTier::NeedsImprovement
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoredAnswer {
    pub score: f64, // 0.0 – 10.0, one decimal
    pub tier: FeedbackTier,
    pub feedback: String,
    pub detail: AnswerDetail,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Scores one answer against its question. Implementations must be pure and must
/// keep the score within `0.0..=10.0`.
pub trait AnswerScorer: Send + Sync {
    fn score(&self, answer: &str, question: &Question) -> ScoredAnswer;
}

// ────────────────────────────────────────────────────────────────────────────
// KeywordRubricScorer — default implementation
// ────────────────────────────────────────────────────────────────────────────

/// Keyword + length rubric.
///
/// Algorithm:
/// 1. Empty (after trim) → 0 with an "please answer" message
/// 2. keyword_score = found / total × 6 (0 when the question has no keywords)
/// 3. length_score = min(4, words / 25)
/// 4. score = min(10, keyword_score + length_score), rounded to one decimal
/// 5. Feedback tier by score: ≥8, ≥6, ≥4, else list up to 3 missing keywords
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordRubricScorer;

impl AnswerScorer for KeywordRubricScorer {
    fn score(&self, answer: &str, question: &Question) -> ScoredAnswer {
        score_answer(answer, question)
    }
}

pub fn score_answer(answer: &str, question: &Question) -> ScoredAnswer {
    if answer.trim().is_empty() {
        return ScoredAnswer {
            score: 0.0,
            tier: FeedbackTier::NeedsImprovement,
            feedback: EMPTY_ANSWER_FEEDBACK.to_string(),
            detail: AnswerDetail::default(),
        };
    }

    let answer_lower = answer.to_lowercase();
    let keywords_matched: Vec<String> = question
        .keywords
        .iter()
        .filter(|k| answer_lower.contains(&k.to_lowercase()))
        .cloned()
        .collect();

    let keyword_score = if question.keywords.is_empty() {
        0.0
    } else {
        keywords_matched.len() as f64 / question.keywords.len() as f64 * KEYWORD_POINTS
    };

    let word_count = count_words(answer);
    let length_score = (word_count as f64 / WORDS_PER_POINT).min(LENGTH_POINTS);

    let score = round_one_decimal((keyword_score + length_score).min(MAX_SCORE));
    let tier = FeedbackTier::from_score(score);
    let feedback = build_feedback(tier, &answer_lower, &question.keywords);

    ScoredAnswer {
        score,
        tier,
        feedback,
        detail: AnswerDetail {
            word_count,
            sentence_count: count_sentences(answer),
            keywords_matched,
            keyword_score,
            length_score,
        },
    }
}

/// Maximal runs of non-whitespace.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Non-blank segments delimited by `.`, `!` or `?`.
pub fn count_sentences(text: &str) -> usize {
    text.split(['.', '!', '?'])
        .filter(|segment| !segment.trim().is_empty())
        .count()
}

/// Rounds to one decimal against the exact binary value, ties to even.
/// `value * 10.0` alone can land on a false `.5` (0.95 is stored just below it).
pub fn round_one_decimal(value: f64) -> f64 {
    let lower = (value * 10.0).floor();
    // sign of the exact `value * 10 - (lower + 0.5)`; a single rounding keeps it
    let diff = value.mul_add(10.0, -(lower + 0.5));
    let tenths = if diff > 0.0 || (diff == 0.0 && lower % 2.0 != 0.0) {
        lower + 1.0
    } else {
        lower
    };
    tenths / 10.0
}

fn build_feedback(tier: FeedbackTier, answer_lower: &str, keywords: &[String]) -> String {
    match tier {
        FeedbackTier::Excellent => {
            "Excellent answer! You covered the key points clearly and thoroughly.".to_string()
        }
        FeedbackTier::Good => {
            "Good answer. You mentioned some relevant points but could add more detail."
                .to_string()
        }
        FeedbackTier::Average => {
            "Average answer. Consider providing more specific examples and details.".to_string()
        }
        FeedbackTier::NeedsImprovement => {
            let missing: Vec<&str> = keywords
                .iter()
                .filter(|k| !answer_lower.contains(&k.to_lowercase()))
                .take(MISSING_HINT_LIMIT)
                .map(String::as_str)
                .collect();
            if missing.is_empty() {
                "Please provide a more detailed and structured answer.".to_string()
            } else {
                format!("Try to include concepts like: {}", missing.join(", "))
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::question::{Difficulty, QuestionCategory};

    fn make_question(keywords: &[&str]) -> Question {
        Question::new(
            "Can you explain object-oriented programming?",
            QuestionCategory::Technical,
            keywords,
            Difficulty::Medium,
        )
    }

    fn oop_question() -> Question {
        make_question(&[
            "encapsulation",
            "inheritance",
            "polymorphism",
            "abstraction",
            "classes",
            "objects",
        ])
    }

    fn filler(words: usize) -> String {
        vec!["word"; words].join(" ")
    }

    #[test]
    fn test_two_keywords_thirty_words() {
        // 2 keywords + 28 filler words = 30 words
        let answer = format!("encapsulation inheritance {}", filler(28));
        let scored = score_answer(&answer, &oop_question());

        assert!((scored.detail.keyword_score - 2.0).abs() < 1e-9);
        assert!((scored.detail.length_score - 1.2).abs() < 1e-9);
        assert_eq!(scored.score, 3.2);
        assert_eq!(scored.detail.word_count, 30);
        assert_eq!(
            scored.detail.keywords_matched,
            vec!["encapsulation", "inheritance"]
        );
        assert_eq!(scored.tier, FeedbackTier::NeedsImprovement);
        assert_eq!(
            scored.feedback,
            "Try to include concepts like: polymorphism, abstraction, classes"
        );
    }

    #[test]
    fn test_empty_answer_scores_zero() {
        for answer in ["", "   ", "\n\t"] {
            let scored = score_answer(answer, &oop_question());
            assert_eq!(scored.score, 0.0);
            assert_eq!(scored.feedback, EMPTY_ANSWER_FEEDBACK);
            assert_eq!(scored.detail.word_count, 0);
            assert_eq!(scored.detail.sentence_count, 0);
            assert!(scored.detail.keywords_matched.is_empty());
        }
        assert_eq!(score_answer("", &make_question(&[])).score, 0.0);
    }

    #[test]
    fn test_keyword_match_is_case_insensitive_substring() {
        let q = make_question(&["Unit Tests", "integration"]);
        let scored = score_answer("We write UNIT TESTS and integrations.", &q);
        assert_eq!(scored.detail.keywords_matched, vec!["Unit Tests", "integration"]);
        assert!((scored.detail.keyword_score - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_keywords_scores_on_length_only() {
        let q = make_question(&[]);
        let scored = score_answer(&filler(50), &q);
        assert_eq!(scored.detail.keyword_score, 0.0);
        assert_eq!(scored.score, 2.0);
        // no missing keywords to suggest
        assert_eq!(
            scored.feedback,
            "Please provide a more detailed and structured answer."
        );
    }

    #[test]
    fn test_score_capped_at_ten() {
        let answer = format!(
            "encapsulation inheritance polymorphism abstraction classes objects {}",
            filler(200)
        );
        let scored = score_answer(&answer, &oop_question());
        assert_eq!(scored.score, 10.0);
        assert!((scored.detail.length_score - 4.0).abs() < 1e-9);
        assert_eq!(scored.tier, FeedbackTier::Excellent);
    }

    #[test]
    fn test_score_is_bounded_for_varied_inputs() {
        let q = oop_question();
        let inputs = [
            "x".to_string(),
            "objects!!!".to_string(),
            filler(1000),
            "classes. objects? abstraction! ".repeat(40),
        ];
        for answer in &inputs {
            let s = score_answer(answer, &q).score;
            assert!((0.0..=10.0).contains(&s), "score {s} out of range");
        }
    }

    #[test]
    fn test_adding_matched_keywords_never_lowers_score() {
        let q = oop_question();
        let mut answer = filler(10);
        let mut previous = score_answer(&answer, &q).score;
        for kw in &q.keywords {
            answer = format!("{answer} {kw}");
            let current = score_answer(&answer, &q).score;
            assert!(current >= previous, "{current} < {previous}");
            previous = current;
        }
    }

    #[test]
    fn test_feedback_tiers() {
        let q = oop_question();
        // 6/6 keywords = 6.0, plus 50 words = 2.0 → 8.0
        let all = format!(
            "encapsulation inheritance polymorphism abstraction classes objects {}",
            filler(44)
        );
        assert_eq!(score_answer(&all, &q).tier, FeedbackTier::Excellent);

        // 4/6 = 4.0, plus 50 words = 2.0 → 6.0
        let good = format!("encapsulation inheritance polymorphism abstraction {}", filler(46));
        let scored = score_answer(&good, &q);
        assert_eq!(scored.score, 6.0);
        assert_eq!(scored.tier, FeedbackTier::Good);
        assert!(scored.feedback.starts_with("Good answer"));

        // 3/6 = 3.0, plus 25 words = 1.0 → 4.0
        let average = format!("encapsulation inheritance polymorphism {}", filler(22));
        let scored = score_answer(&average, &q);
        assert_eq!(scored.score, 4.0);
        assert_eq!(scored.tier, FeedbackTier::Average);
        assert!(scored.feedback.starts_with("Average answer"));
    }

    #[test]
    fn test_word_and_sentence_counts() {
        assert_eq!(count_words("  one two\tthree\nfour  "), 4);
        assert_eq!(count_words(""), 0);
        assert_eq!(count_sentences("First. Second! Third? "), 3);
        assert_eq!(count_sentences("No terminator"), 1);
        assert_eq!(count_sentences("Wait... what?!"), 2);
    }

    #[test]
    fn test_rounding_to_one_decimal() {
        assert_eq!(round_one_decimal(3.24), 3.2);
        assert_eq!(round_one_decimal(3.26), 3.3);
        assert_eq!(round_one_decimal(0.04), 0.0);
        assert_eq!(round_one_decimal(9.96), 10.0);
        // exact ties go to even
        assert_eq!(round_one_decimal(3.25), 3.2);
        assert_eq!(round_one_decimal(3.75), 3.8);
        // stored just below the tie
        assert_eq!(round_one_decimal(0.95), 0.9);
        assert_eq!(round_one_decimal(0.15), 0.1);
    }

    #[test]
    fn test_near_tie_score_rounds_down() {
        // 1 of 8 keywords (0.75) + 5 words (0.2)
        let question = make_question(&[
            "alpha", "beta", "gamma", "delta", "eps", "zeta", "eta", "theta",
        ]);
        let scored = score_answer("alpha one two three four", &question);
        assert_eq!(scored.detail.keywords_matched, vec!["alpha"]);
        assert_eq!(scored.score, 0.9);
    }

    #[test]
    fn test_trait_object_delegates_to_rubric() {
        let scorer: Box<dyn AnswerScorer> = Box::new(KeywordRubricScorer);
        let q = oop_question();
        assert_eq!(scorer.score("objects", &q), score_answer("objects", &q));
    }
}
