//! Resume analysis — pure text heuristics producing a `ResumeAnalysis`.
//!
//! Never fails: text with no recognizable features yields empty collections and
//! zero scores.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use regex::Regex;

use crate::models::resume::{ResumeAnalysis, ResumeScores, ResumeSignal};

const SKILL_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "programming",
        &["python", "java", "javascript", "c++", "c#", "ruby", "php", "swift", "kotlin"],
    ),
    (
        "web_tech",
        &["html", "css", "react", "angular", "vue", "django", "flask", "node.js", "express"],
    ),
    (
        "databases",
        &["mysql", "postgresql", "mongodb", "redis", "sqlite", "oracle"],
    ),
    (
        "cloud",
        &["aws", "azure", "gcp", "docker", "kubernetes", "terraform", "jenkins"],
    ),
    (
        "data_science",
        &["pandas", "numpy", "tensorflow", "pytorch", "scikit-learn", "r", "matplotlib"],
    ),
    (
        "soft_skills",
        &["communication", "leadership", "teamwork", "problem-solving", "creativity", "adaptability"],
    ),
];

/// Resumes shorter than this get a "add more detail" recommendation.
const BRIEF_RESUME_WORDS: usize = 200;

static YEARS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+)\s*\+?\s*years?(?:\s+of)?\s*experience").expect("valid years regex")
});

// Short forms need the dot so ordinary words like "be" and "me" don't count.
static DEGREE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(bachelor|master|phd|mba|b\.?tech|m\.?tech|b\.e|m\.e)\b")
        .expect("valid degree regex")
});

pub fn analyze_resume_text(text: &str) -> ResumeAnalysis {
    let word_count = text.split_whitespace().count();
    let skills = extract_skills(text);
    let experience_years = extract_experience_years(text);
    let degrees = extract_degrees(text);
    let scores = compute_scores(text, &skills, experience_years, &degrees);

    let signal = ResumeSignal {
        skills,
        experience_years,
        degrees,
        overall_score: scores.overall_score,
    };
    let recommendations = build_recommendations(&scores, word_count);

    ResumeAnalysis {
        word_count,
        char_count: text.chars().count(),
        signal,
        scores,
        recommendations,
    }
}

pub fn extract_skills(text: &str) -> BTreeMap<String, BTreeSet<String>> {
    let text_lower = text.to_lowercase();
    SKILL_CATEGORIES
        .iter()
        .filter_map(|(category, skills)| {
            let found: BTreeSet<String> = skills
                .iter()
                .filter(|skill| contains_term(&text_lower, skill))
                .map(|skill| skill.to_string())
                .collect();
            (!found.is_empty()).then(|| (category.to_string(), found))
        })
        .collect()
}

pub fn extract_experience_years(text: &str) -> Option<u32> {
    YEARS_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

pub fn extract_degrees(text: &str) -> BTreeSet<String> {
    DEGREE_RE
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

/// True when `term` occurs in `haystack` without an alphanumeric neighbour on
/// either side. Both arguments are expected lowercase.
fn contains_term(haystack: &str, term: &str) -> bool {
    haystack.match_indices(term).any(|(start, matched)| {
        let before = haystack[..start].chars().next_back();
        let after = haystack[start + matched.len()..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}

fn compute_scores(
    text: &str,
    skills: &BTreeMap<String, BTreeSet<String>>,
    experience_years: Option<u32>,
    degrees: &BTreeSet<String>,
) -> ResumeScores {
    let total_skills: usize = skills.values().map(BTreeSet::len).sum();
    let skills_score = (total_skills as f64 / 2.0).min(10.0);

    let mentions_years = text.chars().any(|c| ('1'..='5').contains(&c));
    let experience_score = if experience_years.is_some() || mentions_years {
        5.0
    } else {
        0.0
    };

    let education_score = (degrees.len() as f64 * 3.0).min(10.0);
    let overall_score = (skills_score + experience_score + education_score) / 3.0;

    ResumeScores {
        skills_score,
        experience_score,
        education_score,
        overall_score,
    }
}

fn build_recommendations(scores: &ResumeScores, word_count: usize) -> Vec<String> {
    let mut recommendations = Vec::new();

    if scores.skills_score < 6.0 {
        recommendations.push("Consider adding more technical skills to your resume".to_string());
    }
    if scores.experience_score < 5.0 {
        recommendations
            .push("Highlight your work experience with specific achievements".to_string());
    }
    if word_count < BRIEF_RESUME_WORDS {
        recommendations.push(
            "Your resume seems brief. Consider adding more details about your projects and achievements"
                .to_string(),
        );
    }
    if recommendations.is_empty() {
        recommendations.push(
            "Your resume looks strong! Focus on preparing for behavioral questions".to_string(),
        );
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        Jane Doe — Backend Engineer
        5+ years of experience building services in Python and Java.
        Deployed on AWS with Docker and Kubernetes; data in PostgreSQL and Redis.
        Bachelor of Science, Computer Science. MBA (2019).
        Known for leadership and communication.
    "#;

    #[test]
    fn test_extracts_skills_by_category() {
        let skills = extract_skills(SAMPLE);
        assert_eq!(
            skills["programming"],
            BTreeSet::from(["java".to_string(), "python".to_string()])
        );
        assert_eq!(skills["cloud"].len(), 3);
        assert_eq!(skills["databases"].len(), 2);
        assert!(skills["soft_skills"].contains("leadership"));
        // "javascript" must not be inferred from "java", nor "r" from any word
        assert!(!skills["programming"].contains("javascript"));
        assert!(!skills.contains_key("data_science"));
    }

    #[test]
    fn test_term_matching_respects_boundaries() {
        assert!(contains_term("i know c++ well", "c++"));
        assert!(contains_term("node.js, express", "node.js"));
        assert!(contains_term("r and python", "r"));
        assert!(!contains_term("react", "r"));
        assert!(!contains_term("javascript", "java"));
    }

    #[test]
    fn test_extracts_experience_years() {
        assert_eq!(extract_experience_years(SAMPLE), Some(5));
        assert_eq!(extract_experience_years("3 years experience"), Some(3));
        assert_eq!(extract_experience_years("12 Years Of Experience"), Some(12));
        assert_eq!(extract_experience_years("lots of experience"), None);
    }

    #[test]
    fn test_extracts_degrees() {
        let degrees = extract_degrees(SAMPLE);
        assert_eq!(
            degrees,
            BTreeSet::from(["bachelor".to_string(), "mba".to_string()])
        );
        assert!(extract_degrees("Let me be clear").is_empty());
        assert!(extract_degrees("B.Tech in CSE").contains("b.tech"));
    }

    #[test]
    fn test_scores_and_recommendations() {
        let analysis = analyze_resume_text(SAMPLE);
        // 2 + 3 + 2 + 2 skills = 9 → 4.5
        assert_eq!(analysis.scores.skills_score, 4.5);
        assert_eq!(analysis.scores.experience_score, 5.0);
        assert_eq!(analysis.scores.education_score, 6.0);
        assert!((analysis.scores.overall_score - 15.5 / 3.0).abs() < 1e-9);
        assert_eq!(analysis.signal.overall_score, analysis.scores.overall_score);
        assert_eq!(analysis.signal.experience_years, Some(5));
        assert!(analysis
            .recommendations
            .iter()
            .any(|r| r.contains("more technical skills")));
        assert!(analysis.recommendations.iter().any(|r| r.contains("brief")));
    }

    #[test]
    fn test_unrecognizable_text_yields_empty_signal() {
        let analysis = analyze_resume_text("¯\\_(ツ)_/¯ nothing here");
        assert!(analysis.signal.is_empty());
        assert_eq!(analysis.scores.overall_score, 0.0);
        assert_eq!(analysis.recommendations.len(), 3);

        let empty = analyze_resume_text("");
        assert_eq!(empty.word_count, 0);
        assert!(empty.signal.skills.is_empty());
    }
}
