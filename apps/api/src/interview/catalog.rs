//! Question Bank — per-role question catalog with a built-in fallback set.
//!
//! The catalog is loaded once at startup. An override file may replace the built-in
//! set; a missing or malformed file is logged and ignored, never surfaced to callers.

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::models::question::{Difficulty, Question, QuestionCategory};

/// Role used whenever a requested role has no question set.
pub const DEFAULT_ROLE: &str = "software_engineer";

/// Roles the UI offers, with display names.
pub const JOB_ROLES: &[(&str, &str)] = &[
    ("software_engineer", "Software Engineer"),
    ("data_scientist", "Data Scientist"),
    ("product_manager", "Product Manager"),
    ("ux_designer", "UX Designer"),
    ("marketing_specialist", "Marketing Specialist"),
];

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid catalog: {0}")]
    Invalid(String),
}

/// On-disk record: `{ "<role>": [{ "question", "type", "keywords", "difficulty"? }] }`
#[derive(Debug, Deserialize)]
struct QuestionRecord {
    question: String,
    #[serde(rename = "type")]
    category: QuestionCategory,
    #[serde(default)]
    keywords: Vec<String>,
    #[serde(default)]
    difficulty: Difficulty,
}

impl From<QuestionRecord> for Question {
    fn from(record: QuestionRecord) -> Self {
        Question {
            text: record.question,
            category: record.category,
            keywords: dedup_keywords(record.keywords),
            difficulty: record.difficulty,
        }
    }
}

/// Where the active catalog came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogSource {
    File,
    BuiltIn,
}

#[derive(Debug, Clone)]
pub struct QuestionBank {
    roles: HashMap<String, Vec<Arc<Question>>>,
    source: CatalogSource,
}

impl QuestionBank {
    /// The catalog shipped with the service.
    pub fn built_in() -> Self {
        Self::from_roles(default_questions(), CatalogSource::BuiltIn)
    }

    /// Loads the override file at `path`, falling back to the built-in catalog when the
    /// file is absent or malformed.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            warn!(
                "Questions file {} not found. Using default questions.",
                path.display()
            );
            return Self::built_in();
        }

        match Self::from_file(path) {
            Ok(bank) => {
                info!(
                    "Loaded question catalog from {} ({} roles)",
                    path.display(),
                    bank.roles.len()
                );
                bank
            }
            Err(e) => {
                warn!(
                    "Questions file {} is unusable ({e}). Using default questions.",
                    path.display()
                );
                Self::built_in()
            }
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let records: HashMap<String, Vec<QuestionRecord>> = serde_json::from_str(raw)?;

        if let Some((role, _)) = records.iter().find(|(_, qs)| qs.is_empty()) {
            return Err(CatalogError::Invalid(format!("role '{role}' has no questions")));
        }
        if !records.contains_key(DEFAULT_ROLE) {
            return Err(CatalogError::Invalid(format!(
                "default role '{DEFAULT_ROLE}' is missing"
            )));
        }

        let roles = records
            .into_iter()
            .map(|(role, qs)| (role, qs.into_iter().map(Question::from).collect()))
            .collect();

        Ok(Self::from_roles(roles, CatalogSource::File))
    }

    fn from_roles(roles: HashMap<String, Vec<Question>>, source: CatalogSource) -> Self {
        let roles = roles
            .into_iter()
            .map(|(role, qs)| (role, qs.into_iter().map(Arc::new).collect()))
            .collect();
        Self { roles, source }
    }

    /// Questions for `job_role` in catalog order. Unknown roles get the default role's set.
    pub fn questions_for(&self, job_role: &str) -> &[Arc<Question>] {
        self.roles
            .get(job_role)
            .or_else(|| self.roles.get(DEFAULT_ROLE))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn has_role(&self, job_role: &str) -> bool {
        self.roles.contains_key(job_role)
    }

    pub fn source(&self) -> CatalogSource {
        self.source
    }

    /// Roles with their own question set, sorted.
    pub fn roles(&self) -> Vec<&str> {
        let mut roles: Vec<&str> = self.roles.keys().map(String::as_str).collect();
        roles.sort_unstable();
        roles
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::built_in()
    }
}

/// Display name for a role key, if it is one of the advertised roles.
pub fn role_display_name(job_role: &str) -> Option<&'static str> {
    JOB_ROLES
        .iter()
        .find(|(key, _)| *key == job_role)
        .map(|(_, name)| *name)
}

fn dedup_keywords(keywords: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    keywords
        .into_iter()
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty() && seen.insert(k.to_lowercase()))
        .collect()
}

fn default_questions() -> HashMap<String, Vec<Question>> {
    use Difficulty::*;
    use QuestionCategory::*;

    HashMap::from([
        (
            "software_engineer".to_string(),
            vec![
                Question::new(
                    "Can you explain object-oriented programming and its main principles?",
                    Technical,
                    &["encapsulation", "inheritance", "polymorphism", "abstraction", "classes", "objects"],
                    Medium,
                ),
                Question::new(
                    "Describe a challenging technical problem you solved and how you approached it.",
                    Behavioral,
                    &["problem", "solution", "approach", "challenge", "result", "learning"],
                    Medium,
                ),
                Question::new(
                    "How do you ensure code quality and what testing methodologies do you use?",
                    Technical,
                    &["testing", "quality", "unit tests", "integration", "code review", "best practices"],
                    Medium,
                ),
            ],
        ),
        (
            "data_scientist".to_string(),
            vec![
                Question::new(
                    "Explain the difference between supervised and unsupervised learning.",
                    Technical,
                    &["supervised", "unsupervised", "labeled data", "clustering", "classification", "training"],
                    Medium,
                ),
                Question::new(
                    "How do you handle missing data in a dataset?",
                    Technical,
                    &["missing data", "imputation", "removal", "analysis", "strategy", "impact"],
                    Hard,
                ),
            ],
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_built_in_has_default_role() {
        let bank = QuestionBank::built_in();
        assert_eq!(bank.source(), CatalogSource::BuiltIn);
        assert_eq!(bank.questions_for(DEFAULT_ROLE).len(), 3);
        assert_eq!(bank.questions_for("data_scientist").len(), 2);
    }

    #[test]
    fn test_unknown_role_falls_back_to_default() {
        let bank = QuestionBank::built_in();
        let fallback = bank.questions_for("astronaut");
        assert_eq!(fallback, bank.questions_for(DEFAULT_ROLE));
        assert!(!bank.has_role("astronaut"));
    }

    #[test]
    fn test_catalog_order_is_preserved() {
        let bank = QuestionBank::built_in();
        let qs = bank.questions_for(DEFAULT_ROLE);
        assert!(qs[0].text.contains("object-oriented"));
        assert_eq!(qs[1].category, QuestionCategory::Behavioral);
        assert_eq!(qs[0].keywords[0], "encapsulation");
    }

    #[test]
    fn test_from_json_parses_records() {
        let raw = r#"{
            "software_engineer": [
                {"question": "What is Rust?", "type": "technical", "keywords": ["ownership", "Ownership", "borrowing"]}
            ],
            "ux_designer": [
                {"question": "Why design?", "type": "motivational", "keywords": [], "difficulty": "easy"}
            ]
        }"#;
        let bank = QuestionBank::from_json(raw).unwrap();
        assert_eq!(bank.source(), CatalogSource::File);

        let q = &bank.questions_for(DEFAULT_ROLE)[0];
        assert_eq!(q.text, "What is Rust?");
        assert_eq!(q.keywords, vec!["ownership", "borrowing"]);
        assert_eq!(q.difficulty, Difficulty::Medium);

        let ux = &bank.questions_for("ux_designer")[0];
        assert_eq!(ux.category, QuestionCategory::Motivational);
        assert_eq!(ux.difficulty, Difficulty::Easy);
        assert_eq!(bank.roles(), vec!["software_engineer", "ux_designer"]);
    }

    #[test]
    fn test_from_json_rejects_missing_default_role() {
        let raw = r#"{"data_scientist": [{"question": "Q", "type": "technical", "keywords": []}]}"#;
        assert!(matches!(
            QuestionBank::from_json(raw),
            Err(CatalogError::Invalid(_))
        ));
    }

    #[test]
    fn test_from_json_rejects_empty_role() {
        let raw = r#"{
            "software_engineer": [{"question": "Q", "type": "technical", "keywords": ["x"]}],
            "ux_designer": []
        }"#;
        match QuestionBank::from_json(raw) {
            Err(CatalogError::Invalid(reason)) => assert!(reason.contains("ux_designer")),
            other => panic!("expected invalid catalog, got {other:?}"),
        }
    }

    #[test]
    fn test_load_file_with_empty_role_uses_built_in() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"software_engineer": [{{"question": "Only one", "type": "technical", "keywords": []}}], "ux_designer": []}}"#
        )
        .unwrap();
        let bank = QuestionBank::load_or_default(file.path());
        assert_eq!(bank.source(), CatalogSource::BuiltIn);
        assert_eq!(bank.questions_for(DEFAULT_ROLE).len(), 3);
    }

    #[test]
    fn test_from_json_rejects_unknown_category() {
        let raw = r#"{"software_engineer": [{"question": "Q", "type": "trivia", "keywords": []}]}"#;
        assert!(matches!(
            QuestionBank::from_json(raw),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_load_missing_file_uses_built_in() {
        let dir = tempfile::tempdir().unwrap();
        let bank = QuestionBank::load_or_default(dir.path().join("nope.json"));
        assert_eq!(bank.source(), CatalogSource::BuiltIn);
    }

    #[test]
    fn test_load_malformed_file_uses_built_in() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let bank = QuestionBank::load_or_default(file.path());
        assert_eq!(bank.source(), CatalogSource::BuiltIn);
        assert_eq!(bank.questions_for(DEFAULT_ROLE).len(), 3);
    }

    #[test]
    fn test_load_valid_file_overrides_built_in() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"software_engineer": [{{"question": "Only one", "type": "situational", "keywords": ["x"]}}]}}"#
        )
        .unwrap();
        let bank = QuestionBank::load_or_default(file.path());
        assert_eq!(bank.source(), CatalogSource::File);
        assert_eq!(bank.questions_for("data_scientist").len(), 1);
    }

    #[test]
    fn test_role_display_name() {
        assert_eq!(role_display_name("ux_designer"), Some("UX Designer"));
        assert_eq!(role_display_name("astronaut"), None);
    }
}
