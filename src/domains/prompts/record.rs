//! Prompt records and difficulty levels.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::PromptError;

/// Difficulty tier of a generated question.
///
/// The derived ordering is the presentation order: easy, medium, hard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All difficulties in ascending order.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = PromptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(PromptError::InvalidDifficulty(s.to_string())),
        }
    }
}

/// A single question-generation template.
///
/// Uniquely identified by its (skill, domain, difficulty) triple and never
/// mutated after loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptRecord {
    pub skill: String,
    pub domain: String,
    pub difficulty: Difficulty,

    /// Instruction text sent to the generation service.
    /// May contain `{{variable}}` placeholders.
    pub template: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<NaiveDate>,
}

impl PromptRecord {
    /// Create a record without version metadata.
    pub fn new(
        skill: impl Into<String>,
        domain: impl Into<String>,
        difficulty: Difficulty,
        template: impl Into<String>,
    ) -> Self {
        Self {
            skill: skill.into(),
            domain: domain.into(),
            difficulty,
            template: template.into(),
            version: None,
            last_updated: None,
        }
    }

    /// Attach version metadata.
    pub fn with_version(mut self, version: impl Into<String>, last_updated: NaiveDate) -> Self {
        self.version = Some(version.into());
        self.last_updated = Some(last_updated);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_parse_is_case_insensitive() {
        assert_eq!(" Easy ".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!("MEDIUM".parse::<Difficulty>().unwrap(), Difficulty::Medium);
        assert_eq!("hard".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert!(matches!(
            "expert".parse::<Difficulty>(),
            Err(PromptError::InvalidDifficulty(_))
        ));
    }

    #[test]
    fn test_difficulty_ordering() {
        let mut levels = vec![Difficulty::Hard, Difficulty::Easy, Difficulty::Medium];
        levels.sort();
        assert_eq!(levels, Difficulty::ALL.to_vec());
    }

    #[test]
    fn test_record_from_json() {
        let json = r#"{
            "skill": "Transitions",
            "domain": "Expression of Ideas",
            "difficulty": "medium",
            "template": "Write a transitions item.",
            "version": "2.1",
            "lastUpdated": "2024-03-01"
        }"#;

        let record: PromptRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.difficulty, Difficulty::Medium);
        assert_eq!(record.version.as_deref(), Some("2.1"));
        assert_eq!(
            record.last_updated,
            NaiveDate::from_ymd_opt(2024, 3, 1)
        );
    }

    #[test]
    fn test_record_metadata_is_optional() {
        let json = r#"{"skill":"Boundaries","domain":"Standard English Conventions","difficulty":"easy","template":"T"}"#;
        let record: PromptRecord = serde_json::from_str(json).unwrap();
        assert!(record.version.is_none());
        assert!(record.last_updated.is_none());
    }
}
