//! Registry key derivation.
//!
//! Lookups are insensitive to case and to the separator style of their
//! inputs: "Words in Context", "words-in-context" and "WORDS_IN_CONTEXT"
//! all normalize to `words-in-context`.

use std::fmt;

use super::record::{Difficulty, PromptRecord};

/// Normalize a skill or domain name for indexing.
///
/// Trims, lowercases and collapses every run of whitespace, `-` or `_` into a
/// single hyphen. Other punctuation is kept as-is.
pub fn normalize_component(value: &str) -> String {
    value
        .to_lowercase()
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Index key for a prompt record.
///
/// Kept as three separate fields so that two different triples can never
/// collide, even when names themselves contain hyphens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegistryKey {
    skill: String,
    domain: String,
    difficulty: Difficulty,
}

impl RegistryKey {
    pub fn new(skill: &str, domain: &str, difficulty: Difficulty) -> Self {
        Self {
            skill: normalize_component(skill),
            domain: normalize_component(domain),
            difficulty,
        }
    }

    pub fn for_record(record: &PromptRecord) -> Self {
        Self::new(&record.skill, &record.domain, record.difficulty)
    }
}

impl fmt::Display for RegistryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.skill, self.domain, self.difficulty)
    }
}
