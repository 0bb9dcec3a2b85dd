//! Domain definitions module.
//!
//! Each SAT domain is defined in its own file with:
//! - Metadata (name, section, catalog version)
//! - The skills it tests, each with a short focus description
//!
//! Records are expanded to one template per skill and difficulty by
//! [`build_records`].
//!
//! ## Adding a New Domain
//!
//! 1. Create a new file (e.g., `my_domain.rs`)
//! 2. Implement the `DomainDefinition` trait
//! 3. Export it here
//! 4. Register it in `LoaderTable::builtin()` (`loader.rs`)

mod advanced_math;
mod algebra;
mod craft_and_structure;
mod expression_of_ideas;
mod geometry_and_trigonometry;
mod information_and_ideas;
mod problem_solving_and_data_analysis;
mod standard_english_conventions;

pub use advanced_math::AdvancedMath;
pub use algebra::Algebra;
pub use craft_and_structure::CraftAndStructure;
pub use expression_of_ideas::ExpressionOfIdeas;
pub use geometry_and_trigonometry::GeometryAndTrigonometry;
pub use information_and_ideas::InformationAndIdeas;
pub use problem_solving_and_data_analysis::ProblemSolvingAndDataAnalysis;
pub use standard_english_conventions::StandardEnglishConventions;

use chrono::NaiveDate;

use super::record::{Difficulty, PromptRecord};

/// Test section a domain belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    ReadingAndWriting,
    Math,
}

impl Section {
    pub fn label(&self) -> &'static str {
        match self {
            Section::ReadingAndWriting => "Reading and Writing",
            Section::Math => "Math",
        }
    }
}

/// A tested skill and what its questions should target.
#[derive(Debug, Clone, Copy)]
pub struct SkillSpec {
    pub name: &'static str,
    pub focus: &'static str,
}

/// Trait for domain definitions.
///
/// Each domain must implement this trait to provide its metadata and skills.
pub trait DomainDefinition {
    /// Display name of the domain, e.g. "Information and Ideas".
    const NAME: &'static str;

    const SECTION: Section;

    /// Version tag stamped on every record of this domain.
    const VERSION: &'static str = "1.0";

    /// The skills tested in this domain.
    fn skills() -> &'static [SkillSpec];

    /// Date the domain's templates were last revised.
    fn last_updated() -> Option<NaiveDate> {
        None
    }
}

/// Expand a domain definition into one record per skill and difficulty.
pub fn build_records<D: DomainDefinition>() -> Vec<PromptRecord> {
    let mut records = Vec::with_capacity(D::skills().len() * Difficulty::ALL.len());
    for skill in D::skills() {
        for difficulty in Difficulty::ALL {
            records.push(PromptRecord {
                skill: skill.name.to_string(),
                domain: D::NAME.to_string(),
                difficulty,
                template: compose_template(D::SECTION, D::NAME, skill, difficulty),
                version: Some(D::VERSION.to_string()),
                last_updated: D::last_updated(),
            });
        }
    }
    records
}

fn difficulty_guidance(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => {
            "Target an easy item: a single reasoning step, familiar vocabulary, \
             and distractors that are clearly wrong on a careful read."
        }
        Difficulty::Medium => {
            "Target a medium item: two reasoning steps, moderately complex \
             language, and at least one distractor that is plausible on a quick read."
        }
        Difficulty::Hard => {
            "Target a hard item: multi-step reasoning, dense or abstract material, \
             and distractors that each reflect a specific, common misreading."
        }
    }
}

fn format_guidance(section: Section) -> &'static str {
    match section {
        Section::ReadingAndWriting => {
            "Each stimulus is a single short passage (or a pair of passages) of \
             25 to 150 words followed by one four-option multiple-choice question."
        }
        Section::Math => {
            "Each item is either four-option multiple choice or a student-produced \
             response; for student-produced responses leave \"choices\" empty and \
             give every acceptable form of the answer."
        }
    }
}

fn compose_template(
    section: Section,
    domain: &str,
    skill: &SkillSpec,
    difficulty: Difficulty,
) -> String {
    format!(
        "You are writing original practice material for the digital SAT {section} section.\n\
         \n\
         Domain: {domain}\n\
         Skill: {skill}\n\
         Difficulty: {difficulty}\n\
         \n\
         Skill focus: {focus}\n\
         \n\
         {guidance}\n\
         {format}\n\
         \n\
         {{{{#if topic}}}}Set the stimulus in this subject area: {{{{topic}}}}.\n\
         {{{{/if}}}}Produce {{{{count}}}} question(s). Return a JSON array where each element has \
         the fields \"stimulus\", \"question\", \"choices\", \"answer\" and \"rationale\". \
         The rationale explains why the answer is correct and why each other choice is not.",
        section = section.label(),
        skill = skill.name,
        focus = skill.focus,
        guidance = difficulty_guidance(difficulty),
        format = format_guidance(section),
    )
}
