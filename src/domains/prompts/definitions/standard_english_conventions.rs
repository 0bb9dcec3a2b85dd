//! Standard English Conventions domain definition.

use super::{DomainDefinition, Section, SkillSpec};

/// Reading and Writing: sentence structure, usage and punctuation.
pub struct StandardEnglishConventions;

const SKILLS: &[SkillSpec] = &[
    SkillSpec {
        name: "Boundaries",
        focus: "Punctuate clause and phrase boundaries correctly, avoiding run-ons, \
                comma splices and fragments.",
    },
    SkillSpec {
        name: "Form, Structure, and Sense",
        focus: "Apply subject-verb agreement, pronoun-antecedent agreement, verb \
                tense and modifier placement.",
    },
];

impl DomainDefinition for StandardEnglishConventions {
    const NAME: &'static str = "Standard English Conventions";
    const SECTION: Section = Section::ReadingAndWriting;

    fn skills() -> &'static [SkillSpec] {
        SKILLS
    }
}
