//! Craft and Structure domain definition.

use super::{DomainDefinition, Section, SkillSpec};

pub struct CraftAndStructure;

const SKILLS: &[SkillSpec] = &[
    SkillSpec {
        name: "Words in Context",
        focus: "Choose the word or phrase whose precise meaning fits the context, \
                including less common senses of familiar words.",
    },
    SkillSpec {
        name: "Text Structure and Purpose",
        focus: "Describe the overall structure of a passage or the function of a \
                particular sentence within it.",
    },
    SkillSpec {
        name: "Cross-Text Connections",
        focus: "Compare two short passages on the same topic and predict how one \
                author would respond to the other.",
    },
];

impl DomainDefinition for CraftAndStructure {
    const NAME: &'static str = "Craft and Structure";
    const SECTION: Section = Section::ReadingAndWriting;

    fn skills() -> &'static [SkillSpec] {
        SKILLS
    }
}
