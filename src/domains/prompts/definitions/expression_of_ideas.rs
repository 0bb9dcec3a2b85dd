//! Expression of Ideas domain definition.

use super::{DomainDefinition, Section, SkillSpec};

/// Reading and Writing: revising text to meet a rhetorical goal.
pub struct ExpressionOfIdeas;

const SKILLS: &[SkillSpec] = &[
    SkillSpec {
        name: "Rhetorical Synthesis",
        focus: "Given a bulleted list of student notes, pick the sentence that uses \
                the notes to accomplish a stated goal.",
    },
    SkillSpec {
        name: "Transitions",
        focus: "Choose the transition word or phrase that expresses the logical \
                relationship between two sentences.",
    },
];

impl DomainDefinition for ExpressionOfIdeas {
    const NAME: &'static str = "Expression of Ideas";
    const SECTION: Section = Section::ReadingAndWriting;

    fn skills() -> &'static [SkillSpec] {
        SKILLS
    }
}
