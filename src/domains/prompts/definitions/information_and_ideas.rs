//! Information and Ideas domain definition.

use chrono::NaiveDate;

use super::{DomainDefinition, Section, SkillSpec};

/// Reading and Writing: comprehension, analysis and use of textual and
/// quantitative evidence.
pub struct InformationAndIdeas;

const SKILLS: &[SkillSpec] = &[
    SkillSpec {
        name: "Central Ideas and Details",
        focus: "Identify the main idea of a passage or a key supporting detail \
                without overreaching beyond what the text states.",
    },
    SkillSpec {
        name: "Command of Evidence",
        focus: "Select the quotation or the data from a table or graph that best \
                supports, illustrates or weakens a stated claim.",
    },
    SkillSpec {
        name: "Inferences",
        focus: "Complete a passage with the conclusion that follows most logically \
                from the information it gives.",
    },
];

impl DomainDefinition for InformationAndIdeas {
    const NAME: &'static str = "Information and Ideas";
    const SECTION: Section = Section::ReadingAndWriting;
    const VERSION: &'static str = "1.2";

    fn skills() -> &'static [SkillSpec] {
        SKILLS
    }

    fn last_updated() -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(2025, 2, 10)
    }
}
