//! Problem-Solving and Data Analysis domain definition.

use super::{DomainDefinition, Section, SkillSpec};

/// Math: quantitative reasoning, statistics and probability.
pub struct ProblemSolvingAndDataAnalysis;

const SKILLS: &[SkillSpec] = &[
    SkillSpec {
        name: "Ratios, rates, proportional relationships, and units",
        focus: "Solve problems with ratios, rates and unit conversions, including \
                multi-step conversions.",
    },
    SkillSpec {
        name: "Percentages",
        focus: "Compute percentages, percent change and successive percent changes.",
    },
    SkillSpec {
        name: "One-variable data: Distributions and measures of center and spread",
        focus: "Compare mean, median, range and standard deviation across data \
                sets shown in tables, dot plots or histograms.",
    },
    SkillSpec {
        name: "Two-variable data: Models and scatterplots",
        focus: "Interpret a line or curve of best fit and use it to make predictions.",
    },
    SkillSpec {
        name: "Probability and conditional probability",
        focus: "Compute probabilities from two-way tables, including conditional \
                probabilities.",
    },
    SkillSpec {
        name: "Inference from sample statistics and margin of error",
        focus: "Draw conclusions about a population from a random sample and \
                reason about margin of error.",
    },
    SkillSpec {
        name: "Evaluating statistical claims: Observational studies and experiments",
        focus: "Decide which conclusions a study design supports, distinguishing \
                association from causation.",
    },
];

impl DomainDefinition for ProblemSolvingAndDataAnalysis {
    const NAME: &'static str = "Problem-Solving and Data Analysis";
    const SECTION: Section = Section::Math;

    fn skills() -> &'static [SkillSpec] {
        SKILLS
    }
}
