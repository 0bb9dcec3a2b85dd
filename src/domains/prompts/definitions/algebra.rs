//! Algebra domain definition.

use chrono::NaiveDate;

use super::{DomainDefinition, Section, SkillSpec};

/// Math: linear equations, inequalities, functions and systems.
pub struct Algebra;

const SKILLS: &[SkillSpec] = &[
    SkillSpec {
        name: "Linear equations in one variable",
        focus: "Create, solve or interpret a linear equation in one variable, \
                including equations with no solution or infinitely many.",
    },
    SkillSpec {
        name: "Linear functions",
        focus: "Interpret the slope and intercepts of a linear function in context \
                and move between its algebraic, tabular and graphical forms.",
    },
    SkillSpec {
        name: "Linear equations in two variables",
        focus: "Write or interpret a linear equation in two variables that models a \
                situation, including its graph.",
    },
    SkillSpec {
        name: "Systems of two linear equations in two variables",
        focus: "Solve a system of two linear equations, or determine the number of \
                solutions from its coefficients.",
    },
    SkillSpec {
        name: "Linear inequalities in one or two variables",
        focus: "Create or interpret linear inequalities and identify points that \
                satisfy them.",
    },
];

impl DomainDefinition for Algebra {
    const NAME: &'static str = "Algebra";
    const SECTION: Section = Section::Math;
    const VERSION: &'static str = "1.1";

    fn skills() -> &'static [SkillSpec] {
        SKILLS
    }

    fn last_updated() -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(2025, 1, 20)
    }
}
