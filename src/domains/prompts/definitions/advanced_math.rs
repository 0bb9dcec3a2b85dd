//! Advanced Math domain definition.

use super::{DomainDefinition, Section, SkillSpec};

/// Math: nonlinear expressions, equations and functions.
pub struct AdvancedMath;

const SKILLS: &[SkillSpec] = &[
    SkillSpec {
        name: "Equivalent expressions",
        focus: "Rewrite polynomial, rational or exponential expressions into an \
                equivalent form that reveals a property of interest.",
    },
    SkillSpec {
        name: "Nonlinear equations in one variable and systems of equations in two variables",
        focus: "Solve quadratic, radical, rational or absolute value equations, and \
                systems that pair a linear and a nonlinear equation.",
    },
    SkillSpec {
        name: "Nonlinear functions",
        focus: "Interpret quadratic and exponential functions in context, including \
                vertex form, growth factors and graph features.",
    },
];

impl DomainDefinition for AdvancedMath {
    const NAME: &'static str = "Advanced Math";
    const SECTION: Section = Section::Math;

    fn skills() -> &'static [SkillSpec] {
        SKILLS
    }
}
