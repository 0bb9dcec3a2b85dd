//! Geometry and Trigonometry domain definition.

use super::{DomainDefinition, Section, SkillSpec};

pub struct GeometryAndTrigonometry;

const SKILLS: &[SkillSpec] = &[
    SkillSpec {
        name: "Area and volume",
        focus: "Compute area, surface area and volume, including how they scale \
                when dimensions change.",
    },
    SkillSpec {
        name: "Lines, angles, and triangles",
        focus: "Use angle relationships, parallel lines and triangle congruence or \
                similarity to find unknown measures.",
    },
    SkillSpec {
        name: "Right triangles and trigonometry",
        focus: "Apply the Pythagorean theorem, special right triangles and sine, \
                cosine and tangent ratios.",
    },
    SkillSpec {
        name: "Circles",
        focus: "Work with arc length, sector area, radians and the equation of a \
                circle in the xy-plane.",
    },
];

impl DomainDefinition for GeometryAndTrigonometry {
    const NAME: &'static str = "Geometry and Trigonometry";
    const SECTION: Section = Section::Math;

    fn skills() -> &'static [SkillSpec] {
        SKILLS
    }
}
