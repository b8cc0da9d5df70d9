//! Skill list normalization
//!
//! The backend has stored skills in two historical shapes: a bare name
//! string and a `{ name, proficiency }` record. [`Skill`] models both as an
//! explicit sum type, and the operations here are the single place the two
//! shapes are reconciled; everything else treats skills as name plus
//! proficiency. Name comparison is case-sensitive exact match throughout.

use serde::{Deserialize, Serialize};

/// Proficiency level of a skill
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Proficiency {
    /// Default level for newly added skills
    #[default]
    Beginner,

    /// Comfortable with the basics
    Intermediate,

    /// Works independently
    Advanced,

    /// Deep expertise
    Expert,
}

/// A skill in either of its two legacy wire representations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Skill {
    /// Modern form: name with a proficiency level
    Rated {
        /// Skill name
        name: String,
        /// Proficiency level
        proficiency: Proficiency,
    },

    /// Legacy form: just the name
    Bare(String),
}

impl Skill {
    /// The skill name, regardless of representation.
    pub fn name(&self) -> &str {
        match self {
            Skill::Rated { name, .. } => name,
            Skill::Bare(name) => name,
        }
    }

    /// The proficiency level; legacy bare entries default to Beginner.
    pub fn proficiency(&self) -> Proficiency {
        match self {
            Skill::Rated { proficiency, .. } => *proficiency,
            Skill::Bare(_) => Proficiency::Beginner,
        }
    }

    /// The canonical rated form of this skill.
    pub fn normalized(&self) -> Skill {
        Skill::Rated {
            name: self.name().to_string(),
            proficiency: self.proficiency(),
        }
    }
}

/// Normalize every skill in a list to the rated form.
pub fn normalize_all(list: &[Skill]) -> Vec<Skill> {
    list.iter().map(Skill::normalized).collect()
}

/// Append a new skill with Beginner proficiency.
///
/// The raw name is trimmed first; an empty result or a name already present
/// in the list (in either representation) makes this a no-op.
pub fn add_skill(list: &[Skill], raw_name: &str) -> Vec<Skill> {
    let name = raw_name.trim();
    if name.is_empty() || list.iter().any(|skill| skill.name() == name) {
        return list.to_vec();
    }

    let mut skills = list.to_vec();
    skills.push(Skill::Rated {
        name: name.to_string(),
        proficiency: Proficiency::Beginner,
    });
    skills
}

/// Filter out any skill whose name matches, in either representation.
pub fn remove_skill(list: &[Skill], name: &str) -> Vec<Skill> {
    list.iter()
        .filter(|skill| skill.name() != name)
        .cloned()
        .collect()
}

/// Rename the skill at `index`, upgrading a bare entry to the rated form
/// with Beginner proficiency. Out-of-range indices are a no-op.
pub fn update_skill_name(list: &[Skill], index: usize, name: &str) -> Vec<Skill> {
    let mut skills = list.to_vec();
    if let Some(skill) = skills.get_mut(index) {
        *skill = Skill::Rated {
            name: name.to_string(),
            proficiency: skill.proficiency(),
        };
    }
    skills
}

/// Set the proficiency of the skill at `index`, upgrading a bare entry to
/// the rated form. Out-of-range indices are a no-op.
pub fn update_skill_proficiency(list: &[Skill], index: usize, proficiency: Proficiency) -> Vec<Skill> {
    let mut skills = list.to_vec();
    if let Some(skill) = skills.get_mut(index) {
        *skill = Skill::Rated {
            name: skill.name().to_string(),
            proficiency,
        };
    }
    skills
}
