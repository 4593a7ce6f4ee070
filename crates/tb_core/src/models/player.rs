use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lowest sub-score accepted from the guest entry form.
pub const GUEST_SKILL_MIN: u32 = 1;
/// Highest sub-score accepted from the guest entry form.
pub const GUEST_SKILL_MAX: u32 = 5;

/// A rated player taking part in one team generation run.
///
/// Names are unique within a run. The balancer only looks at
/// [`Participant::total_rating`] and [`Participant::role`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Participant {
    pub name: String,
    pub rating: Rating,
    pub role: Role,
}

impl Participant {
    pub fn new(name: impl Into<String>, rating: Rating, role: Role) -> Self {
        Self { name: name.into(), rating, role }
    }

    pub fn total_rating(&self) -> u64 {
        self.rating.total()
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Total: {}, Pos: {})", self.name, self.total_rating(), self.role.code())
    }
}

/// Skill rating, either a single score or attack/defense/endurance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    Composite(u32),
    Detailed(DimensionTotals),
}

impl Rating {
    pub fn composite(score: u32) -> Self {
        Rating::Composite(score)
    }

    pub fn detailed(attack: u32, defense: u32, endurance: u32) -> Self {
        Rating::Detailed(DimensionTotals { attack, defense, endurance })
    }

    pub fn total(&self) -> u64 {
        match self {
            Rating::Composite(score) => u64::from(*score),
            Rating::Detailed(dims) => dims.total(),
        }
    }

    /// Per-dimension breakdown; `None` for composite ratings.
    pub fn dimensions(&self) -> Option<DimensionTotals> {
        match self {
            Rating::Composite(_) => None,
            Rating::Detailed(dims) => Some(*dims),
        }
    }

    /// Every score must be at least 1.
    pub fn is_positive(&self) -> bool {
        match self {
            Rating::Composite(score) => *score > 0,
            Rating::Detailed(dims) => dims.attack > 0 && dims.defense > 0 && dims.endurance > 0,
        }
    }
}

/// Attack / defense / endurance scores of one detailed rating.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct DimensionTotals {
    pub attack: u32,
    pub defense: u32,
    pub endurance: u32,
}

impl DimensionTotals {
    pub fn total(&self) -> u64 {
        u64::from(self.attack) + u64::from(self.defense) + u64::from(self.endurance)
    }
}

/// Positional requirement every team must cover once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Requirement {
    Attack,
    Defense,
}

/// Positional category of a participant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Attacker,
    Defender,
    /// Covers either requirement.
    Versatile,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Attacker, Role::Defender, Role::Versatile];

    pub fn satisfies(&self, requirement: Requirement) -> bool {
        matches!(
            (self, requirement),
            (Role::Versatile, _)
                | (Role::Attacker, Requirement::Attack)
                | (Role::Defender, Requirement::Defense)
        )
    }

    /// The role a team reaches for first when seeding `requirement`.
    pub fn primary_for(requirement: Requirement) -> Role {
        match requirement {
            Requirement::Attack => Role::Attacker,
            Requirement::Defense => Role::Defender,
        }
    }

    /// Short code shown next to a player's name.
    pub fn code(&self) -> &'static str {
        match self {
            Role::Attacker => "A",
            Role::Defender => "D",
            Role::Versatile => "P",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Role::Attacker => "Attacker",
            Role::Defender => "Defender",
            Role::Versatile => "Versatile",
        };
        f.write_str(label)
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" | "ATTACKER" => Ok(Role::Attacker),
            "D" | "DEFENDER" => Ok(Role::Defender),
            "P" | "V" | "VERSATILE" => Ok(Role::Versatile),
            other => Err(format!("Unknown role: {}", other)),
        }
    }
}
