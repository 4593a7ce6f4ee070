pub mod config;
pub mod player;
pub mod team;

pub use config::{RunConfiguration, REFERENCE_TEAM_COUNTS, REFERENCE_TEAM_SIZES};
pub use player::{
    DimensionTotals, Participant, Rating, Requirement, Role, GUEST_SKILL_MAX, GUEST_SKILL_MIN,
};
pub use team::Team;
