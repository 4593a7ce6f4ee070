//! # tb_core - Deterministic Team Balancing
//!
//! Splits a pool of rated players into equal-sized teams so that every team
//! can attack and defend and the team totals stay close.
//!
//! ## Features
//! - Deterministic: same players in the same order = same teams
//! - Composite or attack/defense/endurance ratings
//! - Roster, guest list and presence selection helpers
//! - JSON API for easy integration

pub mod analysis;
pub mod api;
pub mod balancer;
pub mod error;
pub mod models;
pub mod roster;

// Re-export main API functions
pub use api::{generate_teams, generate_teams_json, GenerateTeamsRequest, GenerateTeamsResponse};
pub use balancer::balance;
pub use error::{BalanceError, Result, RosterError};

// Re-export data model
pub use analysis::{spread, BalanceSummary, DimensionSpread, TeamStats};
pub use models::{
    DimensionTotals, Participant, Rating, Requirement, Role, RunConfiguration, Team,
};
pub use roster::{select_participants, GuestList, Roster, RosterEntry, SelectionStatus};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_roster_end_to_end() {
        let roster = Roster::default_regulars().unwrap();
        let mut guests = GuestList::new();
        guests.add("Invité", Rating::detailed(3, 3, 3), Role::Defender).unwrap();

        let present = [
            "Antoine", "Arnaud", "Ariel", "Daniel", "Emile", "Hamid", "Lucas", "Olivier",
            "Raoul",
        ];
        let participants = select_participants(&roster, &present, &guests).unwrap();
        let config = RunConfiguration::default();
        assert!(SelectionStatus::new(participants.len(), &config).is_ready());

        let teams = balance(&participants, &config).unwrap();
        let summary = BalanceSummary::of(&teams);

        assert_eq!(teams.len(), 2);
        assert!(teams.iter().all(|t| t.len() == 5));
        assert!(summary.dimension_spread.is_some());
        assert_eq!(summary.total_spread, 2);
    }
}
