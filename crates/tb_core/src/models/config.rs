use crate::error::BalanceError;
use serde::{Deserialize, Serialize};

/// Team counts offered by the reference deployment.
pub const REFERENCE_TEAM_COUNTS: [usize; 2] = [2, 3];
/// Team sizes offered by the reference deployment.
pub const REFERENCE_TEAM_SIZES: [usize; 3] = [4, 5, 6];

/// Shape of one team generation run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RunConfiguration {
    pub num_teams: usize,
    pub players_per_team: usize,
}

impl Default for RunConfiguration {
    fn default() -> Self {
        Self { num_teams: 2, players_per_team: 5 }
    }
}

impl RunConfiguration {
    pub fn new(num_teams: usize, players_per_team: usize) -> Self {
        Self { num_teams, players_per_team }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn required_players(&self) -> usize {
        self.num_teams * self.players_per_team
    }

    /// Seeding places one attack and one defense player per team, so a team
    /// needs room for at least two.
    pub fn validate(&self) -> Result<(), BalanceError> {
        if self.num_teams == 0 || self.players_per_team < 2 {
            return Err(BalanceError::InvalidConfiguration {
                num_teams: self.num_teams,
                players_per_team: self.players_per_team,
            });
        }
        Ok(())
    }

    /// True when both values are among the ones the reference deployment offers.
    pub fn is_reference(&self) -> bool {
        REFERENCE_TEAM_COUNTS.contains(&self.num_teams)
            && REFERENCE_TEAM_SIZES.contains(&self.players_per_team)
    }
}
