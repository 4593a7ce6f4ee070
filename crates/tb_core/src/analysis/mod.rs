//! Team statistics and balance summary
//!
//! Mirrors what the results screen shows: each team's rating sums and how
//! far apart the strongest and weakest teams are.

use crate::models::Team;
use serde::{Deserialize, Serialize};

/// Rating sums for one team.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TeamStats {
    pub member_count: usize,
    pub total: u64,
    /// Sums over members with detailed ratings only.
    pub attack: u64,
    pub defense: u64,
    pub endurance: u64,
}

impl TeamStats {
    pub fn of(team: &Team) -> Self {
        let mut stats =
            Self { member_count: team.len(), total: team.total_rating(), ..Self::default() };
        for dims in team.iter().filter_map(|p| p.rating.dimensions()) {
            stats.attack += u64::from(dims.attack);
            stats.defense += u64::from(dims.defense);
            stats.endurance += u64::from(dims.endurance);
        }
        stats
    }
}

/// Strongest minus weakest team, per skill.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DimensionSpread {
    pub attack: u64,
    pub defense: u64,
    pub endurance: u64,
}

/// Spread of the generated teams.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BalanceSummary {
    pub teams: Vec<TeamStats>,
    /// Strongest minus weakest team total.
    pub total_spread: u64,
    /// Per-dimension spread, only when every player has a detailed rating.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimension_spread: Option<DimensionSpread>,
}

impl BalanceSummary {
    pub fn of(teams: &[Team]) -> Self {
        let stats: Vec<TeamStats> = teams.iter().map(TeamStats::of).collect();
        let total_spread = spread(stats.iter().map(|s| s.total));

        let all_detailed = teams.iter().flat_map(Team::iter).all(|p| p.rating.dimensions().is_some());
        let dimension_spread = (all_detailed && !stats.is_empty()).then(|| DimensionSpread {
            attack: spread(stats.iter().map(|s| s.attack)),
            defense: spread(stats.iter().map(|s| s.defense)),
            endurance: spread(stats.iter().map(|s| s.endurance)),
        });

        Self { teams: stats, total_spread, dimension_spread }
    }
}

/// Max minus min, 0 when empty.
pub fn spread(values: impl IntoIterator<Item = u64>) -> u64 {
    let mut iter = values.into_iter();
    let Some(first) = iter.next() else {
        return 0;
    };
    let (min, max) = iter.fold((first, first), |(min, max), v| (min.min(v), max.max(v)));
    max - min
}
