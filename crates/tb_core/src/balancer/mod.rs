//! TeamBalancer: greedy constrained distribution of players into teams
//!
//! Two phases:
//! 1. Seeding: each team, in index order, takes the best remaining attacker
//!    (falling back to a versatile player), then the best remaining defender
//!    (same fallback).
//! 2. Balancing: everyone left is placed best-first into the open team with
//!    the lowest total rating, lowest index on ties.
//!
//! Seeding pools are ordered by descending total rating, ties by input
//! position. The balancing phase merges the leftovers as attackers, defenders,
//! then versatile players and sorts that list stably by rating, so equal
//! ratings keep role order. The same input always yields the same teams.

use crate::analysis::spread;
use crate::error::{BalanceError, Result};
use crate::models::{Participant, Requirement, Role, RunConfiguration, Team};
use std::cmp::Reverse;
use std::collections::{HashSet, VecDeque};


/// Split `participants` into `config.num_teams` teams of
/// `config.players_per_team` players.
///
/// The configuration, the player count, name uniqueness and rating positivity
/// are checked before any assignment. Any failure aborts the whole run.
pub fn balance(participants: &[Participant], config: &RunConfiguration) -> Result<Vec<Team>> {
    validate_input(participants, config).inspect_err(|e| {
        log::warn!("Team generation rejected: {}", e);
    })?;

    let mut pools = RolePools::new(participants);
    let mut teams: Vec<Team> =
        (0..config.num_teams).map(|_| Team::with_capacity(config.players_per_team)).collect();

    for (team_index, team) in teams.iter_mut().enumerate() {
        let attacker = pools
            .take_seed(Requirement::Attack)
            .ok_or(BalanceError::InsufficientAttackers { team_index })?;
        team.push(participants[attacker].clone());

        let defender = pools
            .take_seed(Requirement::Defense)
            .ok_or(BalanceError::InsufficientDefenders { team_index })?;
        team.push(participants[defender].clone());
        debug_assert!(team.covers(Requirement::Attack) && team.covers(Requirement::Defense));

        log::debug!(
            "Seeded team {} with {} and {}",
            team_index + 1,
            participants[attacker].name,
            participants[defender].name
        );
    }

    let remaining = pools.into_remaining(participants);
    for (placed, &index) in remaining.iter().enumerate() {
        let target = teams
            .iter()
            .enumerate()
            .filter(|(_, team)| team.len() < config.players_per_team)
            .min_by_key(|(team_index, team)| (team.total_rating(), *team_index))
            .map(|(team_index, _)| team_index);

        let Some(target) = target else {
            return Err(BalanceError::CapacityExhausted { unplaced: remaining.len() - placed });
        };

        log::debug!(
            "Placing {} ({}) into team {}",
            participants[index].name,
            participants[index].total_rating(),
            target + 1
        );
        teams[target].push(participants[index].clone());
    }

    log::info!(
        "Generated {} teams of {} (spread {})",
        teams.len(),
        config.players_per_team,
        spread(teams.iter().map(Team::total_rating))
    );
    Ok(teams)
}

fn validate_input(participants: &[Participant], config: &RunConfiguration) -> Result<()> {
    config.validate()?;

    let expected = config.required_players();
    if participants.len() != expected {
        return Err(BalanceError::PlayerCountMismatch { expected, found: participants.len() });
    }

    let mut seen = HashSet::with_capacity(participants.len());
    for participant in participants {
        if !seen.insert(participant.name.as_str()) {
            return Err(BalanceError::DuplicateParticipant { name: participant.name.clone() });
        }
    }

    if let Some(participant) = participants.iter().find(|p| !p.rating.is_positive()) {
        return Err(BalanceError::NonPositiveRating { name: participant.name.clone() });
    }
    Ok(())
}

/// Indices of unassigned players per role, best first.
struct RolePools {
    attackers: VecDeque<usize>,
    defenders: VecDeque<usize>,
    versatile: VecDeque<usize>,
}

impl RolePools {
    fn new(participants: &[Participant]) -> Self {
        let pool = |role: Role| -> VecDeque<usize> {
            let mut indices: Vec<usize> = participants
                .iter()
                .enumerate()
                .filter(|(_, p)| p.role == role)
                .map(|(i, _)| i)
                .collect();
            sort_best_first(&mut indices, participants);
            indices.into()
        };

        Self {
            attackers: pool(Role::Attacker),
            defenders: pool(Role::Defender),
            versatile: pool(Role::Versatile),
        }
    }

    fn pool_mut(&mut self, role: Role) -> &mut VecDeque<usize> {
        match role {
            Role::Attacker => &mut self.attackers,
            Role::Defender => &mut self.defenders,
            Role::Versatile => &mut self.versatile,
        }
    }

    /// Best remaining specialist for `requirement`, else the best player of
    /// another role that satisfies it.
    fn take_seed(&mut self, requirement: Requirement) -> Option<usize> {
        let primary = Role::primary_for(requirement);
        let fallbacks = Role::ALL
            .into_iter()
            .filter(move |&role| role != primary && role.satisfies(requirement));
        std::iter::once(primary).chain(fallbacks).find_map(|role| self.pool_mut(role).pop_front())
    }

    /// Leftover attackers, defenders, then versatile players, best first.
    /// The sort is stable, so equal ratings keep that role order.
    fn into_remaining(self, participants: &[Participant]) -> Vec<usize> {
        let mut remaining: Vec<usize> =
            self.attackers.into_iter().chain(self.defenders).chain(self.versatile).collect();
        remaining.sort_by_key(|&i| Reverse(participants[i].total_rating()));
        remaining
    }
}

/// Descending total rating; equal ratings keep input order.
fn sort_best_first(indices: &mut [usize], participants: &[Participant]) {
    indices.sort_by_key(|&i| (Reverse(participants[i].total_rating()), i));
}
