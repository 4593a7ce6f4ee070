use super::{Participant, Requirement};
use serde::{Deserialize, Serialize};

/// One generated team. Members keep the order they were placed in:
/// attack seed, defense seed, then balancing picks.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Team {
    pub players: Vec<Participant>,
}

impl Team {
    pub fn with_capacity(capacity: usize) -> Self {
        Self { players: Vec::with_capacity(capacity) }
    }

    pub fn push(&mut self, player: Participant) {
        self.players.push(player);
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn total_rating(&self) -> u64 {
        self.players.iter().map(Participant::total_rating).sum()
    }

    /// Whether some member can play to `requirement`.
    pub fn covers(&self, requirement: Requirement) -> bool {
        self.players.iter().any(|p| p.role.satisfies(requirement))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Participant> {
        self.players.iter()
    }
}
