//! Roster of regulars, guest list and presence selection
//!
//! The roster and the guest list are plain values owned by the caller. A run
//! reads them once through [`select_participants`].

mod guests;

pub use guests::GuestList;

use crate::error::RosterError;
use crate::models::{Participant, Rating, Role, RunConfiguration};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

const DEFAULT_REGULARS_YAML: &str = include_str!("../../data/regulars.yaml");

/// One row of a roster file.
///
/// Either the three sub-scores or a single `rating` must be given. When both
/// are present the sub-scores win.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RosterEntry {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attack: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defense: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endurance: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u32>,
    pub role: String,
}

impl RosterEntry {
    pub fn into_participant(self) -> Result<Participant, RosterError> {
        let role: Role = self
            .role
            .parse()
            .map_err(|_| RosterError::InvalidRole {
                name: self.name.clone(),
                role: self.role.clone(),
            })?;

        let rating = match (self.attack, self.defense, self.endurance, self.rating) {
            (Some(attack), Some(defense), Some(endurance), _) => {
                Rating::detailed(attack, defense, endurance)
            }
            (None, None, None, Some(score)) => Rating::composite(score),
            _ => {
                return Err(RosterError::InvalidRating {
                    name: self.name,
                    reason: "expected attack/defense/endurance or a single rating".to_string(),
                })
            }
        };

        Ok(Participant::new(self.name.trim(), rating, role))
    }
}

impl From<&Participant> for RosterEntry {
    fn from(participant: &Participant) -> Self {
        let dims = participant.rating.dimensions();
        Self {
            name: participant.name.clone(),
            attack: dims.map(|d| d.attack),
            defense: dims.map(|d| d.defense),
            endurance: dims.map(|d| d.endurance),
            rating: match participant.rating {
                Rating::Composite(score) => Some(score),
                Rating::Detailed(_) => None,
            },
            role: participant.role.code().to_string(),
        }
    }
}

/// The regular players a run can pick from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    pub regulars: Vec<Participant>,
}

impl Roster {
    /// Build from file rows; the result is validated.
    pub fn from_entries(entries: Vec<RosterEntry>) -> Result<Self, RosterError> {
        let regulars = entries
            .into_iter()
            .map(RosterEntry::into_participant)
            .collect::<Result<Vec<_>, _>>()?;
        let roster = Self { regulars };
        roster.validate()?;
        Ok(roster)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, RosterError> {
        let entries: Vec<RosterEntry> = serde_yaml::from_str(yaml)?;
        Self::from_entries(entries)
    }

    pub fn from_json_str(json: &str) -> Result<Self, RosterError> {
        let entries: Vec<RosterEntry> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    /// Roster bundled with the crate.
    pub fn default_regulars() -> Result<Self, RosterError> {
        Self::from_yaml_str(DEFAULT_REGULARS_YAML)
    }

    pub fn to_yaml_string(&self) -> Result<String, RosterError> {
        let entries: Vec<RosterEntry> = self.regulars.iter().map(RosterEntry::from).collect();
        Ok(serde_yaml::to_string(&entries)?)
    }

    pub fn find(&self, name: &str) -> Option<&Participant> {
        self.regulars.iter().find(|p| p.name == name)
    }

    pub fn len(&self) -> usize {
        self.regulars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regulars.is_empty()
    }

    pub fn validate(&self) -> Result<(), RosterError> {
        let mut seen = HashSet::new();
        for player in &self.regulars {
            if player.name.trim().is_empty() {
                return Err(RosterError::EmptyName);
            }
            if !seen.insert(player.name.as_str()) {
                return Err(RosterError::DuplicateName { name: player.name.clone() });
            }
            if !player.rating.is_positive() {
                return Err(RosterError::InvalidRating {
                    name: player.name.clone(),
                    reason: "scores must be at least 1".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Players for one run: present regulars in roster order, then guests in the
/// order they were added.
pub fn select_participants<S: AsRef<str>>(
    roster: &Roster,
    present: &[S],
    guests: &GuestList,
) -> Result<Vec<Participant>, RosterError> {
    let mut wanted = HashSet::with_capacity(present.len());
    for name in present {
        let name = name.as_ref().trim();
        if roster.find(name).is_none() {
            return Err(RosterError::UnknownParticipant { name: name.to_string() });
        }
        wanted.insert(name);
    }

    let mut selected: Vec<Participant> =
        roster.regulars.iter().filter(|p| wanted.contains(p.name.as_str())).cloned().collect();

    for guest in guests.iter() {
        if selected.iter().any(|p| p.name == guest.name) {
            return Err(RosterError::DuplicateName { name: guest.name.clone() });
        }
        selected.push(guest.clone());
    }

    log::debug!("Selected {} regulars and {} guests", selected.len() - guests.len(), guests.len());
    Ok(selected)
}

/// Selection counter shown before generating teams.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectionStatus {
    pub selected: usize,
    pub required: usize,
}

impl SelectionStatus {
    pub fn new(selected: usize, config: &RunConfiguration) -> Self {
        Self { selected, required: config.required_players() }
    }

    pub fn is_ready(&self) -> bool {
        self.selected == self.required
    }

    /// Players still to select; negative when too many are selected.
    pub fn missing(&self) -> i64 {
        self.required as i64 - self.selected as i64
    }
}
