use crate::error::RosterError;
use crate::models::{Participant, Rating, Role, GUEST_SKILL_MAX, GUEST_SKILL_MIN};

/// Ad-hoc players added for the next runs.
///
/// Owned by whoever drives the session; the balancer never holds on to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuestList {
    guests: Vec<Participant>,
}

impl GuestList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a guest and return a reference to the stored entry.
    ///
    /// Detailed sub-scores must lie in `GUEST_SKILL_MIN..=GUEST_SKILL_MAX`;
    /// composite scores must be at least 1.
    pub fn add(
        &mut self,
        name: &str,
        rating: Rating,
        role: Role,
    ) -> Result<&Participant, RosterError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RosterError::EmptyName);
        }
        if self.guests.iter().any(|g| g.name == name) {
            return Err(RosterError::DuplicateName { name: name.to_string() });
        }
        check_guest_rating(name, &rating)?;

        log::debug!("Added guest {} ({}, {})", name, rating.total(), role.code());
        self.guests.push(Participant::new(name, rating, role));
        Ok(&self.guests[self.guests.len() - 1])
    }

    pub fn remove(&mut self, index: usize) -> Result<Participant, RosterError> {
        if index >= self.guests.len() {
            return Err(RosterError::GuestIndexOutOfRange { index, len: self.guests.len() });
        }
        Ok(self.guests.remove(index))
    }

    pub fn clear(&mut self) {
        self.guests.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Participant> {
        self.guests.iter()
    }

    pub fn len(&self) -> usize {
        self.guests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guests.is_empty()
    }
}

fn check_guest_rating(name: &str, rating: &Rating) -> Result<(), RosterError> {
    let in_range = |v: u32| (GUEST_SKILL_MIN..=GUEST_SKILL_MAX).contains(&v);
    let ok = match rating {
        Rating::Composite(score) => *score >= 1,
        Rating::Detailed(d) => in_range(d.attack) && in_range(d.defense) && in_range(d.endurance),
    };
    if ok {
        Ok(())
    } else {
        Err(RosterError::InvalidRating {
            name: name.to_string(),
            reason: format!("sub-scores must be between {} and {}", GUEST_SKILL_MIN, GUEST_SKILL_MAX),
        })
    }
}
