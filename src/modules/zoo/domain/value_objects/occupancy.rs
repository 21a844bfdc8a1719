use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::identifiers::AnimalId;
use crate::modules::zoo::domain::errors::DomainError;

/// Who lives in an enclosure and how many may.
///
/// Immutable: `add_animal` and `remove_animal` hand back a new value and leave
/// `self` untouched, so the owning enclosure swaps occupancy in one assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupancy {
    capacity: u32,
    members: BTreeSet<AnimalId>,
}

impl Occupancy {
    /// Empty occupancy with a fixed capacity
    pub fn new(capacity: u32) -> Self {
        Self {
            capacity,
            members: BTreeSet::new(),
        }
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn count(&self) -> usize {
        self.members.len()
    }

    pub fn members(&self) -> &BTreeSet<AnimalId> {
        &self.members
    }

    pub fn contains(&self, animal_id: &AnimalId) -> bool {
        self.members.contains(animal_id)
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.members.len() >= self.capacity as usize
    }

    pub fn free_places(&self) -> usize {
        (self.capacity as usize).saturating_sub(self.members.len())
    }

    /// Occupancy with `animal_id` added.
    ///
    /// Membership is checked before capacity: re-adding a resident of a full
    /// enclosure reports `AlreadyMember`.
    pub fn add_animal(&self, animal_id: AnimalId) -> Result<Occupancy, DomainError> {
        if self.contains(&animal_id) {
            return Err(DomainError::AlreadyMember);
        }
        if self.is_full() {
            return Err(DomainError::EnclosureFull);
        }

        let mut members = self.members.clone();
        members.insert(animal_id);

        Ok(Occupancy {
            capacity: self.capacity,
            members,
        })
    }

    /// Occupancy with `animal_id` removed
    pub fn remove_animal(&self, animal_id: &AnimalId) -> Result<Occupancy, DomainError> {
        if !self.contains(animal_id) {
            return Err(DomainError::NotAMember);
        }

        let mut members = self.members.clone();
        members.remove(animal_id);

        Ok(Occupancy {
            capacity: self.capacity,
            members,
        })
    }
}
