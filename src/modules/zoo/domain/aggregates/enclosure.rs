use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::zoo::domain::{
    errors::DomainError,
    value_objects::{AnimalId, EnclosureId, EnclosureSize, EnclosureType, Occupancy},
};

/// Enclosure aggregate root.
///
/// Owns its occupancy; the member count never exceeds capacity. Deleting a
/// non-empty enclosure is refused by the storage layer, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enclosure {
    pub id: EnclosureId,
    pub enclosure_type: EnclosureType,
    pub size: EnclosureSize,
    occupancy: Occupancy,
    last_cleaned_at: Option<DateTime<Utc>>,
}

impl Enclosure {
    pub fn new(enclosure_type: EnclosureType, size: EnclosureSize, capacity: u32) -> Self {
        Self {
            id: EnclosureId::new(),
            enclosure_type,
            size,
            occupancy: Occupancy::new(capacity),
            last_cleaned_at: None,
        }
    }

    pub fn with_id(mut self, id: EnclosureId) -> Self {
        self.id = id;
        self
    }

    pub fn occupancy(&self) -> &Occupancy {
        &self.occupancy
    }

    pub fn capacity(&self) -> u32 {
        self.occupancy.capacity()
    }

    pub fn has_space(&self) -> bool {
        !self.occupancy.is_full()
    }

    pub fn is_empty(&self) -> bool {
        self.occupancy.is_empty()
    }

    pub fn contains(&self, animal_id: &AnimalId) -> bool {
        self.occupancy.contains(animal_id)
    }

    pub fn last_cleaned_at(&self) -> Option<DateTime<Utc>> {
        self.last_cleaned_at
    }

    pub fn add_animal(&mut self, animal_id: AnimalId) -> Result<(), DomainError> {
        self.occupancy = self.occupancy.add_animal(animal_id)?;
        Ok(())
    }

    pub fn remove_animal(&mut self, animal_id: &AnimalId) -> Result<(), DomainError> {
        self.occupancy = self.occupancy.remove_animal(animal_id)?;
        Ok(())
    }

    pub fn clean(&mut self, at: DateTime<Utc>) {
        self.last_cleaned_at = Some(at);
    }
}
