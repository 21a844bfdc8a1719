use serde::Serialize;

use crate::modules::zoo::domain::value_objects::{AnimalId, AnimalStatus};

/// Result of treating an animal
#[derive(Debug, Clone, Serialize)]
pub struct TreatAnimalResult {
    pub animal_id: AnimalId,
    pub previous_status: AnimalStatus,
    pub status: AnimalStatus,
}

impl TreatAnimalResult {
    pub fn new(animal_id: AnimalId, previous_status: AnimalStatus, status: AnimalStatus) -> Self {
        Self {
            animal_id,
            previous_status,
            status,
        }
    }
}
