use crate::modules::zoo::domain::value_objects::AnimalId;

/// Command for treating a sick animal
#[derive(Debug, Clone)]
pub struct TreatAnimalCommand {
    pub animal_id: AnimalId,
}

impl TreatAnimalCommand {
    pub fn new(animal_id: AnimalId) -> Self {
        Self { animal_id }
    }
}
