use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::modules::zoo::domain::{
    errors::DomainError,
    value_objects::{AnimalId, AnimalName, AnimalStatus, EnclosureId, Food, Gender, Species},
};

/// Animal aggregate root.
///
/// Holds a back-reference to the enclosure it lives in. Keeping that reference
/// in agreement with the enclosure's occupancy is the job of the application
/// services; `move_to_enclosure` only rebinds the reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animal {
    pub id: AnimalId,
    pub name: AnimalName,
    pub species: Species,
    pub birth_date: NaiveDate,
    pub gender: Gender,
    pub favorite_food: Food,
    status: AnimalStatus,
    enclosure_id: Option<EnclosureId>,
    last_meal: Option<Food>,
}

impl Animal {
    /// A healthy animal that does not live anywhere yet
    pub fn new(
        name: AnimalName,
        species: Species,
        birth_date: NaiveDate,
        gender: Gender,
        favorite_food: Food,
    ) -> Self {
        Self {
            id: AnimalId::new(),
            name,
            species,
            birth_date,
            gender,
            favorite_food,
            status: AnimalStatus::Healthy,
            enclosure_id: None,
            last_meal: None,
        }
    }

    pub fn with_id(mut self, id: AnimalId) -> Self {
        self.id = id;
        self
    }

    pub fn with_status(mut self, status: AnimalStatus) -> Self {
        self.status = status;
        self
    }

    pub fn status(&self) -> AnimalStatus {
        self.status
    }

    pub fn is_healthy(&self) -> bool {
        self.status == AnimalStatus::Healthy
    }

    pub fn enclosure_id(&self) -> Option<EnclosureId> {
        self.enclosure_id
    }

    pub fn last_meal(&self) -> Option<&Food> {
        self.last_meal.as_ref()
    }

    /// Record a meal. Food suitability is not judged, so this never fails.
    pub fn feed(&mut self, food: Food) {
        self.last_meal = Some(food);
    }

    /// Sick -> Healthy
    pub fn treat(&mut self) -> Result<(), DomainError> {
        if self.status != AnimalStatus::Sick {
            return Err(DomainError::AlreadyHealthy);
        }

        self.status = AnimalStatus::Healthy;
        Ok(())
    }

    /// Rebind the enclosure reference; a nil id counts as "no enclosure"
    pub fn move_to_enclosure(&mut self, enclosure_id: EnclosureId) -> Result<(), DomainError> {
        if enclosure_id.is_nil() {
            return Err(DomainError::NilEnclosure);
        }

        self.enclosure_id = Some(enclosure_id);
        Ok(())
    }
}
