use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::zoo::domain::repositories::AnimalRepository;
use crate::shared::{
    application::{OperationGuard, UseCase},
    errors::{AppResult, ResultExt},
};
use crate::log_info;

use super::{command::TreatAnimalCommand, result::TreatAnimalResult};

/// Use case handler for curing a sick animal
pub struct TreatAnimalHandler {
    animal_repository: Arc<dyn AnimalRepository>,
    guard: OperationGuard,
}

impl TreatAnimalHandler {
    pub fn new(animal_repository: Arc<dyn AnimalRepository>, guard: OperationGuard) -> Self {
        Self {
            animal_repository,
            guard,
        }
    }
}

#[async_trait]
impl UseCase<TreatAnimalCommand, TreatAnimalResult> for TreatAnimalHandler {
    async fn execute(&self, command: TreatAnimalCommand) -> AppResult<TreatAnimalResult> {
        let _lock = self.guard.acquire().await;

        let mut animal = self
            .animal_repository
            .get(&command.animal_id)
            .await
            .context("getting animal")?;
        let previous_status = animal.status();

        // Healthy animals are refused before anything is written
        animal.treat().context("treating animal")?;

        self.animal_repository
            .update(&animal)
            .await
            .context("updating animal")?;

        log_info!("Treated {} ({})", animal.name, animal.id);
        Ok(TreatAnimalResult::new(
            animal.id,
            previous_status,
            animal.status(),
        ))
    }
}
