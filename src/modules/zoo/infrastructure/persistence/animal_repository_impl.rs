use async_trait::async_trait;
use std::{collections::HashMap, sync::Arc};
use tokio::sync::RwLock;
use tracing::debug;

use crate::modules::zoo::domain::{
    aggregates::Animal,
    repositories::AnimalRepository,
    value_objects::{AnimalId, AnimalStatus, EnclosureId},
};
use crate::shared::errors::{AppError, AppResult};

/// Map-backed animal store; one lock held per call
#[derive(Debug, Default, Clone)]
pub struct InMemoryAnimalRepository {
    animals: Arc<RwLock<HashMap<AnimalId, Animal>>>,
}

impl InMemoryAnimalRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AnimalRepository for InMemoryAnimalRepository {
    async fn find_by_id(&self, id: &AnimalId) -> AppResult<Option<Animal>> {
        Ok(self.animals.read().await.get(id).cloned())
    }

    async fn get(&self, id: &AnimalId) -> AppResult<Animal> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Animal with id {} not found", id)))
    }

    async fn save(&self, animal: &Animal) -> AppResult<()> {
        if animal.id.is_nil() {
            return Err(AppError::ValidationError(
                "Animal id cannot be nil".to_string(),
            ));
        }

        let mut animals = self.animals.write().await;
        if animals.contains_key(&animal.id) {
            return Err(AppError::AlreadyExists(format!(
                "Animal with id {} already exists",
                animal.id
            )));
        }

        animals.insert(animal.id, animal.clone());
        debug!(animal_id = %animal.id, "animal stored");
        Ok(())
    }

    async fn update(&self, animal: &Animal) -> AppResult<()> {
        let mut animals = self.animals.write().await;
        match animals.get_mut(&animal.id) {
            Some(stored) => {
                *stored = animal.clone();
                Ok(())
            }
            None => Err(AppError::NotFound(format!(
                "Animal with id {} not found",
                animal.id
            ))),
        }
    }

    async fn delete(&self, id: &AnimalId) -> AppResult<()> {
        match self.animals.write().await.remove(id) {
            Some(_) => {
                debug!(animal_id = %id, "animal deleted");
                Ok(())
            }
            None => Err(AppError::NotFound(format!(
                "Animal with id {} not found",
                id
            ))),
        }
    }

    async fn get_all(&self) -> AppResult<Vec<Animal>> {
        Ok(self.animals.read().await.values().cloned().collect())
    }

    async fn count(&self) -> AppResult<usize> {
        Ok(self.animals.read().await.len())
    }

    async fn count_by_status(&self, status: AnimalStatus) -> AppResult<usize> {
        Ok(self
            .animals
            .read()
            .await
            .values()
            .filter(|animal| animal.status() == status)
            .count())
    }

    async fn find_by_enclosure(&self, enclosure_id: &EnclosureId) -> AppResult<Vec<Animal>> {
        Ok(self
            .animals
            .read()
            .await
            .values()
            .filter(|animal| animal.enclosure_id() == Some(*enclosure_id))
            .cloned()
            .collect())
    }
}
