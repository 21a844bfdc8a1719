use async_trait::async_trait;

use crate::modules::zoo::domain::{
    aggregates::Animal,
    value_objects::{AnimalId, AnimalStatus, EnclosureId},
};
use crate::shared::errors::AppResult;

/// Storage contract for animals.
///
/// Implementations hand out owned copies; a change is visible to other callers
/// only after `update`. Deleting an animal does not touch its enclosure.
#[async_trait]
pub trait AnimalRepository: Send + Sync {
    async fn find_by_id(&self, id: &AnimalId) -> AppResult<Option<Animal>>;
    /// Like `find_by_id`, but a missing animal is `AppError::NotFound`
    async fn get(&self, id: &AnimalId) -> AppResult<Animal>;
    /// Store a new animal; `AlreadyExists` if the id is taken
    async fn save(&self, animal: &Animal) -> AppResult<()>;
    /// Replace a stored animal; `NotFound` if absent
    async fn update(&self, animal: &Animal) -> AppResult<()>;
    async fn delete(&self, id: &AnimalId) -> AppResult<()>;
    async fn get_all(&self) -> AppResult<Vec<Animal>>;

    async fn count(&self) -> AppResult<usize>;
    async fn count_by_status(&self, status: AnimalStatus) -> AppResult<usize>;
    async fn find_by_enclosure(&self, enclosure_id: &EnclosureId) -> AppResult<Vec<Animal>>;
}
