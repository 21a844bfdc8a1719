use async_trait::async_trait;

use crate::modules::zoo::domain::{
    aggregates::Enclosure,
    value_objects::{EnclosureId, EnclosureType},
};
use crate::shared::errors::AppResult;

/// Storage contract for enclosures.
///
/// `delete` must refuse an enclosure that still has members
/// (`DomainError::EnclosureNotEmpty`).
#[async_trait]
pub trait EnclosureRepository: Send + Sync {
    async fn find_by_id(&self, id: &EnclosureId) -> AppResult<Option<Enclosure>>;
    async fn get(&self, id: &EnclosureId) -> AppResult<Enclosure>;
    async fn save(&self, enclosure: &Enclosure) -> AppResult<()>;
    async fn update(&self, enclosure: &Enclosure) -> AppResult<()>;
    async fn delete(&self, id: &EnclosureId) -> AppResult<()>;
    async fn get_all(&self) -> AppResult<Vec<Enclosure>>;

    async fn count(&self) -> AppResult<usize>;
    /// Enclosures with at least one free place
    async fn count_free(&self) -> AppResult<usize>;
    async fn find_by_type(&self, enclosure_type: &EnclosureType) -> AppResult<Vec<Enclosure>>;
    async fn find_with_space(&self) -> AppResult<Vec<Enclosure>>;
}
