use async_trait::async_trait;
use std::{collections::HashMap, sync::Arc};
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::modules::zoo::domain::{
    aggregates::Enclosure,
    errors::DomainError,
    repositories::EnclosureRepository,
    value_objects::{EnclosureId, EnclosureType},
};
use crate::shared::errors::{AppError, AppResult};

/// Map-backed enclosure store; one lock held per call
#[derive(Debug, Default, Clone)]
pub struct InMemoryEnclosureRepository {
    enclosures: Arc<RwLock<HashMap<EnclosureId, Enclosure>>>,
}

impl InMemoryEnclosureRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn not_found(id: &EnclosureId) -> AppError {
        AppError::NotFound(format!("Enclosure with id {} not found", id))
    }
}

#[async_trait]
impl EnclosureRepository for InMemoryEnclosureRepository {
    async fn find_by_id(&self, id: &EnclosureId) -> AppResult<Option<Enclosure>> {
        Ok(self.enclosures.read().await.get(id).cloned())
    }

    async fn get(&self, id: &EnclosureId) -> AppResult<Enclosure> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| Self::not_found(id))
    }

    async fn save(&self, enclosure: &Enclosure) -> AppResult<()> {
        if enclosure.id.is_nil() {
            return Err(AppError::ValidationError(
                "Enclosure id cannot be nil".to_string(),
            ));
        }

        let mut enclosures = self.enclosures.write().await;
        if enclosures.contains_key(&enclosure.id) {
            return Err(AppError::AlreadyExists(format!(
                "Enclosure with id {} already exists",
                enclosure.id
            )));
        }

        enclosures.insert(enclosure.id, enclosure.clone());
        debug!(enclosure_id = %enclosure.id, capacity = enclosure.capacity(), "enclosure stored");
        Ok(())
    }

    async fn update(&self, enclosure: &Enclosure) -> AppResult<()> {
        let mut enclosures = self.enclosures.write().await;
        let stored = enclosures
            .get_mut(&enclosure.id)
            .ok_or_else(|| Self::not_found(&enclosure.id))?;
        *stored = enclosure.clone();
        Ok(())
    }

    async fn delete(&self, id: &EnclosureId) -> AppResult<()> {
        let mut enclosures = self.enclosures.write().await;
        let enclosure = enclosures.get(id).ok_or_else(|| Self::not_found(id))?;

        if !enclosure.is_empty() {
            warn!(
                enclosure_id = %id,
                animals = enclosure.occupancy().count(),
                "refusing to delete occupied enclosure"
            );
            return Err(DomainError::EnclosureNotEmpty.into());
        }

        enclosures.remove(id);
        debug!(enclosure_id = %id, "enclosure deleted");
        Ok(())
    }

    async fn get_all(&self) -> AppResult<Vec<Enclosure>> {
        Ok(self.enclosures.read().await.values().cloned().collect())
    }

    async fn count(&self) -> AppResult<usize> {
        Ok(self.enclosures.read().await.len())
    }

    async fn count_free(&self) -> AppResult<usize> {
        Ok(self
            .enclosures
            .read()
            .await
            .values()
            .filter(|enclosure| enclosure.has_space())
            .count())
    }

    async fn find_by_type(&self, enclosure_type: &EnclosureType) -> AppResult<Vec<Enclosure>> {
        Ok(self
            .enclosures
            .read()
            .await
            .values()
            .filter(|enclosure| &enclosure.enclosure_type == enclosure_type)
            .cloned()
            .collect())
    }

    async fn find_with_space(&self) -> AppResult<Vec<Enclosure>> {
        Ok(self
            .enclosures
            .read()
            .await
            .values()
            .filter(|enclosure| enclosure.has_space())
            .cloned()
            .collect())
    }
}
