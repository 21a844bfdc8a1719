use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::{collections::HashMap, sync::Arc};
use tokio::sync::RwLock;
use tracing::debug;

use crate::modules::zoo::domain::{
    aggregates::FeedingSchedule,
    repositories::FeedingScheduleRepository,
    value_objects::{AnimalId, FeedingScheduleId, FeedingStatus},
};
use crate::shared::errors::{AppError, AppResult};

/// Map-backed feeding schedule store; one lock held per call
#[derive(Debug, Default, Clone)]
pub struct InMemoryFeedingScheduleRepository {
    schedules: Arc<RwLock<HashMap<FeedingScheduleId, FeedingSchedule>>>,
}

impl InMemoryFeedingScheduleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn not_found(id: &FeedingScheduleId) -> AppError {
        AppError::NotFound(format!("Feeding schedule with id {} not found", id))
    }

    async fn select<F>(&self, predicate: F) -> Vec<FeedingSchedule>
    where
        F: Fn(&FeedingSchedule) -> bool,
    {
        self.schedules
            .read()
            .await
            .values()
            .filter(|schedule| predicate(schedule))
            .cloned()
            .collect()
    }
}

fn in_range(schedule: &FeedingSchedule, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
    schedule.time() >= start && schedule.time() < end
}

#[async_trait]
impl FeedingScheduleRepository for InMemoryFeedingScheduleRepository {
    async fn find_by_id(&self, id: &FeedingScheduleId) -> AppResult<Option<FeedingSchedule>> {
        Ok(self.schedules.read().await.get(id).cloned())
    }

    async fn get(&self, id: &FeedingScheduleId) -> AppResult<FeedingSchedule> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| Self::not_found(id))
    }

    async fn save(&self, schedule: &FeedingSchedule) -> AppResult<()> {
        if schedule.id.is_nil() {
            return Err(AppError::ValidationError(
                "Feeding schedule id cannot be nil".to_string(),
            ));
        }

        let mut schedules = self.schedules.write().await;
        if schedules.contains_key(&schedule.id) {
            return Err(AppError::AlreadyExists(format!(
                "Feeding schedule with id {} already exists",
                schedule.id
            )));
        }

        schedules.insert(schedule.id, schedule.clone());
        debug!(schedule_id = %schedule.id, animal_id = %schedule.animal_id, "feeding schedule stored");
        Ok(())
    }

    async fn update(&self, schedule: &FeedingSchedule) -> AppResult<()> {
        let mut schedules = self.schedules.write().await;
        let stored = schedules
            .get_mut(&schedule.id)
            .ok_or_else(|| Self::not_found(&schedule.id))?;
        *stored = schedule.clone();
        Ok(())
    }

    async fn delete(&self, id: &FeedingScheduleId) -> AppResult<()> {
        self.schedules
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| Self::not_found(id))
    }

    async fn get_all(&self) -> AppResult<Vec<FeedingSchedule>> {
        Ok(self.select(|_| true).await)
    }

    async fn count(&self) -> AppResult<usize> {
        Ok(self.schedules.read().await.len())
    }

    async fn find_by_animal(&self, animal_id: &AnimalId) -> AppResult<Vec<FeedingSchedule>> {
        Ok(self.select(|schedule| &schedule.animal_id == animal_id).await)
    }

    async fn find_by_status(&self, status: FeedingStatus) -> AppResult<Vec<FeedingSchedule>> {
        Ok(self.select(|schedule| schedule.status() == status).await)
    }

    async fn find_in_time_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<FeedingSchedule>> {
        Ok(self.select(|schedule| in_range(schedule, start, end)).await)
    }

    async fn count_by_status_in_range(
        &self,
        status: FeedingStatus,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<usize> {
        Ok(self
            .schedules
            .read()
            .await
            .values()
            .filter(|schedule| schedule.status() == status && in_range(schedule, start, end))
            .count())
    }
}
