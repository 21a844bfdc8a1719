use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::modules::zoo::domain::{
    aggregates::FeedingSchedule,
    value_objects::{AnimalId, FeedingScheduleId, FeedingStatus},
};
use crate::shared::errors::AppResult;

/// Storage contract for feeding schedules.
///
/// Time ranges are half-open: `start <= time < end`.
#[async_trait]
pub trait FeedingScheduleRepository: Send + Sync {
    async fn find_by_id(&self, id: &FeedingScheduleId) -> AppResult<Option<FeedingSchedule>>;
    async fn get(&self, id: &FeedingScheduleId) -> AppResult<FeedingSchedule>;
    async fn save(&self, schedule: &FeedingSchedule) -> AppResult<()>;
    async fn update(&self, schedule: &FeedingSchedule) -> AppResult<()>;
    async fn delete(&self, id: &FeedingScheduleId) -> AppResult<()>;
    async fn get_all(&self) -> AppResult<Vec<FeedingSchedule>>;

    async fn count(&self) -> AppResult<usize>;
    async fn find_by_animal(&self, animal_id: &AnimalId) -> AppResult<Vec<FeedingSchedule>>;
    async fn find_by_status(&self, status: FeedingStatus) -> AppResult<Vec<FeedingSchedule>>;
    async fn find_in_time_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<FeedingSchedule>>;
    async fn count_by_status_in_range(
        &self,
        status: FeedingStatus,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<usize>;
}
