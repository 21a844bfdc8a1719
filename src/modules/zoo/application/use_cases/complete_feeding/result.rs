use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::modules::zoo::domain::value_objects::{AnimalId, FeedingScheduleId, FeedingStatus};

/// Result of completing a feeding
#[derive(Debug, Clone, Serialize)]
pub struct CompleteFeedingResult {
    pub schedule_id: FeedingScheduleId,
    pub animal_id: AnimalId,
    pub time: DateTime<Utc>,
    pub status: FeedingStatus,
}
