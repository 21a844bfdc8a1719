use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::zoo::domain::{
    errors::DomainError,
    value_objects::{AnimalId, FeedingScheduleId, FeedingStatus, Food},
};

/// A planned feeding of one animal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedingSchedule {
    pub id: FeedingScheduleId,
    pub animal_id: AnimalId,
    pub food: Food,
    time: DateTime<Utc>,
    status: FeedingStatus,
}

impl FeedingSchedule {
    pub fn new(animal_id: AnimalId, food: Food, time: DateTime<Utc>) -> Self {
        Self {
            id: FeedingScheduleId::new(),
            animal_id,
            food,
            time,
            status: FeedingStatus::Pending,
        }
    }

    pub fn with_id(mut self, id: FeedingScheduleId) -> Self {
        self.id = id;
        self
    }

    pub fn time(&self) -> DateTime<Utc> {
        self.time
    }

    pub fn status(&self) -> FeedingStatus {
        self.status
    }

    /// Pending and already due: `time < now`
    pub fn is_ready(&self, now: DateTime<Utc>) -> bool {
        self.status == FeedingStatus::Pending && self.time < now
    }

    /// Pending -> Done. Irreversible; a second call fails with `AlreadyDone`.
    pub fn done(&mut self) -> Result<(), DomainError> {
        self.status = self.status.done()?;
        Ok(())
    }

    /// Reschedule without checking that the new time lies ahead
    pub fn change_time(&mut self, new_time: DateTime<Utc>) {
        self.time = new_time;
    }
}
