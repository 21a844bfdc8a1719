/// Domain events of the zoo context
///
/// - `AnimalMovedEvent` is published after a transfer has been persisted.
/// - `FeedingTimeEvent` is published when a due feeding is about to happen,
///   before the animal is fed and the schedule closed.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::any::Any;
use uuid::Uuid;

use crate::modules::zoo::domain::{
    aggregates::{Animal, FeedingSchedule},
    value_objects::{AnimalId, AnimalName, EnclosureId, FeedingScheduleId, Food, Species},
};
use crate::shared::domain::DomainEvent;

pub const ANIMAL_MOVED: &str = "animal.moved";
pub const FEEDING_TIME: &str = "feeding.time";

/// An animal was moved to another enclosure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimalMovedEvent {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub animal_id: AnimalId,
    pub animal_name: AnimalName,
    pub animal_species: Species,
    pub from_enclosure: EnclosureId,
    pub to_enclosure: EnclosureId,
}

impl AnimalMovedEvent {
    pub fn new(
        animal: &Animal,
        from_enclosure: EnclosureId,
        to_enclosure: EnclosureId,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at,
            animal_id: animal.id,
            animal_name: animal.name.clone(),
            animal_species: animal.species.clone(),
            from_enclosure,
            to_enclosure,
        }
    }
}

impl DomainEvent for AnimalMovedEvent {
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    fn event_id(&self) -> Uuid {
        self.event_id
    }

    fn event_type(&self) -> &'static str {
        ANIMAL_MOVED
    }

    fn payload(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A scheduled feeding is due
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedingTimeEvent {
    pub event_id: Uuid,
    /// Dispatch time
    pub occurred_at: DateTime<Utc>,
    pub schedule_id: FeedingScheduleId,
    pub animal_id: AnimalId,
    pub animal_name: AnimalName,
    pub animal_species: Species,
    pub food: Food,
    /// Planned time of the feeding
    pub feeding_time: DateTime<Utc>,
}

impl FeedingTimeEvent {
    pub fn new(schedule: &FeedingSchedule, animal: &Animal, occurred_at: DateTime<Utc>) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at,
            schedule_id: schedule.id,
            animal_id: animal.id,
            animal_name: animal.name.clone(),
            animal_species: animal.species.clone(),
            food: schedule.food.clone(),
            feeding_time: schedule.time(),
        }
    }
}

impl DomainEvent for FeedingTimeEvent {
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    fn event_id(&self) -> Uuid {
        self.event_id
    }

    fn event_type(&self) -> &'static str {
        FEEDING_TIME
    }

    fn payload(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
