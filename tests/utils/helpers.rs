/// Test helper functions and context builders
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use std::sync::{Arc, Mutex};
use uuid::Uuid;
use zoo_lib::modules::zoo::{
    domain::{
        events::{FeedingTimeEvent, ANIMAL_MOVED, FEEDING_TIME},
        value_objects::{EnclosureId, FeedingStatus},
    },
    Animal, Enclosure, FeedingScheduleRepository,
};
use zoo_lib::shared::{
    application::FixedTimeProvider, domain::DomainEvent, infrastructure::EventHandler, ZooConfig,
};
use zoo_lib::ZooContext;

use super::factories::{AnimalFactory, EnclosureFactory};

/// Noon, 15 June 2024 (UTC)
pub fn test_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
}

pub struct TestZoo {
    pub ctx: ZooContext,
    pub clock: Arc<FixedTimeProvider>,
    pub events: Arc<RecordingHandler>,
}

/// Context on a fixed clock, UTC calendar days and a recorder on every event
pub fn build_test_context() -> TestZoo {
    build_test_context_with(ZooConfig::default().with_timezone(chrono_tz::UTC))
}

pub fn build_test_context_with(config: ZooConfig) -> TestZoo {
    let clock = Arc::new(FixedTimeProvider::new(test_now()));
    let ctx = ZooContext::with_time_provider(config, clock.clone());
    let events = Arc::new(RecordingHandler::probing(ctx.schedule_repository.clone()));

    for name in [ANIMAL_MOVED, FEEDING_TIME] {
        ctx.dispatcher.register_handler(name, events.clone());
    }

    TestZoo { ctx, clock, events }
}

impl TestZoo {
    pub async fn enclosure(&self, capacity: u32) -> Enclosure {
        self.ctx
            .zoo_service
            .create_enclosure(EnclosureFactory::new().capacity(capacity).input())
            .await
            .unwrap()
    }

    pub async fn admit(&self, name: &str, enclosure_id: EnclosureId) -> Animal {
        self.ctx
            .zoo_service
            .admit_animal(AnimalFactory::new().named(name).admission(enclosure_id))
            .await
            .unwrap()
    }

    pub async fn reload_enclosure(&self, enclosure: &Enclosure) -> Enclosure {
        self.ctx.zoo_service.get_enclosure(&enclosure.id).await.unwrap()
    }

    pub async fn reload_animal(&self, animal: &Animal) -> Animal {
        self.ctx.zoo_service.get_animal(&animal.id).await.unwrap()
    }
}

#[derive(Debug, Clone)]
pub struct RecordedEvent {
    pub name: String,
    pub event_id: Uuid,
    pub payload: serde_json::Value,
    /// Stored status of the schedule while a feeding-time event was handled
    pub schedule_status: Option<FeedingStatus>,
}

/// Keeps every event it sees, in delivery order
pub struct RecordingHandler {
    events: Mutex<Vec<RecordedEvent>>,
    schedules: Option<Arc<dyn FeedingScheduleRepository>>,
}

impl RecordingHandler {
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            schedules: None,
        }
    }

    /// Also look up the stored schedule of every feeding-time event
    pub fn probing(schedules: Arc<dyn FeedingScheduleRepository>) -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            schedules: Some(schedules),
        }
    }

    pub fn events(&self) -> Vec<RecordedEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn named(&self, name: &str) -> Vec<RecordedEvent> {
        self.events()
            .into_iter()
            .filter(|event| event.name == name)
            .collect()
    }
}

#[async_trait]
impl EventHandler for RecordingHandler {
    fn name(&self) -> &str {
        "recorder"
    }

    async fn handle(&self, event: &dyn DomainEvent) -> anyhow::Result<()> {
        let probe = match (
            &self.schedules,
            event.as_any().downcast_ref::<FeedingTimeEvent>(),
        ) {
            (Some(repo), Some(feeding)) => Some((repo.clone(), feeding.schedule_id)),
            _ => None,
        };
        let schedule_status = match probe {
            Some((repo, schedule_id)) => Some(repo.get(&schedule_id).await?.status()),
            None => None,
        };

        self.events.lock().unwrap().push(RecordedEvent {
            name: event.event_type().to_string(),
            event_id: event.event_id(),
            payload: event.payload(),
            schedule_status,
        });
        Ok(())
    }
}

/// Handler that always fails
pub struct FailingHandler;

#[async_trait]
impl EventHandler for FailingHandler {
    fn name(&self) -> &str {
        "failing"
    }

    async fn handle(&self, event: &dyn DomainEvent) -> anyhow::Result<()> {
        anyhow::bail!("cannot handle {}", event.event_type())
    }
}
