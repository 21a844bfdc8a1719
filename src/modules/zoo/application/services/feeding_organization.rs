use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::modules::zoo::domain::{
    events::FeedingTimeEvent,
    repositories::{AnimalRepository, FeedingScheduleRepository},
};
use crate::shared::application::{ensure_active, EventPublisher, OperationGuard, TimeProvider};
use crate::shared::errors::{AppError, AppResult, ResultExt};
use crate::shared::utils::{LogContext, TimedOperation};
use crate::{log_debug, log_error, log_info};

/// Outcome of one feeding sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeedingReport {
    /// Schedules looked at
    pub examined: usize,
    /// Schedules that were due and are now done
    pub fed: usize,
    /// Schedules written back, fed or not
    pub persisted: usize,
}

/// Batch feeding of every due schedule.
///
/// `FeedingTime` goes out before the animal is fed, stamped with the injected
/// clock; the sweep's `now` only decides readiness. The sweep is not atomic:
/// schedules handled before a failure stay fed and persisted. Events are
/// dispatched while the operation guard is held.
pub struct FeedingOrganization {
    animal_repo: Arc<dyn AnimalRepository>,
    schedule_repo: Arc<dyn FeedingScheduleRepository>,
    event_publisher: Arc<dyn EventPublisher>,
    clock: Arc<dyn TimeProvider>,
    guard: OperationGuard,
    persist_all: bool,
}

impl FeedingOrganization {
    pub fn new(
        animal_repo: Arc<dyn AnimalRepository>,
        schedule_repo: Arc<dyn FeedingScheduleRepository>,
        event_publisher: Arc<dyn EventPublisher>,
        clock: Arc<dyn TimeProvider>,
        guard: OperationGuard,
    ) -> Self {
        Self {
            animal_repo,
            schedule_repo,
            event_publisher,
            clock,
            guard,
            persist_all: true,
        }
    }

    /// Write back only the schedules (and animals) a sweep actually fed
    pub fn with_persist_all(mut self, persist_all: bool) -> Self {
        self.persist_all = persist_all;
        self
    }

    /// Sweep using the injected clock's current time
    pub async fn feed_due(&self) -> AppResult<FeedingReport> {
        self.feed_all(self.clock.now()).await
    }

    pub async fn feed_all(&self, now: DateTime<Utc>) -> AppResult<FeedingReport> {
        self.feed_all_with_cancel(now, &CancellationToken::new())
            .await
    }

    pub async fn feed_all_with_cancel(
        &self,
        now: DateTime<Utc>,
        cancel: &CancellationToken,
    ) -> AppResult<FeedingReport> {
        let _lock = self.guard.acquire().await;
        let timer = TimedOperation::new("feed all");

        ensure_active(cancel, "getting feeding schedules")?;
        let schedules = self
            .schedule_repo
            .get_all()
            .await
            .context("getting feeding schedules")?;

        let mut report = FeedingReport {
            examined: schedules.len(),
            fed: 0,
            persisted: 0,
        };

        for mut schedule in schedules {
            let ready = schedule.is_ready(now);
            if !ready && !self.persist_all {
                continue;
            }

            ensure_active(cancel, "getting animal")?;
            let mut animal = self
                .animal_repo
                .get(&schedule.animal_id)
                .await
                .context("getting animal")?;

            if ready {
                let event = FeedingTimeEvent::new(&schedule, &animal, self.clock.now());
                log_debug!(
                    "Feeding time for {} ({}): {}",
                    animal.name,
                    animal.species,
                    schedule.food
                );
                self.event_publisher.dispatch(&event).await;

                animal.feed(schedule.food.clone());
                if let Err(e) = schedule.done() {
                    log_error!("Feeding schedule {} closed concurrently: {}", schedule.id, e);
                    return Err(AppError::from(e).with_context("marking feeding schedule as done"));
                }
                report.fed += 1;
            }

            ensure_active(cancel, "updating animal")?;
            self.animal_repo
                .update(&animal)
                .await
                .context("updating animal")?;

            ensure_active(cancel, "updating feeding schedule")?;
            self.schedule_repo
                .update(&schedule)
                .await
                .context("updating feeding schedule")?;
            report.persisted += 1;
        }

        LogContext::feeding_progress(report.fed, report.examined);
        timer.finish();
        log_info!(
            "Feeding sweep at {} persisted {} schedule(s)",
            now,
            report.persisted
        );
        Ok(report)
    }
}
