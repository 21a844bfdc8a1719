use chrono::{DateTime, Duration, Local, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::Serialize;
use std::sync::Arc;

use crate::modules::zoo::domain::{
    repositories::{AnimalRepository, EnclosureRepository, FeedingScheduleRepository},
    value_objects::{AnimalStatus, FeedingStatus},
};
use crate::shared::application::TimeProvider;
use crate::shared::errors::{AppError, AppResult, ResultExt};
use crate::shared::utils::TimedOperation;

/// All counters taken together
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZooStatisticsSnapshot {
    pub taken_at: DateTime<Utc>,
    pub total_animals: usize,
    pub healthy_animals: usize,
    pub sick_animals: usize,
    pub total_enclosures: usize,
    pub free_enclosures: usize,
    pub total_feeding_schedules: usize,
    pub completed_feedings_today: usize,
    pub pending_feedings_today: usize,
}

/// Read-only counters over the three repositories.
///
/// "Today" is `[start of day, start of day + 24h)` around the clock's current
/// time, in the configured zone or the server's local zone.
pub struct ZooStatistics {
    animal_repo: Arc<dyn AnimalRepository>,
    enclosure_repo: Arc<dyn EnclosureRepository>,
    schedule_repo: Arc<dyn FeedingScheduleRepository>,
    clock: Arc<dyn TimeProvider>,
    timezone: Option<Tz>,
}

impl ZooStatistics {
    pub fn new(
        animal_repo: Arc<dyn AnimalRepository>,
        enclosure_repo: Arc<dyn EnclosureRepository>,
        schedule_repo: Arc<dyn FeedingScheduleRepository>,
        clock: Arc<dyn TimeProvider>,
        timezone: Option<Tz>,
    ) -> Self {
        Self {
            animal_repo,
            enclosure_repo,
            schedule_repo,
            clock,
            timezone,
        }
    }

    pub async fn total_animals(&self) -> AppResult<usize> {
        self.animal_repo.count().await.context("counting animals")
    }

    pub async fn healthy_animals(&self) -> AppResult<usize> {
        self.animal_repo
            .count_by_status(AnimalStatus::Healthy)
            .await
            .context("counting healthy animals")
    }

    pub async fn sick_animals(&self) -> AppResult<usize> {
        self.animal_repo
            .count_by_status(AnimalStatus::Sick)
            .await
            .context("counting sick animals")
    }

    pub async fn total_enclosures(&self) -> AppResult<usize> {
        self.enclosure_repo.count().await.context("counting enclosures")
    }

    pub async fn free_enclosures(&self) -> AppResult<usize> {
        self.enclosure_repo
            .count_free()
            .await
            .context("counting free enclosures")
    }

    pub async fn total_feeding_schedules(&self) -> AppResult<usize> {
        self.schedule_repo
            .count()
            .await
            .context("counting feeding schedules")
    }

    pub async fn completed_feedings_today(&self) -> AppResult<usize> {
        self.feedings_today(FeedingStatus::Done)
            .await
            .context("counting completed feedings")
    }

    pub async fn pending_feedings_today(&self) -> AppResult<usize> {
        self.feedings_today(FeedingStatus::Pending)
            .await
            .context("counting pending feedings")
    }

    /// Every counter, queried concurrently
    pub async fn snapshot(&self) -> AppResult<ZooStatisticsSnapshot> {
        let timer = TimedOperation::new("statistics snapshot");
        let taken_at = self.clock.now();

        let (
            total_animals,
            healthy_animals,
            sick_animals,
            total_enclosures,
            free_enclosures,
            total_feeding_schedules,
            completed_feedings_today,
            pending_feedings_today,
        ) = futures::try_join!(
            self.total_animals(),
            self.healthy_animals(),
            self.sick_animals(),
            self.total_enclosures(),
            self.free_enclosures(),
            self.total_feeding_schedules(),
            self.completed_feedings_today(),
            self.pending_feedings_today(),
        )?;

        timer.finish();
        Ok(ZooStatisticsSnapshot {
            taken_at,
            total_animals,
            healthy_animals,
            sick_animals,
            total_enclosures,
            free_enclosures,
            total_feeding_schedules,
            completed_feedings_today,
            pending_feedings_today,
        })
    }

    /// Bounds of the current calendar day as a half-open UTC range
    pub fn today(&self) -> AppResult<(DateTime<Utc>, DateTime<Utc>)> {
        let now = self.clock.now();
        let start = match self.timezone {
            Some(tz) => start_of_day(now.with_timezone(&tz))?,
            None => start_of_day(now.with_timezone(&Local))?,
        };
        Ok((start, start + Duration::hours(24)))
    }

    async fn feedings_today(&self, status: FeedingStatus) -> AppResult<usize> {
        let (start, end) = self.today()?;
        self.schedule_repo
            .count_by_status_in_range(status, start, end)
            .await
    }
}

/// First existing instant of `at`'s local date. A zone whose midnight falls
/// into a DST gap starts its day an hour later.
fn start_of_day<Z: TimeZone>(at: DateTime<Z>) -> AppResult<DateTime<Utc>> {
    let zone = at.timezone();
    let midnight = at.date_naive().and_time(NaiveTime::MIN);

    zone.from_local_datetime(&midnight)
        .earliest()
        .or_else(|| {
            zone.from_local_datetime(&(midnight + Duration::hours(1)))
                .earliest()
        })
        .map(|start| start.with_timezone(&Utc))
        .ok_or_else(|| {
            AppError::ValidationError(format!("No start of day for {}", at.date_naive()))
        })
}
