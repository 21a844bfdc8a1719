use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::zoo::domain::repositories::FeedingScheduleRepository;
use crate::shared::{
    application::{OperationGuard, UseCase},
    errors::{AppResult, ResultExt},
};
use crate::log_debug;

use super::{command::CompleteFeedingCommand, result::CompleteFeedingResult};

/// Use case handler for marking a single feeding as done
pub struct CompleteFeedingHandler {
    schedule_repository: Arc<dyn FeedingScheduleRepository>,
    guard: OperationGuard,
}

impl CompleteFeedingHandler {
    pub fn new(
        schedule_repository: Arc<dyn FeedingScheduleRepository>,
        guard: OperationGuard,
    ) -> Self {
        Self {
            schedule_repository,
            guard,
        }
    }
}

#[async_trait]
impl UseCase<CompleteFeedingCommand, CompleteFeedingResult> for CompleteFeedingHandler {
    async fn execute(&self, command: CompleteFeedingCommand) -> AppResult<CompleteFeedingResult> {
        let _lock = self.guard.acquire().await;

        let mut schedule = self
            .schedule_repository
            .get(&command.schedule_id)
            .await
            .context("getting feeding schedule")?;

        schedule
            .done()
            .context("marking feeding schedule as done")?;

        self.schedule_repository
            .update(&schedule)
            .await
            .context("updating feeding schedule")?;

        log_debug!("Feeding {} completed", schedule.id);
        Ok(CompleteFeedingResult {
            schedule_id: schedule.id,
            animal_id: schedule.animal_id,
            time: schedule.time(),
            status: schedule.status(),
        })
    }
}
