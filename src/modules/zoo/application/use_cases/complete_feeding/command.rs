use crate::modules::zoo::domain::value_objects::FeedingScheduleId;

/// Command for closing a feeding schedule by hand
#[derive(Debug, Clone)]
pub struct CompleteFeedingCommand {
    pub schedule_id: FeedingScheduleId,
}

impl CompleteFeedingCommand {
    pub fn new(schedule_id: FeedingScheduleId) -> Self {
        Self { schedule_id }
    }
}
