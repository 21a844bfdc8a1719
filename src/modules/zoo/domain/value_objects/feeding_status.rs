use serde::{Deserialize, Serialize};

use crate::modules::zoo::domain::errors::DomainError;

/// Fulfilment state of a feeding schedule.
///
/// Moves one way only: `Pending` -> `Done`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedingStatus {
    #[default]
    Pending,
    Done,
}

impl FeedingStatus {
    /// The status after completion, or `AlreadyDone` if there is nothing left to complete
    pub fn done(self) -> Result<FeedingStatus, DomainError> {
        match self {
            FeedingStatus::Pending => Ok(FeedingStatus::Done),
            FeedingStatus::Done => Err(DomainError::AlreadyDone),
        }
    }

    pub fn is_done(self) -> bool {
        self == FeedingStatus::Done
    }
}

impl std::fmt::Display for FeedingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedingStatus::Pending => write!(f, "pending"),
            FeedingStatus::Done => write!(f, "done"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_becomes_done() {
        assert_eq!(FeedingStatus::Pending.done(), Ok(FeedingStatus::Done));
    }

    #[test]
    fn done_cannot_be_completed_again() {
        assert_eq!(FeedingStatus::Done.done(), Err(DomainError::AlreadyDone));
    }
}
