/// Serialization and cancellation for multi-step use cases
///
/// Repositories lock per call only. A use case that loads, mutates and
/// persists several aggregates holds the guard's lock for its whole run, so
/// two such use cases never interleave between load and persist. Clones share
/// the same lock.
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};
use tokio_util::sync::CancellationToken;

use crate::shared::errors::{AppError, AppResult};

#[derive(Debug, Clone, Default)]
pub struct OperationGuard {
    lock: Arc<Mutex<()>>,
}

impl OperationGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access; released when the returned guard drops
    pub async fn acquire(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().await
    }

    pub fn is_busy(&self) -> bool {
        self.lock.try_lock().is_err()
    }
}

/// Fail with `Cancelled` if the caller gave up before `step`
pub fn ensure_active(token: &CancellationToken, step: &str) -> AppResult<()> {
    if token.is_cancelled() {
        return Err(AppError::Cancelled(step.to_string()));
    }
    Ok(())
}
