use async_trait::async_trait;

use crate::shared::domain::DomainEvent;
use crate::shared::errors::AppResult;

/// Port (interface) for publishing domain events
/// Infrastructure layer implements this (in-process dispatcher, message queue, ...)
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Deliver to every handler, then report handler failures as one error
    async fn publish(&self, event: &dyn DomainEvent) -> AppResult<()>;

    /// Deliver to every handler; failures are logged, never returned
    async fn dispatch(&self, event: &dyn DomainEvent);
}
