use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::shared::application::EventPublisher;
use crate::shared::domain::DomainEvent;
use crate::shared::errors::{AppError, AppResult};

/// Subscriber for domain events of one or more names.
///
/// `feeding.time` is delivered while the feeding sweep holds the operation
/// guard, so a handler must not call guarded services (transfer, treat,
/// complete feeding, admission) from `handle`; it would wait forever.
#[async_trait]
pub trait EventHandler: Send + Sync {
    /// Name used in delivery logs
    fn name(&self) -> &str;

    async fn handle(&self, event: &dyn DomainEvent) -> anyhow::Result<()>;
}

/// In-process, non-durable event fan-out.
///
/// Handlers run one after another in registration order for the event's name.
/// A failing handler never stops delivery to the ones after it. Nothing is
/// stored: an event delivered to no handler is gone.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: DashMap<String, Vec<Arc<dyn EventHandler>>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_handler(&self, event_name: &str, handler: Arc<dyn EventHandler>) {
        debug!(
            "Registering handler '{}' for event '{}'",
            handler.name(),
            event_name
        );
        self.handlers
            .entry(event_name.to_string())
            .or_default()
            .push(handler);
    }

    pub fn handler_count(&self, event_name: &str) -> usize {
        self.handlers
            .get(event_name)
            .map(|handlers| handlers.len())
            .unwrap_or(0)
    }

    /// Snapshot so no map shard stays locked while handlers await
    fn handlers_for(&self, event_name: &str) -> Vec<Arc<dyn EventHandler>> {
        self.handlers
            .get(event_name)
            .map(|handlers| handlers.value().clone())
            .unwrap_or_default()
    }

    /// Run every handler, returning the failures as `(handler, error)` lines
    async fn deliver(&self, event: &dyn DomainEvent) -> Vec<String> {
        let handlers = self.handlers_for(event.event_type());
        if handlers.is_empty() {
            debug!("No handlers for event '{}'", event.event_type());
            return Vec::new();
        }

        let mut failures = Vec::new();
        for handler in handlers {
            if let Err(e) = handler.handle(event).await {
                warn!(
                    "Handler '{}' failed on event '{}' ({}): {:#}",
                    handler.name(),
                    event.event_type(),
                    event.event_id(),
                    e
                );
                failures.push(format!("{}: {:#}", handler.name(), e));
            }
        }
        failures
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<String> = self.handlers.iter().map(|e| e.key().clone()).collect();
        f.debug_struct("EventDispatcher")
            .field("events", &names)
            .finish()
    }
}

#[async_trait]
impl EventPublisher for EventDispatcher {
    async fn publish(&self, event: &dyn DomainEvent) -> AppResult<()> {
        let failures = self.deliver(event).await;
        if failures.is_empty() {
            return Ok(());
        }

        Err(AppError::EventDeliveryError(format!(
            "{} handler(s) failed for '{}': {}",
            failures.len(),
            event.event_type(),
            failures.join("; ")
        )))
    }

    async fn dispatch(&self, event: &dyn DomainEvent) {
        self.deliver(event).await;
    }
}
