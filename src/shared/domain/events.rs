/// Base trait for domain events
///
/// Events are immutable records of something that already happened. They are
/// routed by `event_type()` and carry a JSON payload for auditing; handlers that
/// need the concrete type downcast through `as_any()`.
use chrono::{DateTime, Utc};
use std::any::Any;
use uuid::Uuid;

pub trait DomainEvent: Send + Sync + std::fmt::Debug {
    /// When the event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Unique identifier for this event
    fn event_id(&self) -> Uuid;

    /// Type of event (for routing)
    fn event_type(&self) -> &'static str;

    /// Serialized body of the event
    fn payload(&self) -> serde_json::Value;

    fn as_any(&self) -> &dyn Any;
}
