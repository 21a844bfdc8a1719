/// Shared infrastructure concerns
///
/// Implementations of shared application ports used by every bounded context.
pub mod event_dispatcher;
pub mod event_handlers;

pub use event_dispatcher::{EventDispatcher, EventHandler};
pub use event_handlers::{AuditEntry, AuditTrail, LoggingEventHandler};
