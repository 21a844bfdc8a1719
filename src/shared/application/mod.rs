/// Shared application layer patterns
///
/// Ports and helpers used by every application service.
pub mod clock;
pub mod event_publisher;
pub mod operation_guard;
pub mod use_case;

pub use clock::{FixedTimeProvider, SystemTimeProvider, TimeProvider};
pub use event_publisher::EventPublisher;
pub use operation_guard::{ensure_active, OperationGuard};
pub use use_case::UseCase;
