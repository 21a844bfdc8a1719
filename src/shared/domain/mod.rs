/// Shared domain concepts
pub mod events;

pub use events::DomainEvent;
