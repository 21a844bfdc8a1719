pub mod aggregates;
pub mod errors;
pub mod events;
pub mod repositories;
pub mod value_objects;

// Re-exports for easy access
pub use aggregates::{Animal, Enclosure, FeedingSchedule};
pub use errors::DomainError;
pub use repositories::{AnimalRepository, EnclosureRepository, FeedingScheduleRepository};
