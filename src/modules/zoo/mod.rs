pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::{AnimalTransfer, FeedingOrganization, ZooService, ZooStatistics};
pub use domain::{
    Animal, AnimalRepository, DomainError, Enclosure, EnclosureRepository, FeedingSchedule,
    FeedingScheduleRepository,
};
