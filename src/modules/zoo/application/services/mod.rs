pub mod animal_transfer;
pub mod feeding_organization;
pub mod zoo_service;
pub mod zoo_statistics;

pub use animal_transfer::AnimalTransfer;
pub use feeding_organization::{FeedingOrganization, FeedingReport};
pub use zoo_service::{NewAnimal, NewEnclosure, NewFeedingSchedule, ZooService};
pub use zoo_statistics::{ZooStatistics, ZooStatisticsSnapshot};
