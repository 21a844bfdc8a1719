pub mod services;
pub mod use_cases;

pub use services::{
    AnimalTransfer, FeedingOrganization, FeedingReport, NewAnimal, NewEnclosure,
    NewFeedingSchedule, ZooService, ZooStatistics, ZooStatisticsSnapshot,
};
pub use use_cases::{
    CompleteFeedingCommand, CompleteFeedingHandler, CompleteFeedingResult, TreatAnimalCommand,
    TreatAnimalHandler, TreatAnimalResult,
};
