/// Aggregates of the zoo context.
///
/// Each aggregate enforces its own invariants. Cross-aggregate consistency
/// (an animal's enclosure reference vs. the enclosure's members) is kept by
/// the application services.
pub mod animal;
pub mod enclosure;
pub mod feeding_schedule;

pub use animal::Animal;
pub use enclosure::Enclosure;
pub use feeding_schedule::FeedingSchedule;
