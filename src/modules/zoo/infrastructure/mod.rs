/// In-memory adapters for the repository contracts.
///
/// Durable stores plug in by implementing the same traits.
pub mod persistence;

pub use persistence::{
    InMemoryAnimalRepository, InMemoryEnclosureRepository, InMemoryFeedingScheduleRepository,
};
