pub mod animal_status;
pub mod descriptors;
pub mod feeding_status;
pub mod gender;
pub mod identifiers;
pub mod occupancy;

pub use animal_status::AnimalStatus;
pub use descriptors::{AnimalName, EnclosureSize, EnclosureType, Food, Species};
pub use feeding_status::FeedingStatus;
pub use gender::Gender;
pub use identifiers::{AnimalId, EnclosureId, FeedingScheduleId};
pub use occupancy::Occupancy;
