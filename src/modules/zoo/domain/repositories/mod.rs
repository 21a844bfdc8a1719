pub mod animal_repository;
pub mod enclosure_repository;
pub mod feeding_schedule_repository;

pub use animal_repository::AnimalRepository;
pub use enclosure_repository::EnclosureRepository;
pub use feeding_schedule_repository::FeedingScheduleRepository;
