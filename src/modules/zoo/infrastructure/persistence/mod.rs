pub mod animal_repository_impl;
pub mod enclosure_repository_impl;
pub mod feeding_schedule_repository_impl;

pub use animal_repository_impl::InMemoryAnimalRepository;
pub use enclosure_repository_impl::InMemoryEnclosureRepository;
pub use feeding_schedule_repository_impl::InMemoryFeedingScheduleRepository;
