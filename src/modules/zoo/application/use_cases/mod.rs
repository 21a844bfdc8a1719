pub mod complete_feeding;
pub mod treat_animal;

pub use complete_feeding::{CompleteFeedingCommand, CompleteFeedingHandler, CompleteFeedingResult};
pub use treat_animal::{TreatAnimalCommand, TreatAnimalHandler, TreatAnimalResult};
