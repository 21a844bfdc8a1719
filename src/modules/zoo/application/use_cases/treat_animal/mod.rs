mod command;
mod handler;
mod result;

pub use command::TreatAnimalCommand;
pub use handler::TreatAnimalHandler;
pub use result::TreatAnimalResult;
