mod command;
mod handler;
mod result;

pub use command::CompleteFeedingCommand;
pub use handler::CompleteFeedingHandler;
pub use result::CompleteFeedingResult;
