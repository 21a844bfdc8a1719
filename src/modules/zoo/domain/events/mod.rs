mod zoo_events;

pub use zoo_events::*;
