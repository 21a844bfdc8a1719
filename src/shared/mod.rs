// Shared Kernel - Domain Driven Design
// Following Clean Architecture + Hexagonal Architecture patterns

pub mod application; // Shared application layer patterns (ports, clock, use cases)
pub mod config; // Environment-driven settings
pub mod domain; // Shared domain concepts (events)
pub mod errors; // Shared error types
pub mod infrastructure; // Shared infrastructure (event dispatch)
pub mod utils; // Shared utilities

// Re-exports for convenience
pub use config::ZooConfig;
pub use errors::{AppError, AppResult};
