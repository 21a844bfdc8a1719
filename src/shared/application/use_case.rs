use crate::shared::errors::AppResult;
/// Base trait for use cases following the command/handler pattern
///
/// # Example
///
/// ```ignore
/// struct TreatAnimalCommand {
///     animal_id: AnimalId,
/// }
///
/// #[async_trait]
/// impl UseCase<TreatAnimalCommand, TreatAnimalResult> for TreatAnimalHandler {
///     async fn execute(&self, command: TreatAnimalCommand) -> AppResult<TreatAnimalResult> {
///         // Use case logic here
///     }
/// }
/// ```
use async_trait::async_trait;

/// Base trait for use cases (command handlers)
#[async_trait]
pub trait UseCase<TCommand, TResult> {
    /// Execute the use case with the given command
    async fn execute(&self, command: TCommand) -> AppResult<TResult>;
}
