use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::modules::zoo::domain::{
    errors::DomainError,
    events::AnimalMovedEvent,
    repositories::{AnimalRepository, EnclosureRepository},
    value_objects::{AnimalId, EnclosureId},
    Animal,
};
use crate::shared::application::{ensure_active, EventPublisher, OperationGuard, TimeProvider};
use crate::shared::errors::{AppResult, ResultExt};
use crate::shared::utils::{LogContext, TimedOperation};
use crate::{log_debug, log_info, log_warn};

/// Moves animals between enclosures.
///
/// All three aggregates are mutated as private copies and only written back
/// once every domain check has passed. The move is persisted before
/// `AnimalMoved` is published, after the operation guard is released; a
/// failed publish is reported but the move stands.
pub struct AnimalTransfer {
    animal_repo: Arc<dyn AnimalRepository>,
    enclosure_repo: Arc<dyn EnclosureRepository>,
    event_publisher: Arc<dyn EventPublisher>,
    clock: Arc<dyn TimeProvider>,
    guard: OperationGuard,
}

impl AnimalTransfer {
    pub fn new(
        animal_repo: Arc<dyn AnimalRepository>,
        enclosure_repo: Arc<dyn EnclosureRepository>,
        event_publisher: Arc<dyn EventPublisher>,
        clock: Arc<dyn TimeProvider>,
        guard: OperationGuard,
    ) -> Self {
        Self {
            animal_repo,
            enclosure_repo,
            event_publisher,
            clock,
            guard,
        }
    }

    pub async fn transfer_animal(
        &self,
        animal_id: &AnimalId,
        target_id: &EnclosureId,
    ) -> AppResult<Animal> {
        self.transfer_animal_with_cancel(animal_id, target_id, &CancellationToken::new())
            .await
    }

    /// Like `transfer_animal`, checking `cancel` before every step.
    /// Steps already persisted are not undone.
    pub async fn transfer_animal_with_cancel(
        &self,
        animal_id: &AnimalId,
        target_id: &EnclosureId,
        cancel: &CancellationToken,
    ) -> AppResult<Animal> {
        let lock = self.guard.acquire().await;
        let timer = TimedOperation::new("transfer animal");

        ensure_active(cancel, "getting animal")?;
        let mut animal = self.animal_repo.get(animal_id).await.context("getting animal")?;

        ensure_active(cancel, "getting enclosure")?;
        let mut target = self
            .enclosure_repo
            .get(target_id)
            .await
            .context("getting enclosure")?;

        ensure_active(cancel, "getting current enclosure")?;
        let source_id = animal
            .enclosure_id()
            .ok_or(DomainError::NilEnclosure)
            .context("getting current enclosure")?;
        let mut source = self
            .enclosure_repo
            .get(&source_id)
            .await
            .context("getting current enclosure")?;

        LogContext::step("transfer animal", "mutating aggregates");
        source
            .remove_animal(&animal.id)
            .context("removing animal from enclosure")?;
        // For a self-transfer `target` is a separate copy that still lists the animal
        target
            .add_animal(animal.id)
            .context("adding animal to enclosure")?;
        animal
            .move_to_enclosure(target.id)
            .context("moving animal to enclosure")?;

        ensure_active(cancel, "updating animal")?;
        self.animal_repo.update(&animal).await.context("updating animal")?;

        ensure_active(cancel, "updating source enclosure")?;
        self.enclosure_repo
            .update(&source)
            .await
            .context("updating source enclosure")?;

        ensure_active(cancel, "updating target enclosure")?;
        self.enclosure_repo
            .update(&target)
            .await
            .context("updating target enclosure")?;

        LogContext::transfer(
            animal.name.as_str(),
            &source.id.to_string(),
            &target.id.to_string(),
        );

        // The move is committed; handlers may start guarded operations of their own
        drop(lock);

        ensure_active(cancel, "publishing animal moved event")?;
        let event = AnimalMovedEvent::new(&animal, source.id, target.id, self.clock.now());
        log_debug!("Publishing animal moved event {}", event.event_id);
        if let Err(e) = self.event_publisher.publish(&event).await {
            log_warn!("Animal {} moved but delivery failed: {}", animal.id, e);
            return Err(e.with_context("publishing animal moved event"));
        }

        timer.finish_with_info(animal.name.as_str());
        log_info!("Animal {} now lives in enclosure {}", animal.id, target.id);
        Ok(animal)
    }
}
