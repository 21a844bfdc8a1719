/// Animal transfer tests
///
/// Tests cover:
/// - Membership on both sides after a move
/// - Rejected moves leave every stored aggregate untouched
/// - Event publication after the move is persisted
/// - Serialized concurrent transfers
mod utils;

use async_trait::async_trait;
use mockall::mock;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use utils::factories::AnimalFactory;
use utils::helpers::{build_test_context, test_now, FailingHandler};
use zoo_lib::modules::zoo::{
    application::{TreatAnimalCommand, TreatAnimalHandler},
    domain::{
        events::ANIMAL_MOVED,
        value_objects::{AnimalId, AnimalStatus, EnclosureId},
    },
    Animal, AnimalRepository, DomainError,
};
use zoo_lib::shared::{
    application::{SystemTimeProvider, UseCase},
    domain::DomainEvent,
    errors::{AppError, AppResult},
    infrastructure::EventHandler,
    ZooConfig,
};
use zoo_lib::ZooContext;

// ============================================================================
// Successful moves
// ============================================================================

#[tokio::test]
async fn transfer_moves_membership_and_reference() {
    let zoo = build_test_context();
    let home = zoo.enclosure(2).await;
    let target = zoo.enclosure(2).await;
    let animal = zoo.admit("Marty", home.id).await;

    let moved = zoo
        .ctx
        .animal_transfer
        .transfer_animal(&animal.id, &target.id)
        .await
        .unwrap();

    assert_eq!(moved.enclosure_id(), Some(target.id));
    assert_eq!(zoo.reload_animal(&animal).await.enclosure_id(), Some(target.id));
    assert!(zoo.reload_enclosure(&target).await.contains(&animal.id));
    assert!(!zoo.reload_enclosure(&home).await.contains(&animal.id));
}

#[tokio::test]
async fn transfer_publishes_one_animal_moved_event() {
    let zoo = build_test_context();
    let home = zoo.enclosure(1).await;
    let target = zoo.enclosure(1).await;
    let animal = zoo.admit("Gloria", home.id).await;

    zoo.ctx
        .animal_transfer
        .transfer_animal(&animal.id, &target.id)
        .await
        .unwrap();

    let events = zoo.events.named(ANIMAL_MOVED);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].payload["from_enclosure"], home.id.to_string());
    assert_eq!(events[0].payload["to_enclosure"], target.id.to_string());
    assert_eq!(events[0].payload["animal_name"], "Gloria");
    assert_eq!(
        events[0].payload["occurred_at"],
        serde_json::to_value(test_now()).unwrap()
    );

    let audited = zoo.ctx.audit_trail.entries_named(ANIMAL_MOVED).await;
    assert_eq!(audited.len(), 1);
    assert_eq!(audited[0].event_id, events[0].event_id);
}

#[tokio::test]
async fn back_and_forth_between_two_single_places() {
    // E1 capacity 1 holds A, E2 capacity 1 is empty
    let zoo = build_test_context();
    let e1 = zoo.enclosure(1).await;
    let e2 = zoo.enclosure(1).await;
    let a = zoo.admit("Alex", e1.id).await;
    let transfer = &zoo.ctx.animal_transfer;

    transfer.transfer_animal(&a.id, &e2.id).await.unwrap();
    assert_eq!(zoo.reload_enclosure(&e1).await.occupancy().count(), 0);
    assert!(zoo.reload_enclosure(&e2).await.contains(&a.id));

    transfer.transfer_animal(&a.id, &e1.id).await.unwrap();
    assert!(zoo.reload_enclosure(&e1).await.contains(&a.id));
    assert!(zoo.reload_enclosure(&e2).await.is_empty());
}

// ============================================================================
// Rejected moves
// ============================================================================

#[tokio::test]
async fn transfer_to_current_enclosure_is_a_duplicate_add() {
    let zoo = build_test_context();
    let e1 = zoo.enclosure(1).await;
    let e2 = zoo.enclosure(1).await;
    let a = zoo.admit("Alex", e1.id).await;
    zoo.ctx
        .animal_transfer
        .transfer_animal(&a.id, &e2.id)
        .await
        .unwrap();

    let err = zoo
        .ctx
        .animal_transfer
        .transfer_animal(&a.id, &e2.id)
        .await
        .unwrap_err();

    assert_eq!(err.domain_error(), Some(&DomainError::AlreadyMember));
    assert_eq!(err.contexts(), vec!["adding animal to enclosure"]);
    let e2_after = zoo.reload_enclosure(&e2).await;
    assert!(e2_after.contains(&a.id));
    assert_eq!(e2_after.occupancy().count(), 1);
    assert_eq!(zoo.events.named(ANIMAL_MOVED).len(), 1);
}

#[tokio::test]
async fn full_target_leaves_everything_as_it_was() {
    let zoo = build_test_context();
    let home = zoo.enclosure(2).await;
    let full = zoo.enclosure(1).await;
    let animal = zoo.admit("Marty", home.id).await;
    let resident = zoo.admit("Melman", full.id).await;

    let err = zoo
        .ctx
        .animal_transfer
        .transfer_animal(&animal.id, &full.id)
        .await
        .unwrap_err();

    assert_eq!(err.domain_error(), Some(&DomainError::EnclosureFull));
    assert_eq!(err.contexts(), vec!["adding animal to enclosure"]);
    assert!(zoo.reload_enclosure(&home).await.contains(&animal.id));
    assert_eq!(zoo.reload_animal(&animal).await.enclosure_id(), Some(home.id));
    let full_after = zoo.reload_enclosure(&full).await;
    assert!(full_after.contains(&resident.id));
    assert_eq!(full_after.occupancy().count(), 1);
    assert!(zoo.events.events().is_empty());
}

#[tokio::test]
async fn unknown_target_fails_while_getting_enclosure() {
    let zoo = build_test_context();
    let home = zoo.enclosure(1).await;
    let animal = zoo.admit("Marty", home.id).await;

    let err = zoo
        .ctx
        .animal_transfer
        .transfer_animal(&animal.id, &EnclosureId::new())
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.contexts(), vec!["getting enclosure"]);
}

#[tokio::test]
async fn cancelled_before_start_changes_nothing() {
    let zoo = build_test_context();
    let home = zoo.enclosure(1).await;
    let target = zoo.enclosure(1).await;
    let animal = zoo.admit("Marty", home.id).await;
    let token = CancellationToken::new();
    token.cancel();

    let err = zoo
        .ctx
        .animal_transfer
        .transfer_animal_with_cancel(&animal.id, &target.id, &token)
        .await
        .unwrap_err();

    assert!(err.is_cancelled());
    assert!(zoo.reload_enclosure(&home).await.contains(&animal.id));
    assert!(zoo.reload_enclosure(&target).await.is_empty());
}

// ============================================================================
// Publication after commit
// ============================================================================

#[tokio::test]
async fn failed_publication_is_reported_but_move_stands() {
    let zoo = build_test_context();
    zoo.ctx
        .dispatcher
        .register_handler(ANIMAL_MOVED, Arc::new(FailingHandler));
    let home = zoo.enclosure(1).await;
    let target = zoo.enclosure(1).await;
    let animal = zoo.admit("Marty", home.id).await;

    let err = zoo
        .ctx
        .animal_transfer
        .transfer_animal(&animal.id, &target.id)
        .await
        .unwrap_err();

    assert!(matches!(err.root(), AppError::EventDeliveryError(_)));
    assert_eq!(err.contexts(), vec!["publishing animal moved event"]);
    assert!(zoo.reload_enclosure(&target).await.contains(&animal.id));
    // Handlers registered before the failing one still saw the event
    assert_eq!(zoo.events.named(ANIMAL_MOVED).len(), 1);
}

/// Treats a patient whenever an animal has moved
struct TreatOnMove {
    treat: Arc<TreatAnimalHandler>,
    patient: AnimalId,
}

#[async_trait]
impl EventHandler for TreatOnMove {
    fn name(&self) -> &str {
        "treat-on-move"
    }

    async fn handle(&self, _event: &dyn DomainEvent) -> anyhow::Result<()> {
        self.treat
            .execute(TreatAnimalCommand::new(self.patient))
            .await?;
        Ok(())
    }
}

#[tokio::test]
async fn moved_handlers_may_run_guarded_use_cases() {
    let zoo = build_test_context();
    let home = zoo.enclosure(1).await;
    let target = zoo.enclosure(1).await;
    let animal = zoo.admit("Marty", home.id).await;
    let patient = AnimalFactory::new().named("Mort").sick().build();
    zoo.ctx.animal_repository.save(&patient).await.unwrap();
    zoo.ctx.dispatcher.register_handler(
        ANIMAL_MOVED,
        Arc::new(TreatOnMove {
            treat: zoo.ctx.treat_animal.clone(),
            patient: patient.id,
        }),
    );

    let moved = tokio::time::timeout(
        Duration::from_secs(5),
        zoo.ctx.animal_transfer.transfer_animal(&animal.id, &target.id),
    )
    .await
    .expect("transfer should not wait on its own guard");

    assert!(moved.is_ok());
    assert!(zoo.reload_animal(&patient).await.is_healthy());
    assert!(!zoo.ctx.guard.is_busy());
}

// ============================================================================
// Storage failures
// ============================================================================

mock! {
    pub Animals {}

    #[async_trait]
    impl AnimalRepository for Animals {
        async fn find_by_id(&self, id: &AnimalId) -> AppResult<Option<Animal>>;
        async fn get(&self, id: &AnimalId) -> AppResult<Animal>;
        async fn save(&self, animal: &Animal) -> AppResult<()>;
        async fn update(&self, animal: &Animal) -> AppResult<()>;
        async fn delete(&self, id: &AnimalId) -> AppResult<()>;
        async fn get_all(&self) -> AppResult<Vec<Animal>>;
        async fn count(&self) -> AppResult<usize>;
        async fn count_by_status(&self, status: AnimalStatus) -> AppResult<usize>;
        async fn find_by_enclosure(&self, enclosure_id: &EnclosureId) -> AppResult<Vec<Animal>>;
    }
}

#[tokio::test]
async fn failed_animal_write_aborts_before_enclosures_are_written() {
    let seed = build_test_context();
    let home = seed.enclosure(1).await;
    let target = seed.enclosure(1).await;
    let stored = seed.admit("Marty", home.id).await;

    let mut animals = MockAnimals::new();
    let loaded = stored.clone();
    animals
        .expect_get()
        .returning(move |_| Ok(loaded.clone()));
    animals
        .expect_update()
        .times(1)
        .returning(|_| Err(AppError::RepositoryFailure("write timed out".into())));

    let ctx = ZooContext::with_repositories(
        ZooConfig::default(),
        Arc::new(SystemTimeProvider),
        Arc::new(animals),
        seed.ctx.enclosure_repository.clone(),
        seed.ctx.schedule_repository.clone(),
    );

    let err = ctx
        .animal_transfer
        .transfer_animal(&stored.id, &target.id)
        .await
        .unwrap_err();

    assert!(matches!(err.root(), AppError::RepositoryFailure(_)));
    assert_eq!(err.contexts(), vec!["updating animal"]);
    assert!(seed.reload_enclosure(&home).await.contains(&stored.id));
    assert!(seed.reload_enclosure(&target).await.is_empty());
}

// ============================================================================
// Concurrency
// ============================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_transfers_never_overfill_an_enclosure() {
    let zoo = build_test_context();
    let target = zoo.enclosure(1).await;
    let mut animals = Vec::new();
    for n in 0..8 {
        let home = zoo.enclosure(1).await;
        animals.push(zoo.admit(&format!("Zebra {n}"), home.id).await);
    }

    let handles: Vec<_> = animals
        .iter()
        .map(|animal| {
            let transfer = zoo.ctx.animal_transfer.clone();
            let animal_id = animal.id;
            let target_id = target.id;
            tokio::spawn(async move { transfer.transfer_animal(&animal_id, &target_id).await })
        })
        .collect();

    let results = futures::future::join_all(handles).await;
    let moved = results
        .into_iter()
        .filter(|joined| matches!(joined, Ok(Ok(_))))
        .count();

    assert_eq!(moved, 1);
    let target_after = zoo.reload_enclosure(&target).await;
    assert_eq!(target_after.occupancy().count(), 1);

    // Every animal is a member of exactly the enclosure it points to
    for animal in &animals {
        let animal = zoo.reload_animal(animal).await;
        let enclosure = zoo
            .ctx
            .zoo_service
            .get_enclosure(&animal.enclosure_id().unwrap())
            .await
            .unwrap();
        assert!(enclosure.contains(&animal.id));
    }
}
