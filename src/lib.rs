pub mod modules;
pub mod shared;

use modules::zoo::{
    application::{
        AnimalTransfer, CompleteFeedingHandler, FeedingOrganization, TreatAnimalHandler,
        ZooService, ZooStatistics,
    },
    domain::events::{ANIMAL_MOVED, FEEDING_TIME},
    infrastructure::{
        InMemoryAnimalRepository, InMemoryEnclosureRepository, InMemoryFeedingScheduleRepository,
    },
    AnimalRepository, EnclosureRepository, FeedingScheduleRepository,
};
use shared::{
    application::{OperationGuard, SystemTimeProvider, TimeProvider},
    errors::AppResult,
    infrastructure::{AuditTrail, EventDispatcher, EventHandler, LoggingEventHandler},
    utils::init_logger,
    ZooConfig,
};
use std::sync::Arc;

/// Composition root: one dispatcher, one clock, one operation guard and the
/// services built on top of them.
pub struct ZooContext {
    pub config: ZooConfig,
    pub clock: Arc<dyn TimeProvider>,
    pub guard: OperationGuard,

    pub animal_repository: Arc<dyn AnimalRepository>,
    pub enclosure_repository: Arc<dyn EnclosureRepository>,
    pub schedule_repository: Arc<dyn FeedingScheduleRepository>,

    pub dispatcher: Arc<EventDispatcher>,
    pub audit_trail: Arc<AuditTrail>,

    pub zoo_service: Arc<ZooService>,
    pub animal_transfer: Arc<AnimalTransfer>,
    pub feeding_organization: Arc<FeedingOrganization>,
    pub statistics: Arc<ZooStatistics>,
    pub treat_animal: Arc<TreatAnimalHandler>,
    pub complete_feeding: Arc<CompleteFeedingHandler>,
}

impl ZooContext {
    /// Load configuration from the environment and build on the wall clock
    pub fn from_env() -> AppResult<Self> {
        let config = ZooConfig::from_env()?;
        Ok(Self::initialize(config))
    }

    /// Install logging and build on the wall clock
    pub fn initialize(config: ZooConfig) -> Self {
        init_logger(config.log_level);
        log::info!("Initializing zoo context");
        Self::with_time_provider(config, Arc::new(SystemTimeProvider))
    }

    /// In-memory storage with the given clock
    pub fn with_time_provider(config: ZooConfig, clock: Arc<dyn TimeProvider>) -> Self {
        Self::with_repositories(
            config,
            clock,
            Arc::new(InMemoryAnimalRepository::new()),
            Arc::new(InMemoryEnclosureRepository::new()),
            Arc::new(InMemoryFeedingScheduleRepository::new()),
        )
    }

    /// Any storage adapters with the given clock
    pub fn with_repositories(
        config: ZooConfig,
        clock: Arc<dyn TimeProvider>,
        animal_repository: Arc<dyn AnimalRepository>,
        enclosure_repository: Arc<dyn EnclosureRepository>,
        schedule_repository: Arc<dyn FeedingScheduleRepository>,
    ) -> Self {
        let guard = OperationGuard::new();

        // Event handlers
        let dispatcher = Arc::new(EventDispatcher::new());
        let audit_trail = Arc::new(AuditTrail::new(config.audit_capacity));
        let logging: Arc<dyn EventHandler> = Arc::new(LoggingEventHandler);
        for event_name in [ANIMAL_MOVED, FEEDING_TIME] {
            dispatcher.register_handler(event_name, logging.clone());
            dispatcher.register_handler(event_name, audit_trail.clone());
        }

        // Services
        let zoo_service = Arc::new(ZooService::new(
            animal_repository.clone(),
            enclosure_repository.clone(),
            schedule_repository.clone(),
            clock.clone(),
            guard.clone(),
        ));
        let animal_transfer = Arc::new(AnimalTransfer::new(
            animal_repository.clone(),
            enclosure_repository.clone(),
            dispatcher.clone(),
            clock.clone(),
            guard.clone(),
        ));
        let feeding_organization = Arc::new(
            FeedingOrganization::new(
                animal_repository.clone(),
                schedule_repository.clone(),
                dispatcher.clone(),
                clock.clone(),
                guard.clone(),
            )
            .with_persist_all(config.persist_all_schedules),
        );
        let statistics = Arc::new(ZooStatistics::new(
            animal_repository.clone(),
            enclosure_repository.clone(),
            schedule_repository.clone(),
            clock.clone(),
            config.timezone,
        ));

        // Use cases
        let treat_animal = Arc::new(TreatAnimalHandler::new(
            animal_repository.clone(),
            guard.clone(),
        ));
        let complete_feeding = Arc::new(CompleteFeedingHandler::new(
            schedule_repository.clone(),
            guard.clone(),
        ));

        Self {
            config,
            clock,
            guard,
            animal_repository,
            enclosure_repository,
            schedule_repository,
            dispatcher,
            audit_trail,
            zoo_service,
            animal_transfer,
            feeding_organization,
            statistics,
            treat_animal,
            complete_feeding,
        }
    }
}
