use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use std::sync::Arc;

use crate::modules::zoo::domain::{
    repositories::{AnimalRepository, EnclosureRepository, FeedingScheduleRepository},
    value_objects::{
        AnimalId, EnclosureId, EnclosureSize, EnclosureType, FeedingScheduleId, Gender,
    },
    Animal, Enclosure, FeedingSchedule,
};
use crate::shared::application::{OperationGuard, TimeProvider};
use crate::shared::errors::{AppResult, ResultExt};
use crate::shared::utils::Validator;
use crate::{log_debug, log_info};

/// Input for admitting a new animal
#[derive(Debug, Clone, Deserialize)]
pub struct NewAnimal {
    pub name: String,
    pub species: String,
    pub birth_date: NaiveDate,
    pub gender: Gender,
    pub favorite_food: String,
    /// Enclosure the animal moves into on arrival
    pub enclosure_id: EnclosureId,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewEnclosure {
    pub enclosure_type: String,
    pub size: u32,
    pub capacity: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewFeedingSchedule {
    pub animal_id: AnimalId,
    pub food: String,
    pub time: DateTime<Utc>,
}

/// Registry operations over animals, enclosures and feeding schedules
pub struct ZooService {
    animal_repo: Arc<dyn AnimalRepository>,
    enclosure_repo: Arc<dyn EnclosureRepository>,
    schedule_repo: Arc<dyn FeedingScheduleRepository>,
    clock: Arc<dyn TimeProvider>,
    guard: OperationGuard,
}

impl ZooService {
    pub fn new(
        animal_repo: Arc<dyn AnimalRepository>,
        enclosure_repo: Arc<dyn EnclosureRepository>,
        schedule_repo: Arc<dyn FeedingScheduleRepository>,
        clock: Arc<dyn TimeProvider>,
        guard: OperationGuard,
    ) -> Self {
        Self {
            animal_repo,
            enclosure_repo,
            schedule_repo,
            clock,
            guard,
        }
    }

    // ========================================================================
    // Animals
    // ========================================================================

    /// Create an animal directly inside an enclosure with a free place
    pub async fn admit_animal(&self, input: NewAnimal) -> AppResult<Animal> {
        Validator::validate_animal_name(&input.name)?;
        Validator::validate_species(&input.species)?;
        Validator::validate_food(&input.favorite_food)?;

        let _lock = self.guard.acquire().await;

        let mut enclosure = self
            .enclosure_repo
            .get(&input.enclosure_id)
            .await
            .context("getting enclosure")?;

        let mut animal = Animal::new(
            input.name.into(),
            input.species.into(),
            input.birth_date,
            input.gender,
            input.favorite_food.into(),
        );

        enclosure
            .add_animal(animal.id)
            .context("adding animal to enclosure")?;
        animal
            .move_to_enclosure(enclosure.id)
            .context("moving animal to enclosure")?;

        self.animal_repo.save(&animal).await.context("saving animal")?;
        self.enclosure_repo
            .update(&enclosure)
            .await
            .context("updating enclosure")?;

        log_info!(
            "Admitted {} the {} into enclosure {}",
            animal.name,
            animal.species,
            enclosure.id
        );
        Ok(animal)
    }

    pub async fn get_animal(&self, id: &AnimalId) -> AppResult<Animal> {
        self.animal_repo.get(id).await
    }

    pub async fn list_animals(&self) -> AppResult<Vec<Animal>> {
        self.animal_repo.get_all().await
    }

    pub async fn animals_in_enclosure(&self, enclosure_id: &EnclosureId) -> AppResult<Vec<Animal>> {
        self.animal_repo.find_by_enclosure(enclosure_id).await
    }

    /// Take the animal out of its enclosure, then delete it.
    /// Its feeding schedules are left in place.
    pub async fn remove_animal(&self, id: &AnimalId) -> AppResult<()> {
        let _lock = self.guard.acquire().await;

        let animal = self.animal_repo.get(id).await.context("getting animal")?;

        if let Some(enclosure_id) = animal.enclosure_id() {
            let mut enclosure = self
                .enclosure_repo
                .get(&enclosure_id)
                .await
                .context("getting current enclosure")?;
            enclosure
                .remove_animal(&animal.id)
                .context("removing animal from enclosure")?;
            self.enclosure_repo
                .update(&enclosure)
                .await
                .context("updating enclosure")?;
        }

        self.animal_repo
            .delete(&animal.id)
            .await
            .context("deleting animal")?;

        log_info!("Removed animal {} ({})", animal.id, animal.name);
        Ok(())
    }

    // ========================================================================
    // Enclosures
    // ========================================================================

    pub async fn create_enclosure(&self, input: NewEnclosure) -> AppResult<Enclosure> {
        Validator::validate_enclosure_type(&input.enclosure_type)?;
        Validator::validate_enclosure_size(input.size)?;

        let enclosure = Enclosure::new(
            EnclosureType::new(input.enclosure_type),
            EnclosureSize::new(input.size),
            input.capacity,
        );
        self.enclosure_repo.save(&enclosure).await?;

        log_debug!(
            "Created {} enclosure {} for {} animal(s)",
            enclosure.enclosure_type,
            enclosure.id,
            enclosure.capacity()
        );
        Ok(enclosure)
    }

    pub async fn get_enclosure(&self, id: &EnclosureId) -> AppResult<Enclosure> {
        self.enclosure_repo.get(id).await
    }

    pub async fn list_enclosures(&self) -> AppResult<Vec<Enclosure>> {
        self.enclosure_repo.get_all().await
    }

    pub async fn enclosures_by_type(&self, enclosure_type: &str) -> AppResult<Vec<Enclosure>> {
        self.enclosure_repo
            .find_by_type(&EnclosureType::from(enclosure_type))
            .await
    }

    pub async fn enclosures_with_space(&self) -> AppResult<Vec<Enclosure>> {
        self.enclosure_repo.find_with_space().await
    }

    /// Refused while any animal still lives there
    pub async fn delete_enclosure(&self, id: &EnclosureId) -> AppResult<()> {
        let _lock = self.guard.acquire().await;
        self.enclosure_repo.delete(id).await
    }

    pub async fn clean_enclosure(&self, id: &EnclosureId) -> AppResult<Enclosure> {
        let _lock = self.guard.acquire().await;

        let mut enclosure = self.enclosure_repo.get(id).await.context("getting enclosure")?;
        enclosure.clean(self.clock.now());
        self.enclosure_repo
            .update(&enclosure)
            .await
            .context("updating enclosure")?;

        Ok(enclosure)
    }

    // ========================================================================
    // Feeding schedules
    // ========================================================================

    pub async fn schedule_feeding(&self, input: NewFeedingSchedule) -> AppResult<FeedingSchedule> {
        Validator::validate_food(&input.food)?;

        let animal = self
            .animal_repo
            .get(&input.animal_id)
            .await
            .context("getting animal")?;

        let schedule = FeedingSchedule::new(animal.id, input.food.into(), input.time);
        self.schedule_repo
            .save(&schedule)
            .await
            .context("saving feeding schedule")?;

        log_debug!(
            "Scheduled {} for {} at {}",
            schedule.food,
            animal.name,
            schedule.time()
        );
        Ok(schedule)
    }

    pub async fn get_schedule(&self, id: &FeedingScheduleId) -> AppResult<FeedingSchedule> {
        self.schedule_repo.get(id).await
    }

    pub async fn list_schedules(&self) -> AppResult<Vec<FeedingSchedule>> {
        self.schedule_repo.get_all().await
    }

    pub async fn schedules_for_animal(&self, animal_id: &AnimalId) -> AppResult<Vec<FeedingSchedule>> {
        self.schedule_repo.find_by_animal(animal_id).await
    }

    /// Move a schedule to another time; past times are accepted
    pub async fn reschedule_feeding(
        &self,
        id: &FeedingScheduleId,
        new_time: DateTime<Utc>,
    ) -> AppResult<FeedingSchedule> {
        let _lock = self.guard.acquire().await;

        let mut schedule = self
            .schedule_repo
            .get(id)
            .await
            .context("getting feeding schedule")?;
        schedule.change_time(new_time);
        self.schedule_repo
            .update(&schedule)
            .await
            .context("updating feeding schedule")?;

        Ok(schedule)
    }

    pub async fn delete_schedule(&self, id: &FeedingScheduleId) -> AppResult<()> {
        let _lock = self.guard.acquire().await;
        self.schedule_repo.delete(id).await
    }
}
