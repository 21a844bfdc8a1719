/// Test data factories using builder pattern
///
/// Provides convenient methods to create test data with sensible defaults
use chrono::{DateTime, NaiveDate, Utc};
use zoo_lib::modules::zoo::{
    application::{NewAnimal, NewEnclosure, NewFeedingSchedule},
    domain::value_objects::{AnimalId, AnimalStatus, EnclosureId, EnclosureSize, Gender},
    Animal, Enclosure, FeedingSchedule,
};

pub struct AnimalFactory {
    name: String,
    species: String,
    birth_date: NaiveDate,
    gender: Gender,
    favorite_food: String,
    status: AnimalStatus,
}

impl Default for AnimalFactory {
    fn default() -> Self {
        Self {
            name: "Marty".to_string(),
            species: "Zebra".to_string(),
            birth_date: NaiveDate::from_ymd_opt(2019, 4, 2).unwrap(),
            gender: Gender::Male,
            favorite_food: "Hay".to_string(),
            status: AnimalStatus::Healthy,
        }
    }
}

impl AnimalFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn species(mut self, species: &str) -> Self {
        self.species = species.to_string();
        self
    }

    pub fn favorite_food(mut self, food: &str) -> Self {
        self.favorite_food = food.to_string();
        self
    }

    pub fn female(mut self) -> Self {
        self.gender = Gender::Female;
        self
    }

    pub fn sick(mut self) -> Self {
        self.status = AnimalStatus::Sick;
        self
    }

    /// Aggregate that lives nowhere yet
    pub fn build(self) -> Animal {
        Animal::new(
            self.name.into(),
            self.species.into(),
            self.birth_date,
            self.gender,
            self.favorite_food.into(),
        )
        .with_status(self.status)
    }

    /// Input for `ZooService::admit_animal`; always arrives healthy
    pub fn admission(self, enclosure_id: EnclosureId) -> NewAnimal {
        NewAnimal {
            name: self.name,
            species: self.species,
            birth_date: self.birth_date,
            gender: self.gender,
            favorite_food: self.favorite_food,
            enclosure_id,
        }
    }
}

pub struct EnclosureFactory {
    enclosure_type: String,
    size: u32,
    capacity: u32,
}

impl Default for EnclosureFactory {
    fn default() -> Self {
        Self {
            enclosure_type: "savanna".to_string(),
            size: 400,
            capacity: 3,
        }
    }
}

impl EnclosureFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn of_type(mut self, enclosure_type: &str) -> Self {
        self.enclosure_type = enclosure_type.to_string();
        self
    }

    pub fn capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn build(self) -> Enclosure {
        Enclosure::new(
            self.enclosure_type.into(),
            EnclosureSize::new(self.size),
            self.capacity,
        )
    }

    pub fn input(self) -> NewEnclosure {
        NewEnclosure {
            enclosure_type: self.enclosure_type,
            size: self.size,
            capacity: self.capacity,
        }
    }
}

pub fn feeding(animal_id: AnimalId, food: &str, time: DateTime<Utc>) -> NewFeedingSchedule {
    NewFeedingSchedule {
        animal_id,
        food: food.to_string(),
        time,
    }
}

pub fn schedule(animal_id: AnimalId, food: &str, time: DateTime<Utc>) -> FeedingSchedule {
    FeedingSchedule::new(animal_id, food.into(), time)
}
