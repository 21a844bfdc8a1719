use regex::Regex;
use std::sync::LazyLock;

use crate::shared::errors::AppError;

const MAX_TEXT_LEN: usize = 100;

// Letters and digits of any script, spaces, hyphens, apostrophes
static NAME_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\p{L}\p{N}\s\-']+$").expect("name pattern is a valid regex")
});

pub struct Validator;

impl Validator {
    pub fn validate_animal_name(name: &str) -> Result<(), AppError> {
        Self::validate_text("Animal name", name)
    }

    pub fn validate_species(species: &str) -> Result<(), AppError> {
        Self::validate_text("Species", species)
    }

    pub fn validate_food(food: &str) -> Result<(), AppError> {
        Self::validate_text("Food", food)
    }

    pub fn validate_enclosure_type(enclosure_type: &str) -> Result<(), AppError> {
        if enclosure_type.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Enclosure type cannot be empty".to_string(),
            ));
        }
        if enclosure_type.chars().count() > MAX_TEXT_LEN {
            return Err(AppError::ValidationError(format!(
                "Enclosure type too long (max {MAX_TEXT_LEN} characters)"
            )));
        }
        Ok(())
    }

    pub fn validate_enclosure_size(size: u32) -> Result<(), AppError> {
        if size == 0 {
            return Err(AppError::ValidationError(
                "Enclosure size must be positive".to_string(),
            ));
        }
        Ok(())
    }

    fn validate_text(field: &str, value: &str) -> Result<(), AppError> {
        if value.trim().is_empty() {
            return Err(AppError::ValidationError(format!(
                "{field} cannot be empty"
            )));
        }
        if value.chars().count() > MAX_TEXT_LEN {
            return Err(AppError::ValidationError(format!(
                "{field} too long (max {MAX_TEXT_LEN} characters)"
            )));
        }
        if !NAME_CHARS.is_match(value) {
            return Err(AppError::ValidationError(format!(
                "{field} contains invalid characters"
            )));
        }
        Ok(())
    }
}
