use serde::{Deserialize, Serialize};

/// Health status of an animal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimalStatus {
    #[default]
    Healthy,
    Sick,
}

impl std::fmt::Display for AnimalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnimalStatus::Healthy => write!(f, "healthy"),
            AnimalStatus::Sick => write!(f, "sick"),
        }
    }
}

impl std::str::FromStr for AnimalStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "healthy" => Ok(AnimalStatus::Healthy),
            "sick" => Ok(AnimalStatus::Sick),
            _ => Err(format!("Invalid animal status: {}", s)),
        }
    }
}
