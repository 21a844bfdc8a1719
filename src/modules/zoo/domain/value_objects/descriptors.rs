//! Plain descriptive attributes of animals, enclosures and feedings

use serde::{Deserialize, Serialize};

macro_rules! text_value {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

text_value!(AnimalName);
text_value!(
    /// Species, compared verbatim
    Species
);
text_value!(
    /// Kind of food served to an animal
    Food
);
text_value!(
    /// Habitat category of an enclosure ("savanna", "aviary", ...)
    EnclosureType
);

/// Floor area of an enclosure in square metres
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnclosureSize(u32);

impl EnclosureSize {
    pub fn new(square_metres: u32) -> Self {
        Self(square_metres)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for EnclosureSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} m²", self.0)
    }
}
