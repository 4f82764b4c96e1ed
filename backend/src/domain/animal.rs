//! Shelter animal records and their validated inputs.

use std::collections::HashMap;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::validation::{
    ConstraintSet, FieldKind, FieldRule, SanitizedFields, ValidationErrors, sanitize_filters,
    validate_create, validate_update,
};
use crate::domain::{ResourceId, timestamp};

/// Reported when `name` is missing, blank, too long or not a string.
pub const NAME_REQUIRED: &str = "Name is required and cannot be empty";
/// Reported when `species` is missing, blank, too long or not a string.
pub const SPECIES_REQUIRED: &str = "Species is required and cannot be empty";
/// Reported when `age` is not an integer in `[AGE_MIN, AGE_MAX]`.
pub const AGE_RANGE: &str = "Age must be between 0 and 50 years";
/// Reported when `size` is not one of the [`AnimalSize`] spellings.
pub const INVALID_SIZE: &str = "Size must be one of: small, medium, large";
/// Reported when `breed` is not a string of at most 255 characters.
pub const BREED_INVALID: &str = "Breed must be a string of at most 255 characters";
/// Reported when `location` is not a string of at most 255 characters.
pub const LOCATION_INVALID: &str = "Location must be a string of at most 255 characters";
/// Reported when `description` is not a string of at most 2000 characters.
pub const DESCRIPTION_INVALID: &str = "Description must be a string of at most 2000 characters";

/// Youngest accepted age in years.
pub const AGE_MIN: i64 = 0;
/// Oldest accepted age in years.
pub const AGE_MAX: i64 = 50;

const TEXT_MAX: usize = 255;
const DESCRIPTION_MAX: usize = 2000;
const SIZE_VARIANTS: &[&str] = &["small", "medium", "large"];

const TEXT: FieldKind = FieldKind::Text { max_len: TEXT_MAX };
const AGE: FieldKind = FieldKind::Integer {
    min: AGE_MIN,
    max: AGE_MAX,
};
const SIZE: FieldKind = FieldKind::Enumerated {
    variants: SIZE_VARIANTS,
};

/// Field constraints for animal payloads and list filters.
pub static ANIMAL_CONSTRAINTS: ConstraintSet = ConstraintSet {
    payload: &[
        FieldRule::required("name", TEXT, NAME_REQUIRED),
        FieldRule::required("species", TEXT, SPECIES_REQUIRED),
        FieldRule::optional("breed", TEXT, BREED_INVALID),
        FieldRule::optional("age", AGE, AGE_RANGE),
        FieldRule::optional("size", SIZE, INVALID_SIZE),
        FieldRule::optional("location", TEXT, LOCATION_INVALID),
        FieldRule::optional(
            "description",
            FieldKind::Text {
                max_len: DESCRIPTION_MAX,
            },
            DESCRIPTION_INVALID,
        ),
    ],
    filters: &[
        FieldRule::optional("species", TEXT, SPECIES_REQUIRED),
        FieldRule::optional("breed", TEXT, BREED_INVALID),
        FieldRule::optional("size", SIZE, INVALID_SIZE),
        FieldRule::optional("location", TEXT, LOCATION_INVALID),
        FieldRule::optional("age", AGE, AGE_RANGE),
    ],
};

/// Coarse size class of an animal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimalSize {
    /// Small animals.
    Small,
    /// Medium animals.
    Medium,
    /// Large animals.
    Large,
}

impl AnimalSize {
    /// Lower-case spelling used in JSON and in the store.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

impl std::fmt::Display for AnimalSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a size spelling is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown animal size: {0}")]
pub struct ParseAnimalSizeError(String);

impl FromStr for AnimalSize {
    type Err = ParseAnimalSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "small" => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            "large" => Ok(Self::Large),
            _ => Err(ParseAnimalSizeError(s.to_owned())),
        }
    }
}

/// Persisted animal.
///
/// Serialises in camelCase with millisecond ISO-8601 timestamps; absent
/// optional fields serialise as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Animal {
    /// Store-assigned identifier.
    pub id: ResourceId,
    /// Name the shelter knows the animal by.
    pub name: String,
    /// Species, e.g. `Dog`.
    pub species: String,
    /// Breed, if known.
    pub breed: Option<String>,
    /// Age in whole years.
    pub age: Option<i32>,
    /// Size class.
    pub size: Option<AnimalSize>,
    /// Where the animal is housed.
    pub location: Option<String>,
    /// Free-text description.
    pub description: Option<String>,
    /// Set by the store on insert.
    #[serde(serialize_with = "timestamp::serialize")]
    pub created_at: DateTime<Utc>,
    /// Set by the store on every write.
    #[serde(serialize_with = "timestamp::serialize")]
    pub updated_at: DateTime<Utc>,
}

/// Validated create payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimalDraft {
    /// Required name.
    pub name: String,
    /// Required species.
    pub species: String,
    /// Optional breed.
    pub breed: Option<String>,
    /// Optional age.
    pub age: Option<i32>,
    /// Optional size class.
    pub size: Option<AnimalSize>,
    /// Optional location.
    pub location: Option<String>,
    /// Optional description.
    pub description: Option<String>,
}

impl AnimalDraft {
    /// Validate a raw JSON create body.
    ///
    /// # Errors
    ///
    /// Returns every failing field's message in declaration order.
    ///
    /// # Examples
    /// ```
    /// use serde_json::json;
    /// use shelter::domain::{AnimalDraft, AnimalSize};
    ///
    /// let draft = AnimalDraft::from_json(&json!({
    ///     "name": " Rex ",
    ///     "species": "Dog",
    ///     "size": "LARGE",
    ///     "age": "4"
    /// }))
    /// .expect("valid payload");
    /// assert_eq!(draft.name, "Rex");
    /// assert_eq!(draft.size, Some(AnimalSize::Large));
    /// assert_eq!(draft.age, Some(4));
    /// ```
    pub fn from_json(body: &Value) -> Result<Self, ValidationErrors> {
        let mut fields = validate_create(body, &ANIMAL_CONSTRAINTS)?;
        let name = fields
            .take_text("name")
            .ok_or_else(|| ValidationErrors::single(NAME_REQUIRED))?;
        let species = fields
            .take_text("species")
            .ok_or_else(|| ValidationErrors::single(SPECIES_REQUIRED))?;
        Ok(Self {
            name,
            species,
            breed: fields.take_text("breed"),
            age: age_of(&fields),
            size: size_of(&fields),
            location: fields.take_text("location"),
            description: fields.take_text("description"),
        })
    }
}

/// Validated partial update; `None` leaves the stored value unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnimalChanges {
    /// New name.
    pub name: Option<String>,
    /// New species.
    pub species: Option<String>,
    /// New breed.
    pub breed: Option<String>,
    /// New age.
    pub age: Option<i32>,
    /// New size class.
    pub size: Option<AnimalSize>,
    /// New location.
    pub location: Option<String>,
    /// New description.
    pub description: Option<String>,
}

impl AnimalChanges {
    /// Validate a raw JSON update body.
    ///
    /// # Errors
    ///
    /// Returns [`AT_LEAST_ONE_FIELD`](crate::domain::validation::AT_LEAST_ONE_FIELD)
    /// alone for bodies naming no known field, otherwise every failing
    /// field's message.
    pub fn from_json(body: &Value) -> Result<Self, ValidationErrors> {
        let mut fields = validate_update(body, &ANIMAL_CONSTRAINTS)?;
        Ok(Self {
            name: fields.take_text("name"),
            species: fields.take_text("species"),
            breed: fields.take_text("breed"),
            age: age_of(&fields),
            size: size_of(&fields),
            location: fields.take_text("location"),
            description: fields.take_text("description"),
        })
    }

    /// Apply the changes to `animal` in place.
    pub fn apply_to(&self, animal: &mut Animal) {
        if let Some(name) = &self.name {
            animal.name.clone_from(name);
        }
        if let Some(species) = &self.species {
            animal.species.clone_from(species);
        }
        if self.breed.is_some() {
            animal.breed.clone_from(&self.breed);
        }
        if self.age.is_some() {
            animal.age = self.age;
        }
        if self.size.is_some() {
            animal.size = self.size;
        }
        if self.location.is_some() {
            animal.location.clone_from(&self.location);
        }
        if self.description.is_some() {
            animal.description.clone_from(&self.description);
        }
    }
}

/// Sanitised list filters. Every present filter must match exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnimalFilters {
    /// Exact species match.
    pub species: Option<String>,
    /// Exact breed match.
    pub breed: Option<String>,
    /// Exact size match.
    pub size: Option<AnimalSize>,
    /// Exact location match.
    pub location: Option<String>,
    /// Exact age match.
    pub age: Option<i32>,
}

impl AnimalFilters {
    /// Build filters from raw query parameters, dropping invalid values.
    pub fn from_query<S>(query: &HashMap<String, String, S>) -> Self
    where
        S: std::hash::BuildHasher,
    {
        let mut fields = sanitize_filters(query, &ANIMAL_CONSTRAINTS);
        Self {
            species: fields.take_text("species"),
            breed: fields.take_text("breed"),
            size: size_of(&fields),
            location: fields.take_text("location"),
            age: age_of(&fields),
        }
    }

    /// Whether `animal` satisfies every present filter.
    pub fn matches(&self, animal: &Animal) -> bool {
        fn eq<T: PartialEq>(filter: Option<&T>, value: Option<&T>) -> bool {
            filter.is_none_or(|wanted| value == Some(wanted))
        }

        eq(self.species.as_ref(), Some(&animal.species))
            && eq(self.breed.as_ref(), animal.breed.as_ref())
            && eq(self.size.as_ref(), animal.size.as_ref())
            && eq(self.location.as_ref(), animal.location.as_ref())
            && eq(self.age.as_ref(), animal.age.as_ref())
    }
}

fn age_of(fields: &SanitizedFields) -> Option<i32> {
    fields
        .integer("age")
        .and_then(|value| i32::try_from(value).ok())
}

fn size_of(fields: &SanitizedFields) -> Option<AnimalSize> {
    fields
        .text("size")
        .and_then(|value| AnimalSize::from_str(value).ok())
}
