//! Domain types for the ETL pipeline

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Group label applied to breeds whose source record carries none.
pub const UNKNOWN_GROUP: &str = "Unknown";

/// A raw breed record as returned by the breed reference API.
///
/// Optional fields have documented defaults rather than duck-typed access:
/// a missing `life_span` reads as the empty string (which the lifespan
/// parser then rejects as malformed) and a missing `breed_group` reads as
/// [`UNKNOWN_GROUP`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreedRecord {
    /// Breed name
    pub name: String,

    /// Free-text lifespan range, e.g. "10 - 12 years"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub life_span: Option<String>,

    /// Breed group/category label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breed_group: Option<String>,
}

impl BreedRecord {
    /// The raw lifespan text, or `""` when the source omitted it
    pub fn life_span(&self) -> &str {
        self.life_span.as_deref().unwrap_or("")
    }

    /// The breed group, or [`UNKNOWN_GROUP`] when the source omitted it.
    /// An empty or whitespace-only label also counts as absent.
    pub fn group(&self) -> &str {
        match self.breed_group.as_deref() {
            Some(group) if !group.trim().is_empty() => group,
            _ => UNKNOWN_GROUP,
        }
    }
}

/// A new owner row awaiting insertion
#[derive(Debug, Clone)]
pub struct NewOwner {
    pub first_name: String,
    pub last_name: String,
    /// Unique across all owners
    pub email: String,
}

impl NewOwner {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }
}

/// A new breed row awaiting insertion
#[derive(Debug, Clone)]
pub struct NewBreed {
    pub breed_name: String,
    /// Nominal age metric carried from the source record; informational only
    pub breed_age: i64,
    pub breed_group: String,
}

impl NewBreed {
    pub fn new(breed_name: impl Into<String>, breed_age: i64, breed_group: impl Into<String>) -> Self {
        Self {
            breed_name: breed_name.into(),
            breed_age,
            breed_group: breed_group.into(),
        }
    }
}

/// A new dog row awaiting insertion
///
/// Both foreign keys must reference rows that already exist.
#[derive(Debug, Clone)]
pub struct NewDog {
    pub name: String,
    pub breed_id: i64,
    pub birth_date: NaiveDate,
    pub owner_id: i64,
}

impl NewDog {
    pub fn new(name: impl Into<String>, breed_id: i64, birth_date: NaiveDate, owner_id: i64) -> Self {
        Self {
            name: name.into(),
            breed_id,
            birth_date,
            owner_id,
        }
    }
}

/// Per-owner dog count returned by the ownership aggregate
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow, Serialize)]
pub struct OwnerDogCount {
    pub first_name: String,
    pub last_name: String,
    pub dog_count: i64,
}

/// Per-breed average lifespan returned by the lifespan aggregate
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize)]
pub struct BreedAvgLifespan {
    pub breed_name: String,
    /// Midpoint average `(min + max) / 2`, real-valued across rows
    pub avg_lifespan: f64,
}
