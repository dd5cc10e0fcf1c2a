//! Loading raw records into the normalized schema
//!
//! Inserts rows in foreign-key dependency order: a breed before its
//! lifespan, owners and breeds before any dog that references them. Each
//! insert is its own committed statement; a malformed lifespan skips that
//! one record's lifespan row and leaves the already-inserted breed row in
//! place.

use crate::lifespan::{self, LifespanRange};
use crate::model::{BreedRecord, NewBreed, NewDog, NewOwner};
use crate::Result;
use sqlx::SqlitePool;
use tracing::{debug, info, warn};

/// Counters from a batch load
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadStats {
    pub breeds_inserted: usize,
    pub lifespans_inserted: usize,
    /// Records whose lifespan text failed to parse; their breed rows persist
    pub lifespans_skipped: usize,
}

/// Writes rows into the store through an injected pool
pub struct Loader {
    pool: SqlitePool,
}

impl Loader {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert an owner, returning the generated id.
    ///
    /// A duplicate email violates the unique constraint and propagates as a
    /// database error.
    pub async fn insert_owner(&self, owner: &NewOwner) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO owners (first_name, last_name, email)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(&owner.first_name)
        .bind(&owner.last_name)
        .bind(&owner.email)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Insert a breed, returning the generated id
    pub async fn insert_breed(&self, breed: &NewBreed) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO breed (breed_name, breed_age, breed_group)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(&breed.breed_name)
        .bind(breed.breed_age)
        .bind(&breed.breed_group)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Insert a lifespan row for an existing breed, returning the generated id
    pub async fn insert_lifespan(&self, breed_id: i64, range: &LifespanRange) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO lifespan (breed_id, min_lifespan, max_lifespan)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(breed_id)
        .bind(range.min)
        .bind(range.max)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Insert a dog, returning the generated id.
    ///
    /// Both `breed_id` and `owner_id` must reference existing rows; a
    /// violation propagates as a database error.
    pub async fn insert_dog(&self, dog: &NewDog) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO dogs (name, breed_id, birth_date, owner_id)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&dog.name)
        .bind(dog.breed_id)
        .bind(dog.birth_date)
        .bind(dog.owner_id)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Load a batch of raw breed records.
    ///
    /// For each record: derive the nominal breed age from the lifespan text,
    /// insert the breed row, capture its generated id, then parse the
    /// lifespan text and insert the lifespan row against that id. Parse
    /// failures are logged and counted; the batch continues and the breed
    /// row is kept without a lifespan.
    pub async fn load_breed_records(&self, records: &[BreedRecord]) -> Result<LoadStats> {
        let mut stats = LoadStats::default();

        for record in records {
            let raw_lifespan = record.life_span();
            let breed = NewBreed::new(
                record.name.clone(),
                lifespan::nominal_age(raw_lifespan),
                record.group(),
            );

            let breed_id = self.insert_breed(&breed).await?;
            stats.breeds_inserted += 1;

            match lifespan::parse_lifespan(raw_lifespan) {
                Ok(range) => {
                    self.insert_lifespan(breed_id, &range).await?;
                    stats.lifespans_inserted += 1;
                    debug!(breed = %record.name, min = range.min, max = range.max, "loaded breed");
                },
                Err(err) => {
                    warn!(breed = %record.name, %err, "skipping lifespan row");
                    stats.lifespans_skipped += 1;
                },
            }
        }

        info!(
            breeds = stats.breeds_inserted,
            lifespans = stats.lifespans_inserted,
            skipped = stats.lifespans_skipped,
            "breed load complete"
        );
        Ok(stats)
    }
}
