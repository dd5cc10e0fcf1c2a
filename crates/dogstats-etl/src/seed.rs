//! Sample-data seeding
//!
//! Seed tuples reference their parent breed/owner by 1-based position in
//! the seed lists; those positions are resolved to the actual generated ids
//! at insert time, so seeding works against a database that already holds
//! rows from earlier runs.

use crate::lifespan::LifespanRange;
use crate::loader::Loader;
use crate::model::{NewBreed, NewDog, NewOwner};
use crate::{EtlError, Result};
use chrono::NaiveDate;
use tracing::info;

/// A self-consistent seed dataset
///
/// `lifespans` entries are `(breed_ref, min, max)` and `dogs` entries are
/// `(name, breed_ref, birth_date, owner_ref)`, where the refs are 1-based
/// positions into `breeds` / `owners`.
#[derive(Debug, Clone)]
pub struct SeedData {
    pub owners: Vec<NewOwner>,
    pub breeds: Vec<NewBreed>,
    pub lifespans: Vec<(usize, i64, i64)>,
    pub dogs: Vec<(String, usize, NaiveDate, usize)>,
}

impl SeedData {
    /// The stock sample dataset: three owners, three breeds with lifespans,
    /// five dogs.
    pub fn sample() -> Self {
        Self {
            owners: vec![
                NewOwner::new("Alice", "Smith", "alice@example.com"),
                NewOwner::new("Bob", "Johnson", "bob@example.com"),
                NewOwner::new("Charlie", "Brown", "charlie@example.com"),
            ],
            breeds: vec![
                NewBreed::new("Golden Retriever", 10, "Sporting"),
                NewBreed::new("Bulldog", 8, "Non-Sporting"),
                NewBreed::new("German Shepherd", 9, "Herding"),
            ],
            lifespans: vec![(1, 10, 12), (2, 8, 10), (3, 9, 13)],
            dogs: vec![
                ("Buddy".to_string(), 1, date(2020, 6, 15), 1),
                ("Max".to_string(), 2, date(2019, 7, 22), 2),
                ("Bella".to_string(), 3, date(2021, 1, 5), 3),
                ("Charlie".to_string(), 1, date(2018, 3, 14), 1),
                ("Rocky".to_string(), 2, date(2020, 9, 10), 2),
            ],
        }
    }
}

/// Insert a seed dataset in foreign-key dependency order.
///
/// Owners and breeds go in first and their generated ids are captured;
/// lifespans and dogs then resolve their positional refs against those ids.
pub async fn seed(loader: &Loader, data: &SeedData) -> Result<()> {
    info!(
        owners = data.owners.len(),
        breeds = data.breeds.len(),
        dogs = data.dogs.len(),
        "seeding sample data"
    );

    let mut owner_ids = Vec::with_capacity(data.owners.len());
    for owner in &data.owners {
        owner_ids.push(loader.insert_owner(owner).await?);
    }

    let mut breed_ids = Vec::with_capacity(data.breeds.len());
    for breed in &data.breeds {
        breed_ids.push(loader.insert_breed(breed).await?);
    }

    for &(breed_ref, min, max) in &data.lifespans {
        let breed_id = resolve(&breed_ids, breed_ref, "breed")?;
        loader
            .insert_lifespan(breed_id, &LifespanRange { min, max })
            .await?;
    }

    for (name, breed_ref, birth_date, owner_ref) in &data.dogs {
        let dog = NewDog::new(
            name.clone(),
            resolve(&breed_ids, *breed_ref, "breed")?,
            *birth_date,
            resolve(&owner_ids, *owner_ref, "owner")?,
        );
        loader.insert_dog(&dog).await?;
    }

    Ok(())
}

/// Seed the stock sample dataset
pub async fn seed_sample_data(loader: &Loader) -> Result<()> {
    seed(loader, &SeedData::sample()).await
}

fn resolve(ids: &[i64], position: usize, kind: &str) -> Result<i64> {
    position
        .checked_sub(1)
        .and_then(|idx| ids.get(idx))
        .copied()
        .ok_or_else(|| EtlError::Config(format!("seed {kind} reference {position} out of range")))
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    // Seed constants only; every literal above is a valid calendar date.
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
