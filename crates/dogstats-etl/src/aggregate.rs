//! Read-only aggregate queries over the persisted data

use crate::model::{BreedAvgLifespan, OwnerDogCount};
use crate::Result;
use sqlx::SqlitePool;

/// Runs the reporting queries through an injected pool
pub struct Aggregator {
    pool: SqlitePool,
}

impl Aggregator {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Dogs owned per owner, most dogs first.
    ///
    /// Owners without dogs appear with a count of zero (outer join). Ties
    /// are broken by owner id so output order is deterministic.
    #[tracing::instrument(skip(self))]
    pub async fn dog_count_by_owner(&self) -> Result<Vec<OwnerDogCount>> {
        let rows = sqlx::query_as::<_, OwnerDogCount>(
            r#"
            SELECT o.first_name, o.last_name, COUNT(d.id) AS dog_count
            FROM owners o
            LEFT JOIN dogs d ON o.id = d.owner_id
            GROUP BY o.id
            ORDER BY dog_count DESC, o.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Average midpoint lifespan per breed, longest-lived first.
    ///
    /// The midpoint is `(min + max) / 2.0`, averaged across however many
    /// lifespan rows a breed has. Breeds without any lifespan row are
    /// excluded (inner join).
    #[tracing::instrument(skip(self))]
    pub async fn average_lifespan_by_breed(&self) -> Result<Vec<BreedAvgLifespan>> {
        let rows = sqlx::query_as::<_, BreedAvgLifespan>(
            r#"
            SELECT b.breed_name, AVG((l.min_lifespan + l.max_lifespan) / 2.0) AS avg_lifespan
            FROM breed b
            JOIN lifespan l ON b.id = l.breed_id
            GROUP BY b.id
            ORDER BY avg_lifespan DESC, b.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
