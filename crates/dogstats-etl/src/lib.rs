//! Dogstats ETL Library
//!
//! Ingests dog-breed reference data from The Dog API, normalizes free-text
//! lifespan ranges into validated integer pairs, loads everything into a
//! normalized SQLite schema, and answers aggregate queries about breed
//! lifespans and dog ownership.
//!
//! # Example
//!
//! ```no_run
//! use dogstats_etl::{aggregate::Aggregator, loader::Loader, schema, store};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let pool = store::connect("sqlite::memory:").await?;
//!     schema::create_tables(&pool).await?;
//!
//!     let loader = Loader::new(pool.clone());
//!     dogstats_etl::seed::seed_sample_data(&loader).await?;
//!
//!     let aggregator = Aggregator::new(pool);
//!     for row in aggregator.dog_count_by_owner().await? {
//!         println!("{} {} owns {} dog(s).", row.first_name, row.last_name, row.dog_count);
//!     }
//!     Ok(())
//! }
//! ```

pub mod aggregate;
pub mod config;
pub mod error;
pub mod fetch;
pub mod lifespan;
pub mod loader;
pub mod model;
pub mod report;
pub mod schema;
pub mod seed;
pub mod store;

pub use error::{EtlError, Result};
