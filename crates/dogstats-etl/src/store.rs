//! Store connection handling
//!
//! Components receive an injected [`SqlitePool`] rather than opening ad-hoc
//! connections, so tests can hand them an in-memory database.

use crate::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use tracing::debug;

/// Open a SQLite pool for the given URL (e.g. `sqlite://dogstats.db?mode=rwc`
/// or `sqlite::memory:`).
///
/// Foreign-key enforcement is switched on per connection; SQLite leaves it
/// off by default and the schema relies on cascading deletes. The pool is
/// capped at a single connection: the pipeline is strictly sequential, and
/// an in-memory database exists per connection.
pub async fn connect(url: &str) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(url)?.foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    debug!(url, "opened database pool");
    Ok(pool)
}
