//! Schema management
//!
//! Idempotently creates the four normalized tables. Safe to run on every
//! startup; existing tables are left untouched and any store error
//! propagates unretried.

use crate::Result;
use sqlx::SqlitePool;
use tracing::info;

const CREATE_OWNERS: &str = r#"
    CREATE TABLE IF NOT EXISTS owners (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        first_name TEXT NOT NULL,
        last_name TEXT NOT NULL,
        email TEXT UNIQUE
    )
"#;

const CREATE_BREED: &str = r#"
    CREATE TABLE IF NOT EXISTS breed (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        breed_name TEXT NOT NULL,
        breed_age INTEGER,
        breed_group TEXT
    )
"#;

const CREATE_LIFESPAN: &str = r#"
    CREATE TABLE IF NOT EXISTS lifespan (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        breed_id INTEGER NOT NULL,
        min_lifespan INTEGER NOT NULL,
        max_lifespan INTEGER NOT NULL,
        FOREIGN KEY (breed_id) REFERENCES breed(id) ON DELETE CASCADE
    )
"#;

const CREATE_DOGS: &str = r#"
    CREATE TABLE IF NOT EXISTS dogs (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        breed_id INTEGER NOT NULL,
        birth_date DATE,
        owner_id INTEGER NOT NULL,
        FOREIGN KEY (breed_id) REFERENCES breed(id) ON DELETE CASCADE,
        FOREIGN KEY (owner_id) REFERENCES owners(id) ON DELETE CASCADE
    )
"#;

/// Ensure all four tables exist with their foreign-key relationships.
///
/// `breed` has no uniqueness constraint on `breed_name` and `lifespan` none
/// on `breed_id`; repeated loader runs therefore accumulate duplicate
/// reference rows. That matches the upstream schema and is exercised (not
/// fixed) by the tests.
pub async fn create_tables(pool: &SqlitePool) -> Result<()> {
    // Parents before children so the FK clauses always resolve.
    for ddl in [CREATE_OWNERS, CREATE_BREED, CREATE_LIFESPAN, CREATE_DOGS] {
        sqlx::query(ddl).execute(pool).await?;
    }

    info!("database schema ready");
    Ok(())
}
