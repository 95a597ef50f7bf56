//! Persistence layer for the Marquee catalog.
//!
//! Owns pool construction, schema bootstrap, the row/DTO models and one
//! repository per table.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub mod models;
pub mod repositories;
pub mod schema;

pub type DbPool = sqlx::SqlitePool;

/// Create a connection pool from a database URL.
///
/// The database file is created if it does not exist yet.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    connect_with(options, max_connections).await
}

/// Create a connection pool from prepared connect options.
///
/// Foreign-key enforcement is switched off on every connection: a movie may
/// name a director or genre id that does not exist, and reads render such a
/// reference with a `null` name.
pub async fn connect_with(
    options: SqliteConnectOptions,
    max_connections: u32,
) -> Result<DbPool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options.foreign_keys(false))
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Create the catalog tables if they are missing.
///
/// Safe to call on every startup; existing tables and rows are untouched.
pub async fn init_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;
    for &statement in schema::STATEMENTS {
        sqlx::query(statement).execute(&mut *tx).await?;
    }
    tx.commit().await?;
    tracing::debug!(tables = schema::TABLES.len(), "Catalog schema ensured");
    Ok(())
}

/// Whether every catalog table exists.
pub async fn schema_ready(pool: &DbPool) -> Result<bool, sqlx::Error> {
    for &table in schema::TABLES {
        let found: Option<(String,)> =
            sqlx::query_as("SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?")
                .bind(table)
                .fetch_optional(pool)
                .await?;
        if found.is_none() {
            return Ok(false);
        }
    }
    Ok(true)
}
