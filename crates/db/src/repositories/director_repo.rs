//! Repository for the `director` table.

use marquee_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::director::{CreateDirector, Director};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name";

/// Provides list, lookup and insert operations for directors.
pub struct DirectorRepo;

impl DirectorRepo {
    /// Insert a new director, returning the created row.
    ///
    /// The insert runs in its own transaction and commits immediately.
    pub async fn create(pool: &SqlitePool, input: &CreateDirector) -> Result<Director, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let query = format!("INSERT INTO director (name) VALUES (?) RETURNING {COLUMNS}");
        let director = sqlx::query_as::<_, Director>(&query)
            .bind(&input.name)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(director)
    }

    /// Find a director by id.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Director>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM director WHERE id = ?");
        sqlx::query_as::<_, Director>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all directors in id order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Director>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM director ORDER BY id");
        sqlx::query_as::<_, Director>(&query).fetch_all(pool).await
    }
}
