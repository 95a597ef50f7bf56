//! Repository for the `genre` table.

use marquee_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::genre::{CreateGenre, Genre};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name";

/// Provides list, lookup and insert operations for genres.
pub struct GenreRepo;

impl GenreRepo {
    /// Insert a new genre, returning the created row.
    ///
    /// The insert runs in its own transaction and commits immediately.
    pub async fn create(pool: &SqlitePool, input: &CreateGenre) -> Result<Genre, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let query = format!("INSERT INTO genre (name) VALUES (?) RETURNING {COLUMNS}");
        let genre = sqlx::query_as::<_, Genre>(&query)
            .bind(&input.name)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(genre)
    }

    /// Find a genre by id.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Genre>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM genre WHERE id = ?");
        sqlx::query_as::<_, Genre>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all genres in id order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Genre>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM genre ORDER BY id");
        sqlx::query_as::<_, Genre>(&query).fetch_all(pool).await
    }
}
