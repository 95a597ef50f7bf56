//! Repository for the `movie` table.

use marquee_core::filter::IdFilter;
use marquee_core::types::DbId;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::models::movie::{CreateMovie, Movie, MovieFilter};

/// Projection shared by every movie read. Genre and director names are
/// pulled in with `LEFT JOIN` so a movie with unset or dangling references
/// is still returned.
const SELECT_MOVIE: &str = "SELECT m.id, m.title, m.description, m.trailer, m.year, m.rating, \
            m.genre_id, g.name AS genre, m.director_id, d.name AS director \
     FROM movie m \
     LEFT JOIN genre g ON g.id = m.genre_id \
     LEFT JOIN director d ON d.id = m.director_id";

/// Provides list, lookup and insert operations for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a new movie, returning its assigned id.
    ///
    /// The insert runs in its own transaction and commits immediately.
    /// `genre_id` and `director_id` are stored as given, even when they name
    /// a row that does not exist.
    pub async fn create(pool: &SqlitePool, input: &CreateMovie) -> Result<DbId, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO movie (title, description, trailer, year, rating, genre_id, director_id)
             VALUES (?, ?, ?, ?, ?, ?, ?)
             RETURNING id",
        )
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.trailer)
        .bind(input.year)
        .bind(input.rating)
        .bind(input.genre_id)
        .bind(input.director_id)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;
        Ok(id)
    }

    /// Find a movie by id, with its genre and director names.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("{SELECT_MOVIE} WHERE m.id = ?");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List movies in id order, narrowed by every set field of `filter`.
    pub async fn list(pool: &SqlitePool, filter: &MovieFilter) -> Result<Vec<Movie>, sqlx::Error> {
        if filter.is_unmatchable() {
            return Ok(Vec::new());
        }

        let mut builder = QueryBuilder::<Sqlite>::new(SELECT_MOVIE);
        let mut keyword = " WHERE ";

        if let IdFilter::Equals(director_id) = filter.director_id {
            builder.push(keyword).push("m.director_id = ").push_bind(director_id);
            keyword = " AND ";
        }
        if let IdFilter::Equals(genre_id) = filter.genre_id {
            builder.push(keyword).push("m.genre_id = ").push_bind(genre_id);
        }

        builder.push(" ORDER BY m.id");
        builder.build_query_as::<Movie>().fetch_all(pool).await
    }
}
