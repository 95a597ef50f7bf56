//! Movie entity model, DTOs and list filter.
//!
//! The outbound [`Movie`] shape carries the related director and genre
//! names next to the raw foreign keys. Both names come from the same
//! `LEFT JOIN` query that loads the movie and are `null` when the
//! reference is unset.

use marquee_core::filter::IdFilter;
use marquee_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A `movie` row joined with its genre and director names.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub trailer: String,
    pub year: i64,
    pub rating: f64,
    pub genre_id: Option<DbId>,
    pub genre: Option<String>,
    pub director_id: Option<DbId>,
    pub director: Option<String>,
}

/// DTO for creating a new movie.
///
/// Keys mirror the `movie` columns. `genre_id` and `director_id` may be
/// omitted or `null`; every other column is required.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateMovie {
    pub title: String,
    pub description: String,
    pub trailer: String,
    pub year: i64,
    pub rating: f64,
    pub genre_id: Option<DbId>,
    pub director_id: Option<DbId>,
}

/// Equality filters for listing movies. Set fields are combined with AND.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovieFilter {
    pub director_id: IdFilter,
    pub genre_id: IdFilter,
}

impl MovieFilter {
    /// True when some field can never match a row.
    pub fn is_unmatchable(&self) -> bool {
        self.director_id == IdFilter::Unmatchable || self.genre_id == IdFilter::Unmatchable
    }
}
