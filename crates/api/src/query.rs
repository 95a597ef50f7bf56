//! Query parameter types for API handlers.

use marquee_core::filter::IdFilter;
use marquee_db::models::movie::MovieFilter;

use crate::extract::QueryPairs;

/// Query parameters for `GET /movies/` (`?director_id=&genre_id=`).
///
/// Values stay raw strings: an empty value means "no filter" and a value
/// that is not an integer matches nothing. When a key is repeated the first
/// occurrence wins. Unknown keys are ignored.
#[derive(Debug, Default)]
pub struct MovieListParams {
    pub director_id: Option<String>,
    pub genre_id: Option<String>,
}

impl MovieListParams {
    pub fn from_pairs(pairs: &QueryPairs) -> Self {
        Self {
            director_id: pairs.first("director_id").map(str::to_owned),
            genre_id: pairs.first("genre_id").map(str::to_owned),
        }
    }

    /// Parse the raw parameters into a repository filter.
    pub fn to_filter(&self) -> MovieFilter {
        MovieFilter {
            director_id: IdFilter::parse(self.director_id.as_deref()),
            genre_id: IdFilter::parse(self.genre_id.as_deref()),
        }
    }
}
