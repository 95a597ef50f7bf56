//! Route definitions for the `/movies` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::movie;
use crate::state::AppState;

/// Routes for movies.
///
/// ```text
/// GET    /movies/           -> list
/// POST   /movies/           -> create
/// GET    /movies/{id}       -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/movies", get(movie::list).post(movie::create))
        .route("/movies/", get(movie::list).post(movie::create))
        .route("/movies/{id}", get(movie::get_by_id))
}
