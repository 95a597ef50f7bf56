//! Route definitions for the `/genres` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::genre;
use crate::state::AppState;

/// Routes for genres.
///
/// ```text
/// GET    /genres/           -> list
/// POST   /genres/           -> create
/// GET    /genres/{id}       -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/genres", get(genre::list).post(genre::create))
        .route("/genres/", get(genre::list).post(genre::create))
        .route("/genres/{id}", get(genre::get_by_id))
}
