pub mod director;
pub mod genre;
pub mod health;
pub mod movie;

use axum::Router;

use crate::state::AppState;

/// Build the catalog route tree.
///
/// Route hierarchy:
///
/// ```text
/// /movies/                list (?director_id, ?genre_id), create
/// /movies/{id}            get
///
/// /genres/                list, create
/// /genres/{id}            get
///
/// /directors/             list, create
/// /directors/{id}         get
/// ```
///
/// Collection routes answer with and without the trailing slash.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(movie::router())
        .merge(genre::router())
        .merge(director::router())
}
