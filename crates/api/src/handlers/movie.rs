//! Handlers for the `/movies` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use marquee_core::error::CoreError;
use marquee_db::models::movie::{CreateMovie, Movie};
use marquee_db::repositories::MovieRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{EntityId, Payload, QueryPairs};
use crate::query::MovieListParams;
use crate::state::AppState;

/// Plain-text body returned by a successful create.
pub const CREATED_MESSAGE: &str = "Movie added";

/// GET /movies/?director_id=&genre_id=
///
/// Both filters are optional and combine with AND.
pub async fn list(
    State(state): State<AppState>,
    query: QueryPairs,
) -> AppResult<Json<Vec<Movie>>> {
    let filter = MovieListParams::from_pairs(&query).to_filter();
    let movies = MovieRepo::list(&state.pool, &filter).await?;
    Ok(Json(movies))
}

/// GET /movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<Json<Movie>> {
    let movie = MovieRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id,
        }))?;
    Ok(Json(movie))
}

/// POST /movies/
///
/// Responds 201 with [`CREATED_MESSAGE`] as `text/plain`.
pub async fn create(
    State(state): State<AppState>,
    Payload(input): Payload<CreateMovie>,
) -> AppResult<(StatusCode, &'static str)> {
    let id = MovieRepo::create(&state.pool, &input).await?;
    tracing::info!(movie_id = id, "Movie created");
    Ok((StatusCode::CREATED, CREATED_MESSAGE))
}
