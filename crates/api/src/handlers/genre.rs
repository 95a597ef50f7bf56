//! Handlers for the `/genres` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use marquee_core::error::CoreError;
use marquee_db::models::genre::{CreateGenre, Genre};
use marquee_db::repositories::GenreRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{EntityId, Payload};
use crate::state::AppState;

/// GET /genres/
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Genre>>> {
    let genres = GenreRepo::list(&state.pool).await?;
    Ok(Json(genres))
}

/// GET /genres/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<Json<Genre>> {
    let genre = GenreRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Genre",
            id,
        }))?;
    Ok(Json(genre))
}

/// POST /genres/
///
/// Responds 201 with an empty body.
pub async fn create(
    State(state): State<AppState>,
    Payload(input): Payload<CreateGenre>,
) -> AppResult<StatusCode> {
    let genre = GenreRepo::create(&state.pool, &input).await?;
    tracing::info!(genre_id = genre.id, "Genre created");
    Ok(StatusCode::CREATED)
}
