//! Handlers for the `/directors` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use marquee_core::error::CoreError;
use marquee_db::models::director::{CreateDirector, Director};
use marquee_db::repositories::DirectorRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{EntityId, Payload};
use crate::state::AppState;

/// GET /directors/
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Director>>> {
    let directors = DirectorRepo::list(&state.pool).await?;
    Ok(Json(directors))
}

/// GET /directors/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<Json<Director>> {
    let director = DirectorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Director",
            id,
        }))?;
    Ok(Json(director))
}

/// POST /directors/
///
/// Responds 201 with an empty body.
pub async fn create(
    State(state): State<AppState>,
    Payload(input): Payload<CreateDirector>,
) -> AppResult<StatusCode> {
    let director = DirectorRepo::create(&state.pool, &input).await?;
    tracing::info!(director_id = director.id, "Director created");
    Ok(StatusCode::CREATED)
}
