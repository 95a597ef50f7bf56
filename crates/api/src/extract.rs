//! Request extractors that reject with [`AppError`] instead of axum's
//! plain-text rejections.

use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use marquee_core::types::DbId;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// The `{id}` segment of an entity route.
///
/// A segment that is not an integer is treated as an unmatched route and
/// answered with 404, the same as an id that does not exist.
#[derive(Debug, Clone, Copy)]
pub struct EntityId(pub DbId);

impl<S> FromRequestParts<S> for EntityId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<DbId>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(error = %rejection, "Entity id did not parse");
                AppError::UnmatchedPath
            })?;
        Ok(Self(id))
    }
}

/// A JSON request body deserialized into a create DTO.
///
/// Missing or mistyped keys, unknown keys, a non-JSON body and a missing
/// `Content-Type: application/json` header all become
/// [`AppError::BadRequest`].
#[derive(Debug, Clone)]
pub struct Payload<T>(pub T);

impl<S, T> FromRequest<S> for Payload<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(Self(value))
    }
}

/// The raw query string as ordered `(key, value)` pairs.
///
/// Repeated keys are kept in order instead of failing deserialization; a
/// query string that is not valid `application/x-www-form-urlencoded`
/// becomes [`AppError::BadRequest`].
#[derive(Debug, Clone, Default)]
pub struct QueryPairs(pub Vec<(String, String)>);

impl QueryPairs {
    /// The first value given for `key`, if any.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl<S> FromRequestParts<S> for QueryPairs
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(Self(pairs))
    }
}
