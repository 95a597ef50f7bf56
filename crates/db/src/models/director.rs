//! Director entity model and DTOs.

use marquee_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `director` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Director {
    pub id: DbId,
    pub name: String,
}

/// DTO for creating a new director.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateDirector {
    pub name: String,
}
