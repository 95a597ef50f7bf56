//! `GET /health`: store reachability and catalog schema presence.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthReport {
    /// `ok` when the store answers and every catalog table exists,
    /// `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    pub schema_ready: bool,
}

impl HealthReport {
    fn new(db_healthy: bool, schema_ready: bool) -> Self {
        let status = if db_healthy && schema_ready {
            "ok"
        } else {
            "degraded"
        };
        Self {
            status,
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
            schema_ready,
        }
    }
}

async fn report(State(state): State<AppState>) -> Json<HealthReport> {
    let db_healthy = marquee_db::health_check(&state.pool).await.is_ok();
    let schema_ready = db_healthy
        && marquee_db::schema_ready(&state.pool)
            .await
            .unwrap_or_else(|err| {
                tracing::warn!(error = %err, "Schema lookup failed");
                false
            });
    Json(HealthReport::new(db_healthy, schema_ready))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(report))
}
