/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// The pool is the only store access handlers get; each query checks a
/// connection out for its own duration and returns it on drop.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: marquee_db::DbPool,
}
