//! Repository layer: one zero-sized repo struct per table.
//!
//! Every method takes the pool explicitly and returns raw `sqlx::Error`s;
//! mapping to HTTP responses happens in the API crate.

mod director_repo;
mod genre_repo;
mod movie_repo;

pub use director_repo::DirectorRepo;
pub use genre_repo::GenreRepo;
pub use movie_repo::MovieRepo;
