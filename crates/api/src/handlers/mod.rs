//! Request handlers for the catalog resources.
//!
//! Each submodule provides async handler functions (list, get_by_id,
//! create) for a single entity type. Handlers delegate to the corresponding
//! repository in `marquee_db` and map errors via [`AppError`].
//!
//! [`AppError`]: crate::error::AppError

pub mod director;
pub mod genre;
pub mod movie;
