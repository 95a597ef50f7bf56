//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct: the outbound ("dump") shape
//! - A `Deserialize` create DTO: the inbound ("load") shape. Create DTOs
//!   reject unknown keys, so the server-assigned `id` can never be supplied
//!   by a client. Presence and type of each key are the only checks.

pub mod director;
pub mod genre;
pub mod movie;
