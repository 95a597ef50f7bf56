//! Domain types shared by the Marquee store and HTTP layers.
//!
//! Nothing in this crate performs I/O: it holds the error type, id aliases
//! and the query-string filter parsing.

pub mod error;
pub mod filter;
pub mod types;
