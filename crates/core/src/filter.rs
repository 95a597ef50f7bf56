//! Parsing of optional id filters taken from query strings.

use crate::types::DbId;

/// An equality filter on a foreign-key column, as given in a query string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdFilter {
    /// Parameter absent or empty: no filter.
    #[default]
    Any,
    /// Keep rows whose column equals the id.
    Equals(DbId),
    /// A value no integer column can equal, such as `?director_id=abc`.
    Unmatchable,
}

impl IdFilter {
    /// Parse a raw parameter value such as the `3` in `?director_id=3`.
    ///
    /// Surrounding whitespace is ignored.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => Self::Any,
            Some(value) => value.parse().map_or(Self::Unmatchable, Self::Equals),
        }
    }
}
