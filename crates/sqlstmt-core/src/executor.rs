//! The execution seam between statement builders and a database driver.

use std::fmt;
use std::future::Future;

use serde::Serialize;

use crate::error::BuildError;
use crate::value::SqlValue;

/// Identifier of a freshly inserted row, as reported by the driver.
///
/// Drivers differ in what they hand back: SQLite and MySQL report an integer
/// row id, others may report a textual key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum InsertId {
    /// Integer row id.
    Int(i64),
    /// Textual key.
    Text(String),
}

impl InsertId {
    /// Returns the integer id, if this is one.
    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(id) => Some(*id),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Display for InsertId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for InsertId {
    fn from(id: i64) -> Self {
        Self::Int(id)
    }
}

impl From<String> for InsertId {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}

/// Prepares, binds and runs a statement against a database.
///
/// Implementations bind `params` positionally to the `?` placeholders in
/// `sql` and must report failures as errors rather than sentinel ids.
/// Errors raised while rendering a statement are converted into
/// [`Executor::Error`] so callers see a single error type.
pub trait Executor: Sync {
    /// Error reported by the driver.
    type Error: From<BuildError>;

    /// Executes `sql` with `params` and returns the id of the inserted row.
    fn execute(
        &self,
        sql: &str,
        params: &[SqlValue],
    ) -> impl Future<Output = Result<InsertId, Self::Error>> + Send;
}
