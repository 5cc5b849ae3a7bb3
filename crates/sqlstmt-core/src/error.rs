//! Error types for statement building.

use thiserror::Error;

/// Invalid builder state detected while rendering a statement.
///
/// These are only raised by render/execute calls, never while the builder
/// is being configured.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// No table was set with `into`.
    #[error("no table is set for insertion")]
    MissingTable,

    /// The column list is empty.
    #[error("missing columns for insertion")]
    MissingColumns,

    /// The value list is empty or does not line up with the columns.
    #[error("missing values for insertion: {columns} column(s), {values} value(s)")]
    MissingOrMismatchedValues {
        /// Number of configured columns.
        columns: usize,
        /// Number of configured values.
        values: usize,
    },
}

/// Result type alias for statement building.
pub type Result<T> = std::result::Result<T, BuildError>;
