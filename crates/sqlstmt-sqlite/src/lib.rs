//! # sqlstmt-sqlite
//!
//! A SQLite [`Executor`](sqlstmt_core::Executor) for `sqlstmt-core`
//! statements, built on `sqlx`.
//!
//! ```rust,ignore
//! use sqlstmt_core::{Insert, ValueEntry};
//! use sqlstmt_sqlite::SqliteExecutor;
//!
//! let executor = SqliteExecutor::connect("sqlite:app.db").await?;
//! let id = Insert::with_pairs([
//!     ("name", ValueEntry::from("Alice")),
//!     ("age", ValueEntry::from(30_i64)),
//! ])
//! .into("users")
//! .execute(&executor)
//! .await?;
//! ```
//!
//! SQLite spells conflict handling `INSERT OR IGNORE`; statements rendered
//! with `ignore()` are sent unchanged and the driver's syntax error is
//! returned as [`ExecError::Database`].

mod error;
mod executor;

pub use error::{ExecError, Result};
pub use executor::SqliteExecutor;
