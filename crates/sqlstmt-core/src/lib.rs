//! # sqlstmt-core
//!
//! Fluent SQL statement builders that keep values out of the SQL text.
//!
//! This crate provides:
//! - [`Insert`], an `INSERT [IGNORE] INTO ... VALUES (...)` builder
//! - [`Fragment`], the capability of nested SQL with its own bound values,
//!   and [`Raw`], its caller-written implementation
//! - [`Executor`], the seam to a database driver that runs a rendered
//!   statement and reports the generated row id
//!
//! ## Building a statement
//!
//! ```rust
//! use sqlstmt_core::{Insert, Raw, SqlValue, ValueEntry};
//!
//! let (sql, params) = Insert::new()
//!     .into("users")
//!     .columns(&["name", "created_at"])
//!     .values([
//!         ValueEntry::from("Alice"),
//!         ValueEntry::from(Raw::new("CURRENT_TIMESTAMP")),
//!     ])
//!     .ignore()
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(
//!     sql,
//!     "INSERT IGNORE INTO users (name, created_at) VALUES (?, CURRENT_TIMESTAMP)"
//! );
//! assert_eq!(params, vec![SqlValue::Text(String::from("Alice"))]);
//! ```
//!
//! ## Trust boundary
//!
//! Only values are parameterized. Table names, column names and [`Raw`]
//! fragments are emitted verbatim and must come from trusted code.

pub mod error;
pub mod executor;
pub mod fragment;
pub mod insert;
pub mod value;

pub use error::{BuildError, Result};
pub use executor::{Executor, InsertId};
pub use fragment::{Fragment, Raw};
pub use insert::{Insert, ValueEntry};
pub use value::{SqlValue, ToSqlValue};
