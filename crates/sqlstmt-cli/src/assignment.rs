//! Parsing of `column=value` command-line arguments.

use std::str::FromStr;

use sqlstmt_core::{Raw, SqlValue, ValueEntry};
use thiserror::Error;

/// Errors for malformed `column=value` arguments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssignmentError {
    /// The argument has no `=`.
    #[error("expected COLUMN=VALUE, got '{0}'")]
    MissingEquals(String),

    /// Nothing before the `=`.
    #[error("empty column name in '{0}'")]
    EmptyColumn(String),
}

/// One `column=value` pair from the command line.
///
/// Values are typed by their spelling:
/// - `null` binds NULL, `true`/`false` bind booleans
/// - integers and finite floats bind numbers
/// - `@sql` splices `sql` verbatim as a fragment, e.g. `@CURRENT_TIMESTAMP`
/// - a leading `\` forces text, e.g. `\@home` or `\42`
/// - anything else binds text
#[derive(Debug, Clone)]
pub struct Assignment {
    pub column: String,
    pub value: ValueEntry,
}

impl FromStr for Assignment {
    type Err = AssignmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((column, raw)) = s.split_once('=') else {
            return Err(AssignmentError::MissingEquals(s.to_string()));
        };
        let column = column.trim();
        if column.is_empty() {
            return Err(AssignmentError::EmptyColumn(s.to_string()));
        }
        Ok(Self {
            column: column.to_string(),
            value: parse_value(raw),
        })
    }
}

fn parse_value(raw: &str) -> ValueEntry {
    if let Some(text) = raw.strip_prefix('\\') {
        return ValueEntry::from(text);
    }
    if let Some(sql) = raw.strip_prefix('@') {
        return ValueEntry::from(Raw::new(sql));
    }
    let value = match raw {
        "null" => SqlValue::Null,
        "true" => SqlValue::Bool(true),
        "false" => SqlValue::Bool(false),
        _ => {
            if let Ok(i) = raw.parse::<i64>() {
                SqlValue::Int(i)
            } else if let Some(f) = raw.parse::<f64>().ok().filter(|f| f.is_finite()) {
                SqlValue::Float(f)
            } else {
                SqlValue::Text(raw.to_string())
            }
        }
    };
    ValueEntry::Literal(value)
}
