//! Renderable SQL fragments that carry their own bound values.
//!
//! A fragment placed in an insert's value list is spliced into the rendered
//! SQL verbatim instead of a `?`, and its bound values are spliced into the
//! parameter list at the same position.

use crate::error::Result;
use crate::value::{SqlValue, ToSqlValue};

/// A piece of SQL with its own positional parameters.
pub trait Fragment: Send + Sync {
    /// Renders the SQL text of this fragment.
    ///
    /// # Errors
    ///
    /// Returns a [`BuildError`](crate::BuildError) if the fragment is not in
    /// a renderable state.
    fn render(&self) -> Result<String>;

    /// Returns the values bound to the placeholders in [`Fragment::render`],
    /// in placeholder order.
    fn bound_values(&self) -> Vec<SqlValue>;
}

/// Caller-supplied SQL text, optionally with values for the `?` it contains.
///
/// The text is emitted as-is. No parentheses are added, so a sub-query must
/// be written as `(SELECT ...)`.
///
/// **Warning**: Only use this for SQL that does not contain user input.
#[derive(Debug, Clone, PartialEq)]
pub struct Raw {
    sql: String,
    params: Vec<SqlValue>,
}

impl Raw {
    /// Creates a fragment from raw SQL with no bound values.
    #[must_use]
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: vec![],
        }
    }

    /// Creates a fragment from raw SQL and the values for its placeholders.
    #[must_use]
    pub fn with_values<T: ToSqlValue>(sql: impl Into<String>, values: Vec<T>) -> Self {
        Self {
            sql: sql.into(),
            params: values.into_iter().map(ToSqlValue::to_sql_value).collect(),
        }
    }

    /// Returns the SQL text.
    #[must_use]
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Returns the parameters.
    #[must_use]
    pub fn params(&self) -> &[SqlValue] {
        &self.params
    }
}

impl Fragment for Raw {
    fn render(&self) -> Result<String> {
        Ok(self.sql.clone())
    }

    fn bound_values(&self) -> Vec<SqlValue> {
        self.params.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_without_values() {
        let raw = Raw::new("CURRENT_TIMESTAMP");
        assert_eq!(raw.render().unwrap(), "CURRENT_TIMESTAMP");
        assert!(raw.bound_values().is_empty());
    }

    #[test]
    fn test_raw_with_values() {
        let raw = Raw::with_values("(SELECT id FROM groups WHERE name = ?)", vec!["admins"]);
        assert_eq!(
            raw.render().unwrap(),
            "(SELECT id FROM groups WHERE name = ?)"
        );
        assert_eq!(
            raw.bound_values(),
            vec![SqlValue::Text(String::from("admins"))]
        );
    }

    #[test]
    fn test_raw_render_is_verbatim() {
        // No parentheses or whitespace are added around the text
        let raw = Raw::new("1 + 1");
        assert_eq!(raw.render().unwrap(), "1 + 1");
        assert_eq!(raw.sql(), "1 + 1");
    }
}
