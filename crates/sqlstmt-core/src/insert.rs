//! INSERT statement builder.
//!
//! The builder accumulates a table, a column list and a value list, and
//! renders them into `INSERT [IGNORE] INTO t (a, b) VALUES (?, ?)` together
//! with the values to bind. Values are either literals, which become `?`
//! placeholders, or [`Fragment`]s, which are spliced into the SQL as-is.
//!
//! Table and column names are emitted verbatim; only values are
//! parameterized.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::error::{BuildError, Result};
use crate::executor::{Executor, InsertId};
use crate::fragment::{Fragment, Raw};
use crate::value::{SqlValue, ToSqlValue};

/// One entry of an insert's value list.
#[derive(Clone)]
pub enum ValueEntry {
    /// A value bound to a `?` placeholder.
    Literal(SqlValue),
    /// Nested SQL spliced in place of a placeholder.
    Fragment(Arc<dyn Fragment>),
}

impl ValueEntry {
    /// Wraps any convertible value as a literal.
    #[must_use]
    pub fn literal<T: ToSqlValue>(value: T) -> Self {
        Self::Literal(value.to_sql_value())
    }

    /// Wraps a fragment.
    #[must_use]
    pub fn fragment<F: Fragment + 'static>(fragment: F) -> Self {
        Self::Fragment(Arc::new(fragment))
    }

    fn render(&self) -> Result<String> {
        match self {
            Self::Literal(_) => Ok(String::from(SqlValue::placeholder())),
            Self::Fragment(fragment) => fragment.render(),
        }
    }

    fn push_bound_values(&self, out: &mut Vec<SqlValue>) {
        match self {
            Self::Literal(value) => out.push(value.clone()),
            Self::Fragment(fragment) => out.extend(fragment.bound_values()),
        }
    }
}

impl fmt::Debug for ValueEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Self::Fragment(fragment) => f
                .debug_tuple("Fragment")
                .field(&fragment.render())
                .finish(),
        }
    }
}

macro_rules! value_entry_from_literal {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ValueEntry {
                fn from(value: $ty) -> Self {
                    Self::Literal(value.to_sql_value())
                }
            }
        )*
    };
}

value_entry_from_literal!(
    SqlValue,
    bool,
    i64,
    i32,
    i16,
    i8,
    u32,
    u16,
    u8,
    f64,
    f32,
    String,
    &str,
    Vec<u8>,
    &[u8]
);

impl<T: ToSqlValue> From<Option<T>> for ValueEntry {
    fn from(value: Option<T>) -> Self {
        Self::Literal(value.to_sql_value())
    }
}

impl From<Raw> for ValueEntry {
    fn from(raw: Raw) -> Self {
        Self::fragment(raw)
    }
}

impl From<Insert> for ValueEntry {
    fn from(insert: Insert) -> Self {
        Self::fragment(insert)
    }
}

impl From<Arc<dyn Fragment>> for ValueEntry {
    fn from(fragment: Arc<dyn Fragment>) -> Self {
        Self::Fragment(fragment)
    }
}

/// An INSERT statement builder.
///
/// Configuration never fails; an incomplete builder is reported when it is
/// rendered or executed.
///
/// # Example
///
/// ```rust
/// use sqlstmt_core::{Insert, ValueEntry};
///
/// let (sql, params) = Insert::with_pairs([
///     ("name", ValueEntry::from("Alice")),
///     ("age", ValueEntry::from(30_i64)),
/// ])
/// .into("users")
/// .build()
/// .unwrap();
///
/// assert_eq!(sql, "INSERT INTO users (name, age) VALUES (?, ?)");
/// assert_eq!(params.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Insert {
    table: Option<String>,
    columns: Vec<String>,
    values: Vec<ValueEntry>,
    ignore: bool,
}

impl Insert {
    /// Creates an empty INSERT builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder pre-seeded from `(column, value)` pairs.
    ///
    /// Keys become the column list and values the value list, both in
    /// iteration order.
    #[must_use]
    pub fn with_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ValueEntry>,
    {
        let (columns, values) = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .unzip();
        Self {
            table: None,
            columns,
            values,
            ignore: false,
        }
    }

    /// Specifies the table to insert into.
    #[must_use]
    pub fn into(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    /// Replaces the column list.
    #[must_use]
    pub fn columns(mut self, cols: &[&str]) -> Self {
        self.columns = cols.iter().map(|s| String::from(*s)).collect();
        self
    }

    /// Replaces the value list.
    #[must_use]
    pub fn values<I, V>(mut self, vals: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<ValueEntry>,
    {
        self.values = vals.into_iter().map(Into::into).collect();
        self
    }

    /// Renders `INSERT IGNORE` instead of `INSERT`.
    #[must_use]
    pub fn ignore(mut self) -> Self {
        self.ignore = true;
        self
    }

    /// Returns the configured table, if any.
    #[must_use]
    pub fn table(&self) -> Option<&str> {
        self.table.as_deref()
    }

    /// Returns the configured column names.
    #[must_use]
    pub fn column_names(&self) -> &[String] {
        &self.columns
    }

    /// Returns the configured value entries.
    #[must_use]
    pub fn value_entries(&self) -> &[ValueEntry] {
        &self.values
    }

    /// Returns whether `IGNORE` is rendered.
    #[must_use]
    pub const fn is_ignore(&self) -> bool {
        self.ignore
    }

    /// Renders the SQL string.
    ///
    /// # Errors
    ///
    /// - [`BuildError::MissingTable`] if no table was set.
    /// - [`BuildError::MissingColumns`] if the column list is empty.
    /// - [`BuildError::MissingOrMismatchedValues`] if the value list is empty
    ///   or its length differs from the column list.
    /// - Any error raised while rendering a nested fragment.
    pub fn build_sql(&self) -> Result<String> {
        let Some(table) = self.table.as_deref() else {
            return Err(BuildError::MissingTable);
        };
        if self.columns.is_empty() {
            return Err(BuildError::MissingColumns);
        }
        if self.values.is_empty() || self.values.len() != self.columns.len() {
            return Err(BuildError::MissingOrMismatchedValues {
                columns: self.columns.len(),
                values: self.values.len(),
            });
        }

        let placeholders = self
            .values
            .iter()
            .map(ValueEntry::render)
            .collect::<Result<Vec<String>>>()?;

        let mut sql = String::from("INSERT");
        if self.ignore {
            sql.push_str(" IGNORE");
        }
        sql.push_str(" INTO ");
        sql.push_str(table);
        sql.push_str(" (");
        sql.push_str(&self.columns.join(", "));
        sql.push_str(") VALUES (");
        sql.push_str(&placeholders.join(", "));
        sql.push(')');

        Ok(sql)
    }

    /// Returns the values to bind, in placeholder order.
    ///
    /// Fragment entries contribute their own bound values at their position.
    #[must_use]
    pub fn params(&self) -> Vec<SqlValue> {
        let mut params = Vec::with_capacity(self.values.len());
        for value in &self.values {
            value.push_bound_values(&mut params);
        }
        params
    }

    /// Renders the SQL string and returns it with its parameters.
    ///
    /// # Errors
    ///
    /// Same as [`Insert::build_sql`].
    pub fn build(&self) -> Result<(String, Vec<SqlValue>)> {
        let sql = self.build_sql()?;
        Ok((sql, self.params()))
    }

    /// Executes the statement and returns the id of the inserted row.
    ///
    /// The builder is rendered first; if that fails the executor is never
    /// called. Errors from the executor are returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns the executor's error type, which also carries any
    /// [`BuildError`].
    pub async fn execute<E: Executor>(
        &self,
        executor: &E,
    ) -> std::result::Result<InsertId, E::Error> {
        let (sql, params) = self.build()?;
        debug!(sql = %sql, params = params.len(), "executing insert");
        executor.execute(&sql, &params).await
    }
}

impl Fragment for Insert {
    fn render(&self) -> Result<String> {
        self.build_sql()
    }

    fn bound_values(&self) -> Vec<SqlValue> {
        self.params()
    }
}
