//! Fluent statement builder.
//!
//! ## Design
//!
//! - One [`Statement`] owns the accumulating text buffer and the ordered
//!   parameter list; clause builders are opened from it and hand it back
//!   from their `end()` method.
//! - Placeholders are positional `?` markers, aligned 1:1 with the
//!   parameter sequence.
//! - Clause builders own the statement while they are open, so using a
//!   clause after it was closed does not compile.
//! - The WHERE clause accumulates into a private buffer and merges into the
//!   statement only when closed with at least one predicate.

pub mod delete;
pub mod fragment;
pub mod insert;
pub mod select;
pub mod traits;
pub mod update;
pub mod where_clause;

pub use delete::DeleteClause;
pub use fragment::Fragment;
pub use insert::InsertClause;
pub use select::SelectClause;
pub use traits::{ClauseOps, IntoColumn};
pub use update::UpdateClause;
pub use where_clause::WhereClause;

use crate::error::{BuildError, BuildResult};
use crate::value::Value;

/// The root builder: a mutable SQL text buffer plus the ordered sequence of
/// bind values its `?` placeholders refer to.
///
/// # Example
/// ```
/// use sqlstitch::{Statement, Value};
///
/// let stmt = Statement::new()
///     .select(&["*"])
///     .from(&["users"])
///     .where_clause()
///     .eq("id", 7)
///     .end();
/// assert_eq!(stmt.render(), "select * from users where id=?");
/// assert_eq!(stmt.params(), &[Value::from(7)]);
/// ```
#[must_use]
#[derive(Clone, Debug, Default)]
pub struct Statement {
    buf: Fragment,
}

impl Statement {
    /// Create an empty statement.
    pub fn new() -> Self {
        Self {
            buf: Fragment::new(),
        }
    }

    pub(crate) fn buf_mut(&mut self) -> &mut Fragment {
        &mut self.buf
    }

    /// Rendered text plus owned parameters, for embedding into another
    /// buffer.
    pub(crate) fn into_rendered_parts(self) -> (String, Vec<Value>) {
        let sql = self.buf.render();
        (sql, self.buf.into_params())
    }

    /// Append raw SQL text (padded with a space on each side) and bind
    /// values, in order.
    pub fn append(mut self, sql: &str, params: impl IntoIterator<Item = Value>) -> Self {
        self.buf.push_padded(sql);
        self.buf.extend_values(params);
        self
    }

    /// Append another statement's rendered text, optionally parenthesized,
    /// and its parameters after the current ones.
    pub fn append_statement(mut self, other: Statement, parenthesize: bool) -> Self {
        let (sql, params) = other.into_rendered_parts();
        if parenthesize {
            self.buf.push(" (");
            self.buf.push(&sql);
            self.buf.push(") ");
        } else {
            self.buf.push_padded(&sql);
        }
        self.buf.extend_values(params);
        self
    }

    /// Wrap the entire buffer in parentheses and append ` as <name>`, for
    /// use as a derived table or projected sub-select.
    pub fn alias(mut self, name: &str) -> Self {
        self.buf.parenthesize();
        self.buf.push(" as ");
        self.buf.push(name);
        self
    }

    /// Open a SELECT clause projecting the given columns.
    ///
    /// Zero columns is not an error: the projection list can be filled in
    /// later through [`SelectClause::sub`].
    pub fn select(self, columns: &[&str]) -> SelectClause {
        SelectClause::open(self, columns)
    }

    /// Open an UPDATE clause for the given table.
    pub fn update(self, table: &str) -> UpdateClause {
        UpdateClause::open(self, table)
    }

    /// Open a DELETE clause for the given table.
    pub fn delete(self, table: &str) -> DeleteClause {
        DeleteClause::open(self, table)
    }

    /// Open an INSERT clause for the given table.
    pub fn insert(self, table: &str) -> InsertClause {
        InsertClause::open(self, table)
    }

    /// Render the SQL text: trimmed, with every whitespace run collapsed to
    /// a single space. Idempotent for an unchanged statement.
    pub fn render(&self) -> String {
        let sql = self.buf.render();
        #[cfg(feature = "tracing")]
        tracing::debug!(params = self.buf.params().len(), %sql, "rendered statement");
        sql
    }

    /// The bind values in placeholder order.
    pub fn params(&self) -> &[Value] {
        self.buf.params()
    }

    /// Check that the placeholder count matches the parameter count.
    pub fn validate(&self) -> BuildResult<()> {
        let placeholders = self.buf.raw_sql().matches('?').count();
        let params = self.buf.params().len();
        if placeholders != params {
            return Err(BuildError::PlaceholderMismatch {
                placeholders,
                params,
            });
        }
        Ok(())
    }

    /// Validate and return a rendered snapshot of the statement.
    pub fn build(&self) -> BuildResult<Built<'_>> {
        self.validate()?;
        Ok(Built {
            sql: self.render(),
            params: self.params(),
        })
    }
}

/// A validated, rendered statement: SQL text plus parameter view.
pub struct Built<'a> {
    sql: String,
    params: &'a [Value],
}

impl Built<'_> {
    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn params(&self) -> &[Value] {
        self.params
    }
}
