//! SELECT clause builder.

use crate::stmt::where_clause::WhereClause;
use crate::stmt::Statement;

/// Builder for `select ... from ...`.
///
/// Opened by [`Statement::select`]; every path back to the statement goes
/// through [`end`](SelectClause::end) (or through the WHERE clause).
#[must_use]
pub struct SelectClause {
    stmt: Statement,
    /// Whether at least one item has been projected, for comma placement.
    has_item: bool,
}

impl SelectClause {
    pub(crate) fn open(mut stmt: Statement, columns: &[&str]) -> Self {
        let has_item = !columns.is_empty();
        let buf = stmt.buf_mut();
        buf.push("select ");
        buf.push(&columns.join(","));
        buf.push(" ");
        Self { stmt, has_item }
    }

    /// Append `from` with a comma-joined table list.
    pub fn from(mut self, tables: &[&str]) -> Self {
        let buf = self.stmt.buf_mut();
        buf.push(" from ");
        buf.push(&tables.join(","));
        buf.push(" ");
        self
    }

    /// Embed another statement as one projected item, optionally
    /// parenthesized. A comma is inserted if an item was already projected.
    pub fn sub(mut self, sub: Statement, parenthesize: bool) -> Self {
        let has_item = self.has_item;
        let (sql, params) = sub.into_rendered_parts();
        let buf = self.stmt.buf_mut();
        if has_item {
            buf.push(", ");
        }
        if parenthesize {
            buf.push("(");
            buf.push(&sql);
            buf.push(") ");
        } else {
            buf.push(&sql);
            buf.push(" ");
        }
        buf.extend_values(params);
        self.has_item = true;
        self
    }

    /// Open the WHERE clause.
    pub fn where_clause(self) -> WhereClause {
        WhereClause::open(self.stmt)
    }

    /// Close the clause and hand the statement back.
    ///
    /// No validation happens here: a projection with zero columns and zero
    /// sub-queries renders degenerate but accepted text.
    pub fn end(self) -> Statement {
        self.stmt
    }
}
