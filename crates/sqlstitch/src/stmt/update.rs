//! UPDATE clause builder.

use crate::stmt::fragment::Fragment;
use crate::stmt::traits::{ClauseOps, IntoColumn};
use crate::stmt::where_clause::WhereClause;
use crate::stmt::Statement;
use crate::value::Value;

/// Builder for `update <table> set ...`.
#[must_use]
pub struct UpdateClause {
    stmt: Statement,
    /// Whether at least one assignment was emitted, for comma placement.
    has_set: bool,
}

impl UpdateClause {
    pub(crate) fn open(mut stmt: Statement, table: &str) -> Self {
        let buf = stmt.buf_mut();
        buf.push("update ");
        buf.push(table);
        buf.push(" ");
        Self {
            stmt,
            has_set: false,
        }
    }

    /// Append one assignment: ` set <col>=? ` on the first call,
    /// `, <col>=? ` afterwards.
    pub fn set(mut self, col: impl IntoColumn, value: impl Into<Value>) -> Self {
        let lead = if self.has_set { ", " } else { " set " };
        let buf = self.stmt.buf_mut();
        buf.push(lead);
        buf.push(&col.into_column());
        buf.push("=? ");
        buf.push_value(value.into());
        self.has_set = true;
        self
    }

    /// Apply [`set`](UpdateClause::set) per entry, in iteration order.
    pub fn set_all<K, V>(mut self, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: IntoColumn,
        V: Into<Value>,
    {
        for (col, value) in pairs {
            self = self.set(col, value);
        }
        self
    }

    /// Assign a serialized JSON document to a column.
    pub fn set_json<T: serde::Serialize>(
        self,
        col: impl IntoColumn,
        value: &T,
    ) -> serde_json::Result<Self> {
        Ok(self.set(col, serde_json::to_value(value)?))
    }

    /// Open the WHERE clause.
    pub fn where_clause(self) -> WhereClause {
        WhereClause::open(self.stmt)
    }

    /// Close the clause and hand the statement back.
    pub fn end(self) -> Statement {
        self.stmt
    }
}

impl ClauseOps for UpdateClause {
    fn fragment_mut(&mut self) -> &mut Fragment {
        self.stmt.buf_mut()
    }
}
