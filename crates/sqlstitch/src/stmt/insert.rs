//! INSERT clause builder.

use std::collections::BTreeMap;

use crate::stmt::fragment::Fragment;
use crate::stmt::traits::{ClauseOps, IntoColumn};
use crate::stmt::Statement;
use crate::value::Value;

/// Builder for `insert into <table> (...) values(...)`.
///
/// Column values are buffered until [`end`](InsertClause::end); later
/// writes to the same column win. The column list and the parameter list
/// are emitted from the same ordered map, so names and placeholders stay
/// aligned within one render.
#[must_use]
pub struct InsertClause {
    stmt: Statement,
    values: BTreeMap<String, Value>,
}

impl InsertClause {
    pub(crate) fn open(mut stmt: Statement, table: &str) -> Self {
        let buf = stmt.buf_mut();
        buf.push("insert into ");
        buf.push(table);
        Self {
            stmt,
            values: BTreeMap::new(),
        }
    }

    /// Buffer one column value.
    pub fn add(mut self, col: impl IntoColumn, value: impl Into<Value>) -> Self {
        self.values.insert(col.into_column(), value.into());
        self
    }

    /// Buffer every entry, in iteration order.
    pub fn add_all<K, V>(mut self, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: IntoColumn,
        V: Into<Value>,
    {
        for (col, value) in pairs {
            self.values.insert(col.into_column(), value.into());
        }
        self
    }

    /// Buffer a serialized JSON document for a column.
    pub fn add_json<T: serde::Serialize>(
        self,
        col: impl IntoColumn,
        value: &T,
    ) -> serde_json::Result<Self> {
        Ok(self.add(col, serde_json::to_value(value)?))
    }

    /// Render `(<c1>,<c2>,...) values(?,?,...)`, bind the buffered values
    /// in column-list order, and hand the statement back.
    pub fn end(self) -> Statement {
        let InsertClause { mut stmt, values } = self;
        let buf = stmt.buf_mut();
        buf.push("(");
        for (i, col) in values.keys().enumerate() {
            if i > 0 {
                buf.push(",");
            }
            buf.push(col);
        }
        buf.push(") values(");
        for i in 0..values.len() {
            if i > 0 {
                buf.push(",");
            }
            buf.push("?");
        }
        buf.push(")");
        buf.extend_values(values.into_values());
        stmt
    }
}

impl ClauseOps for InsertClause {
    fn fragment_mut(&mut self) -> &mut Fragment {
        self.stmt.buf_mut()
    }
}
