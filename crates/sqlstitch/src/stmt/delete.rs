//! DELETE clause builder.

use crate::stmt::fragment::Fragment;
use crate::stmt::traits::ClauseOps;
use crate::stmt::where_clause::WhereClause;
use crate::stmt::Statement;

/// Builder for `delete from <table>`.
#[must_use]
pub struct DeleteClause {
    stmt: Statement,
}

impl DeleteClause {
    pub(crate) fn open(mut stmt: Statement, table: &str) -> Self {
        let buf = stmt.buf_mut();
        buf.push("delete from ");
        buf.push(table);
        buf.push(" ");
        Self { stmt }
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

impl ClauseOps for DeleteClause {
    fn fragment_mut(&mut self) -> &mut Fragment {
        self.stmt.buf_mut()
    }
}
