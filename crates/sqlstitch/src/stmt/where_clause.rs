//! WHERE clause builder.
//!
//! The clause accumulates predicate text and parameters in a private
//! buffer; nothing touches the owning statement until
//! [`end`](WhereClause::end), and a clause that never emitted a predicate
//! merges nothing at all.
//!
//! ## Connector retraction
//!
//! [`and`](WhereClause::and) and [`or`](WhereClause::or) append their
//! connector speculatively, anticipating a predicate that may never
//! materialize (an empty key-value group, a null LIKE value, an empty IN
//! list). Each records the buffer length immediately before the connector;
//! a non-contributing call truncates back to that checkpoint. The
//! checkpoint is cleared whenever a predicate completes, so retraction can
//! only ever remove a dangling trailing connector, never a finished
//! fragment, and retracting an already-empty clause is a no-op.

use crate::stmt::fragment::Fragment;
use crate::stmt::traits::{ClauseOps, IntoColumn};
use crate::stmt::Statement;
use crate::value::Value;

const AND: &str = " and ";
const OR: &str = " or ";

/// Builder for a `where ...` predicate expression.
#[must_use]
pub struct WhereClause {
    stmt: Statement,
    local: Fragment,
    /// Completed predicate fragments (connectors are not counted).
    emitted: usize,
    /// Buffer length just before the most recent dangling connector.
    connector_at: Option<usize>,
}

impl WhereClause {
    pub(crate) fn open(stmt: Statement) -> Self {
        Self {
            stmt,
            local: Fragment::new(),
            emitted: 0,
            connector_at: None,
        }
    }

    /// Mark one predicate fragment as completed.
    fn commit(&mut self) {
        self.emitted += 1;
        self.connector_at = None;
    }

    /// Remove the dangling connector left by the previous `and()`/`or()`,
    /// if any.
    fn retract(&mut self) {
        if let Some(checkpoint) = self.connector_at.take() {
            self.local.truncate_to(checkpoint);
        }
    }

    fn connector(&mut self, token: &str) {
        if self.emitted > 0 {
            self.connector_at = Some(self.local.checkpoint());
            self.local.push(token);
        }
    }

    /// Append ` and `, unless no predicate has been emitted yet.
    pub fn and(mut self) -> Self {
        self.connector(AND);
        self
    }

    /// Append ` or `, unless no predicate has been emitted yet.
    pub fn or(mut self) -> Self {
        self.connector(OR);
        self
    }

    /// Append `<col><op>? ` and bind the value.
    pub fn cmp(mut self, col: impl IntoColumn, op: &str, value: impl Into<Value>) -> Self {
        self.local.push(&col.into_column());
        self.local.push(op);
        self.local.push("? ");
        self.local.push_value(value.into());
        self.commit();
        self
    }

    /// Append `<col>=? ` and bind the value.
    pub fn eq(self, col: impl IntoColumn, value: impl Into<Value>) -> Self {
        self.cmp(col, "=", value)
    }

    /// Append `<col>!=? ` and bind the value.
    pub fn ne(self, col: impl IntoColumn, value: impl Into<Value>) -> Self {
        self.cmp(col, "!=", value)
    }

    /// Append `<col>>? ` and bind the value.
    pub fn gt(self, col: impl IntoColumn, value: impl Into<Value>) -> Self {
        self.cmp(col, ">", value)
    }

    /// Append `<col>>=? ` and bind the value.
    pub fn gte(self, col: impl IntoColumn, value: impl Into<Value>) -> Self {
        self.cmp(col, ">=", value)
    }

    /// Append `<col><? ` and bind the value.
    pub fn lt(self, col: impl IntoColumn, value: impl Into<Value>) -> Self {
        self.cmp(col, "<", value)
    }

    /// Append `<col><=? ` and bind the value.
    pub fn lte(self, col: impl IntoColumn, value: impl Into<Value>) -> Self {
        self.cmp(col, "<=", value)
    }

    /// Equality if the value is present; retraction otherwise.
    pub fn eq_opt(mut self, col: impl IntoColumn, value: Option<impl Into<Value>>) -> Self {
        match value {
            Some(v) => self.eq(col, v),
            None => {
                self.retract();
                self
            }
        }
    }

    /// Append a substring match: `<col> like concat('%', ?, '%') `.
    ///
    /// A null value contributes nothing and retracts instead.
    pub fn like(mut self, col: impl IntoColumn, value: impl Into<Value>) -> Self {
        let value = value.into();
        if value.is_null() {
            self.retract();
            return self;
        }
        self.local.push(&col.into_column());
        self.local.push(" like concat('%', ?, '%') ");
        self.local.push_value(value);
        self.commit();
        self
    }

    /// Substring match if the value is present; retraction otherwise.
    pub fn like_opt(mut self, col: impl IntoColumn, value: Option<impl Into<Value>>) -> Self {
        match value {
            Some(v) => self.like(col, v),
            None => {
                self.retract();
                self
            }
        }
    }

    /// Append `<col> between ? and ? ` and bind both bounds in order.
    pub fn between(
        mut self,
        col: impl IntoColumn,
        lo: impl Into<Value>,
        hi: impl Into<Value>,
    ) -> Self {
        self.local.push(&col.into_column());
        self.local.push(" between ? and ? ");
        self.local.push_value(lo.into());
        self.local.push_value(hi.into());
        self.commit();
        self
    }

    /// Range from an ordered bound list: the first two bounds are used;
    /// fewer than two retracts.
    pub fn between_bounds(
        mut self,
        col: impl IntoColumn,
        bounds: impl IntoIterator<Item = Value>,
    ) -> Self {
        let mut bounds = bounds.into_iter();
        match (bounds.next(), bounds.next()) {
            (Some(lo), Some(hi)) => self.between(col, lo, hi),
            _ => {
                self.retract();
                self
            }
        }
    }

    /// Range if both bounds are present; retraction otherwise.
    pub fn between_opt(
        mut self,
        col: impl IntoColumn,
        bounds: Option<(impl Into<Value>, impl Into<Value>)>,
    ) -> Self {
        match bounds {
            Some((lo, hi)) => self.between(col, lo, hi),
            None => {
                self.retract();
                self
            }
        }
    }

    /// Key-value equality group joined by ` and `; an empty group retracts.
    pub fn all_eq<K, V>(self, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: IntoColumn,
        V: Into<Value>,
    {
        self.cmp_group(pairs, "=", AND)
    }

    /// Key-value equality group joined by ` or `; an empty group retracts.
    pub fn any_eq<K, V>(self, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: IntoColumn,
        V: Into<Value>,
    {
        self.cmp_group(pairs, "=", OR)
    }

    /// Key-value comparison group with a custom operator, joined by ` and `.
    pub fn all_cmp<K, V>(self, pairs: impl IntoIterator<Item = (K, V)>, op: &str) -> Self
    where
        K: IntoColumn,
        V: Into<Value>,
    {
        self.cmp_group(pairs, op, AND)
    }

    /// Key-value comparison group with a custom operator, joined by ` or `.
    pub fn any_cmp<K, V>(self, pairs: impl IntoIterator<Item = (K, V)>, op: &str) -> Self
    where
        K: IntoColumn,
        V: Into<Value>,
    {
        self.cmp_group(pairs, op, OR)
    }

    fn cmp_group<K, V>(
        mut self,
        pairs: impl IntoIterator<Item = (K, V)>,
        op: &str,
        connector: &str,
    ) -> Self
    where
        K: IntoColumn,
        V: Into<Value>,
    {
        let mut first = true;
        for (col, value) in pairs {
            if first {
                self.local.push(" (");
                first = false;
            } else {
                self.local.push(connector);
            }
            self.local.push(&col.into_column());
            self.local.push(op);
            self.local.push("? ");
            self.local.push_value(value.into());
        }
        if first {
            self.retract();
        } else {
            self.local.push(") ");
            self.commit();
        }
        self
    }

    /// Key-value substring-match group joined by ` and `; an empty group
    /// retracts.
    pub fn all_like<K, V>(self, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: IntoColumn,
        V: Into<Value>,
    {
        self.like_group(pairs, AND)
    }

    /// Key-value substring-match group joined by ` or `; an empty group
    /// retracts.
    pub fn any_like<K, V>(self, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: IntoColumn,
        V: Into<Value>,
    {
        self.like_group(pairs, OR)
    }

    fn like_group<K, V>(mut self, pairs: impl IntoIterator<Item = (K, V)>, connector: &str) -> Self
    where
        K: IntoColumn,
        V: Into<Value>,
    {
        let mut first = true;
        for (col, value) in pairs {
            if first {
                self.local.push(" (");
                first = false;
            } else {
                self.local.push(connector);
            }
            self.local.push(&col.into_column());
            self.local.push(" like concat('%', ?, '%') ");
            self.local.push_value(value.into());
        }
        if first {
            self.retract();
        } else {
            self.local.push(") ");
            self.commit();
        }
        self
    }

    /// Key/bound-list range group joined by ` and `.
    ///
    /// Entries with fewer than two bounds are skipped; extra bounds beyond
    /// the first two are ignored. A group in which no entry qualifies
    /// retracts.
    pub fn all_between<K>(self, pairs: impl IntoIterator<Item = (K, Vec<Value>)>) -> Self
    where
        K: IntoColumn,
    {
        self.between_group(pairs, AND)
    }

    /// Key/bound-list range group joined by ` or `.
    pub fn any_between<K>(self, pairs: impl IntoIterator<Item = (K, Vec<Value>)>) -> Self
    where
        K: IntoColumn,
    {
        self.between_group(pairs, OR)
    }

    fn between_group<K>(
        mut self,
        pairs: impl IntoIterator<Item = (K, Vec<Value>)>,
        connector: &str,
    ) -> Self
    where
        K: IntoColumn,
    {
        let mut first = true;
        for (col, bounds) in pairs {
            let mut bounds = bounds.into_iter();
            let (Some(lo), Some(hi)) = (bounds.next(), bounds.next()) else {
                continue;
            };
            if first {
                self.local.push(" (");
                first = false;
            } else {
                self.local.push(connector);
            }
            self.local.push(&col.into_column());
            self.local.push(" between ? and ? ");
            self.local.push_value(lo);
            self.local.push_value(hi);
        }
        if first {
            self.retract();
        } else {
            self.local.push(") ");
            self.commit();
        }
        self
    }

    /// Append `(<col> in (?,?,...)) ` with one placeholder per value; an
    /// empty list retracts.
    pub fn in_values<V>(
        mut self,
        col: impl IntoColumn,
        values: impl IntoIterator<Item = V>,
    ) -> Self
    where
        V: Into<Value>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            self.retract();
            return self;
        }
        self.local.push("(");
        self.local.push(&col.into_column());
        self.local.push(" in (");
        for i in 0..values.len() {
            if i > 0 {
                self.local.push(",");
            }
            self.local.push("?");
        }
        self.local.push(")) ");
        self.local.extend_values(values);
        self.commit();
        self
    }

    /// Append `(<col> in (<sub>)) ` with the sub-statement's rendered text
    /// embedded verbatim and its parameters appended; a blank sub-statement
    /// retracts.
    pub fn in_statement(mut self, col: impl IntoColumn, sub: Statement) -> Self {
        let (sql, params) = sub.into_rendered_parts();
        if sql.is_empty() {
            self.retract();
            return self;
        }
        self.local.push("(");
        self.local.push(&col.into_column());
        self.local.push(" in (");
        self.local.push(&sql);
        self.local.push(")) ");
        self.local.extend_values(params);
        self.commit();
        self
    }

    /// Append `(<col> in (<list>)) ` with literal SQL text as the IN-list,
    /// binding nothing; blank text retracts.
    pub fn in_raw(mut self, col: impl IntoColumn, list: &str) -> Self {
        if list.trim().is_empty() {
            self.retract();
            return self;
        }
        self.local.push("(");
        self.local.push(&col.into_column());
        self.local.push(" in (");
        self.local.push(list);
        self.local.push(")) ");
        self.commit();
        self
    }

    /// Close the clause. A non-blank predicate is prefixed with ` where `
    /// and merged (text and parameters) into the statement; a blank one
    /// merges nothing. The statement is returned either way.
    pub fn end(self) -> Statement {
        let WhereClause {
            mut stmt, local, ..
        } = self;
        if local.is_blank() {
            return stmt;
        }
        let buf = stmt.buf_mut();
        buf.push(" where ");
        buf.push_fragment(local, false);
        stmt
    }
}

impl ClauseOps for WhereClause {
    fn fragment_mut(&mut self) -> &mut Fragment {
        &mut self.local
    }

    // Raw-appended text counts as a completed fragment: connectors may
    // follow it, and retraction must never cut into it.
    fn raw_appended(&mut self) {
        self.commit();
    }
}
