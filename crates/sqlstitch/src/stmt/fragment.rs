//! Shared text/parameter accumulator.

use crate::value::Value;

/// An append-only buffer pairing SQL text with its bind values.
///
/// Both [`Statement`](crate::Statement) and the WHERE clause's local buffer
/// are backed by a `Fragment`, so text and parameters always travel
/// together and placeholder order matches parameter order by construction.
///
/// The type is public only so clause builders can expose it through
/// [`ClauseOps`](crate::ClauseOps); it has no public methods of its own.
#[derive(Clone, Debug, Default)]
pub struct Fragment {
    sql: String,
    params: Vec<Value>,
}

impl Fragment {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append raw SQL text exactly as given.
    pub(crate) fn push(&mut self, sql: &str) {
        self.sql.push_str(sql);
    }

    /// Append raw SQL text padded with one space on each side.
    pub(crate) fn push_padded(&mut self, sql: &str) {
        self.sql.push(' ');
        self.sql.push_str(sql);
        self.sql.push(' ');
    }

    pub(crate) fn push_value(&mut self, value: Value) {
        self.params.push(value);
    }

    pub(crate) fn extend_values(&mut self, values: impl IntoIterator<Item = Value>) {
        self.params.extend(values);
    }

    /// Append another fragment's text and parameters.
    ///
    /// The other fragment's parameters land after the ones already held,
    /// keeping both sequences' internal order.
    pub(crate) fn push_fragment(&mut self, other: Fragment, parenthesize: bool) {
        if parenthesize {
            self.sql.push_str(" (");
            self.sql.push_str(&other.sql);
            self.sql.push_str(") ");
        } else {
            self.sql.push(' ');
            self.sql.push_str(&other.sql);
            self.sql.push(' ');
        }
        self.params.extend(other.params);
    }

    /// Current text length, recorded before a speculative append.
    pub(crate) fn checkpoint(&self) -> usize {
        self.sql.len()
    }

    /// Cut the text back to a previously recorded checkpoint.
    ///
    /// Connector tokens carry no parameters, so only text is cut.
    pub(crate) fn truncate_to(&mut self, checkpoint: usize) {
        self.sql.truncate(checkpoint);
    }

    /// Wrap the whole buffer in parentheses.
    pub(crate) fn parenthesize(&mut self) {
        self.sql.insert(0, '(');
        self.sql.push(')');
    }

    pub(crate) fn is_blank(&self) -> bool {
        self.sql.trim().is_empty()
    }

    pub(crate) fn raw_sql(&self) -> &str {
        &self.sql
    }

    pub(crate) fn params(&self) -> &[Value] {
        &self.params
    }

    pub(crate) fn into_params(self) -> Vec<Value> {
        self.params
    }

    /// Render with leading/trailing whitespace trimmed and every interior
    /// run of whitespace collapsed to a single space.
    pub(crate) fn render(&self) -> String {
        let mut out = String::with_capacity(self.sql.len());
        for word in self.sql.split_whitespace() {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(word);
        }
        out
    }
}
