//! # sqlstitch
//!
//! A fluent builder that assembles parameterized SQL statement text
//! alongside an ordered, positionally-aligned list of bind values, so
//! callers never hand-concatenate SQL strings.
//!
//! ## Features
//!
//! - **Text + parameters together**: every `?` placeholder written into the
//!   text corresponds 1:1, in order, to one [`Value`] in the parameter list
//! - **Clause-scoped builders**: `select` / `update` / `delete` / `insert`
//!   open a clause object that hands the [`Statement`] back at `end()`
//! - **Conditional composition**: WHERE predicates built from optional
//!   filter criteria degrade to silent no-ops (an empty key-value group or
//!   a null value retracts its dangling `and`/`or` connector instead of
//!   erroring)
//! - **No execution, no parsing**: the output is rendered text and a value
//!   sequence, ready for any parameterized-query API
//!
//! ## Example
//!
//! ```
//! use sqlstitch::{select, Value};
//!
//! let stmt = select(&["*"])
//!     .from(&["t1", "t2"])
//!     .where_clause()
//!     .eq("id", 5)
//!     .and()
//!     .all_eq(Vec::<(&str, Value)>::new()) // empty filter group: no-op
//!     .end();
//!
//! assert_eq!(stmt.render(), "select * from t1,t2 where id=?");
//! assert_eq!(stmt.params(), &[Value::from(5)]);
//! ```

pub mod error;
pub mod stmt;
pub mod value;

pub use error::{BuildError, BuildResult};
pub use stmt::{
    Built, ClauseOps, DeleteClause, Fragment, InsertClause, IntoColumn, SelectClause, Statement,
    UpdateClause, WhereClause,
};
pub use value::Value;

/// Open a SELECT clause on a fresh statement.
///
/// # Example
/// ```
/// let stmt = sqlstitch::select(&["id", "name"]).from(&["users"]).end();
/// assert_eq!(stmt.render(), "select id,name from users");
/// ```
pub fn select(columns: &[&str]) -> SelectClause {
    Statement::new().select(columns)
}

/// Open an UPDATE clause on a fresh statement.
pub fn update(table: &str) -> UpdateClause {
    Statement::new().update(table)
}

/// Open a DELETE clause on a fresh statement.
pub fn delete(table: &str) -> DeleteClause {
    Statement::new().delete(table)
}

/// Open an INSERT clause on a fresh statement.
pub fn insert(table: &str) -> InsertClause {
    Statement::new().insert(table)
}
