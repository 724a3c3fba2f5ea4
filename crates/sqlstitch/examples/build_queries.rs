//! Example demonstrating statement assembly across every clause type.
//!
//! Run with:
//!   cargo run --example build_queries -p sqlstitch

use sqlstitch::{Statement, Value, select};

#[derive(Debug)]
struct Filters {
    status: Option<String>,
    search: Option<String>,
    team_ids: Vec<i32>,
}

/// Build a listing query from optional filter criteria. Absent criteria
/// contribute nothing: their connectors are retracted automatically.
fn build_list_users(filters: &Filters) -> Statement {
    select(&["id", "name", "status"])
        .from(&["users"])
        .where_clause()
        .eq_opt("status", filters.status.as_deref())
        .and()
        .like_opt("name", filters.search.as_deref())
        .and()
        .in_values("team_id", filters.team_ids.iter().copied())
        .end()
}

fn print_statement(label: &str, stmt: &Statement) {
    println!("{label}:");
    println!("  sql:    {}", stmt.render());
    println!("  params: {:?}", stmt.params());
    println!();
}

fn main() {
    let filters = Filters {
        status: Some("active".to_string()),
        search: None,
        team_ids: vec![3, 7],
    };
    let listing = build_list_users(&filters);
    print_statement("filtered select", &listing);

    let no_filters = Filters {
        status: None,
        search: None,
        team_ids: Vec::new(),
    };
    print_statement("unfiltered select (no where)", &build_list_users(&no_filters));

    let roles = select(&["id"])
        .from(&["roles"])
        .where_clause()
        .eq("kind", "admin")
        .end();
    let admins = select(&["*"])
        .from(&["users"])
        .where_clause()
        .in_statement("role_id", roles)
        .end();
    print_statement("sub-select in where", &admins);

    let counted = select(&["name"])
        .sub(
            select(&["count(*)"]).from(&["orders"]).end(),
            true,
        )
        .from(&["users"])
        .end();
    print_statement("projected sub-query", &counted);

    let update = Statement::new()
        .update("users")
        .set("status", "inactive")
        .where_clause()
        .between("last_seen_days", 30, 365)
        .end();
    print_statement("update", &update);

    let insert = Statement::new()
        .insert("users")
        .add("name", "alice")
        .add("status", "active")
        .end();
    print_statement("insert", &insert);

    let delete = Statement::new()
        .delete("sessions")
        .where_clause()
        .all_eq([("expired", Value::from(true))])
        .end();
    print_statement("delete", &delete);
}
