/// Synthesize `SELECT * FROM <table>` with an optional WHERE clause.
///
/// The parameter map plays no part in SELECT synthesis; values referenced by
/// the WHERE text are resolved later by the binder.
#[must_use]
pub fn select_statement(table: &str, where_conditions: &str) -> String {
    if where_conditions.is_empty() {
        format!("SELECT * FROM {table}")
    } else {
        format!("SELECT * FROM {table} WHERE {where_conditions}")
    }
}
