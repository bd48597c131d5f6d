use rusqlite::{Connection, Statement};

use crate::error::HelperError;
use crate::params::{ParamMap, TypeOverrides, resolve_bind};
use crate::results::ResultSet;
use crate::translation::placeholder_occurs;

use super::params::to_sqlite_value;
use super::query::build_result_set;

/// Bind map entries into a prepared statement under their `:name`
/// placeholders. Entries whose placeholder does not occur in the SQL text
/// are skipped silently, never errors.
fn bind_named(
    stmt: &mut Statement,
    sql: &str,
    params: &ParamMap,
    overrides: &TypeOverrides,
) -> Result<(), HelperError> {
    for (name, value) in params.iter() {
        if !placeholder_occurs(sql, name) {
            continue;
        }
        // rusqlite sees the placeholder only if it survived tokenization;
        // a :name inside a string literal has no parameter slot.
        let Some(index) = stmt.parameter_index(&format!(":{name}"))? else {
            continue;
        };
        let (tag, bound) = resolve_bind(name, value, overrides);
        tracing::debug!(parameter = name, bind_type = ?tag, "binding sqlite parameter");
        stmt.raw_bind_parameter(index, to_sqlite_value(&bound))?;
    }
    Ok(())
}

/// Execute a SELECT (or anything that returns rows) and collect the result.
///
/// # Errors
///
/// Returns `HelperError::SqliteError` if preparation, binding, or execution
/// fails.
pub fn execute_select(
    conn: &Connection,
    sql: &str,
    params: &ParamMap,
    overrides: &TypeOverrides,
) -> Result<ResultSet, HelperError> {
    let mut stmt = conn.prepare(sql)?;
    bind_named(&mut stmt, sql, params, overrides)?;
    build_result_set(&mut stmt)
}

/// Execute a DML statement and return the number of rows affected.
///
/// # Errors
///
/// Returns `HelperError::SqliteError` if preparation, binding, or execution
/// fails.
pub fn execute_dml(
    conn: &Connection,
    sql: &str,
    params: &ParamMap,
    overrides: &TypeOverrides,
) -> Result<u64, HelperError> {
    let mut stmt = conn.prepare(sql)?;
    bind_named(&mut stmt, sql, params, overrides)?;
    let affected = stmt.raw_execute()?;
    Ok(affected as u64)
}

/// Execute a batch of SQL statements with no parameters.
///
/// # Errors
///
/// Returns `HelperError::SqliteError` if any statement in the batch fails.
pub fn execute_batch(conn: &Connection, sql: &str) -> Result<(), HelperError> {
    conn.execute_batch(sql)?;
    Ok(())
}
