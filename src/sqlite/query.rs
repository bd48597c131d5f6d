use std::sync::Arc;

use rusqlite::Statement;
use rusqlite::types::Value;

use crate::error::HelperError;
use crate::results::ResultSet;
use crate::types::SqlValue;

/// Extract a helper value from a `SQLite` row column.
///
/// # Errors
///
/// Returns `HelperError::SqliteError` if the column cannot be read.
pub fn extract_value(row: &rusqlite::Row, idx: usize) -> Result<SqlValue, HelperError> {
    let value: Value = row.get(idx)?;
    match value {
        Value::Null => Ok(SqlValue::Null),
        Value::Integer(i) => Ok(SqlValue::Int(i)),
        Value::Real(f) => Ok(SqlValue::Float(f)),
        Value::Text(s) => Ok(SqlValue::Text(s)),
        Value::Blob(b) => Ok(SqlValue::Blob(b)),
    }
}

/// Run an already-bound statement and collect every row.
///
/// # Errors
///
/// Returns `HelperError::SqliteError` if stepping the statement or reading a
/// column fails.
pub fn build_result_set(stmt: &mut Statement) -> Result<ResultSet, HelperError> {
    let column_names: Vec<String> = stmt
        .column_names()
        .iter()
        .map(std::string::ToString::to_string)
        .collect();
    let column_count = column_names.len();

    let mut result_set = ResultSet::with_capacity(10);
    result_set.set_column_names(Arc::new(column_names));

    let mut rows = stmt.raw_query();
    while let Some(row) = rows.next()? {
        let mut values = Vec::with_capacity(column_count);
        for idx in 0..column_count {
            values.push(extract_value(row, idx)?);
        }
        result_set.add_row_values(values);
    }

    Ok(result_set)
}
