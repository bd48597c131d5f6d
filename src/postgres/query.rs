use std::sync::Arc;

use chrono::NaiveDateTime;
use serde_json::Value as JsonValue;
use tokio_postgres::{Row, Statement};

use crate::error::HelperError;
use crate::results::ResultSet;
use crate::types::SqlValue;

/// Extract a helper value from a Postgres row column, mapping the common
/// column types onto the shared value enum. Unrecognized types are read as
/// text.
///
/// # Errors
///
/// Returns `HelperError::PostgresError` if the column cannot be retrieved.
pub fn extract_value(row: &Row, idx: usize) -> Result<SqlValue, HelperError> {
    let type_name = row.columns()[idx].type_().name();
    let value = match type_name {
        "int2" => {
            let val: Option<i16> = row.try_get(idx)?;
            val.map_or(SqlValue::Null, |v| SqlValue::Int(i64::from(v)))
        }
        "int4" => {
            let val: Option<i32> = row.try_get(idx)?;
            val.map_or(SqlValue::Null, |v| SqlValue::Int(i64::from(v)))
        }
        "int8" => {
            let val: Option<i64> = row.try_get(idx)?;
            val.map_or(SqlValue::Null, SqlValue::Int)
        }
        "float4" | "float8" => {
            let val: Option<f64> = row.try_get(idx)?;
            val.map_or(SqlValue::Null, SqlValue::Float)
        }
        "bool" => {
            let val: Option<bool> = row.try_get(idx)?;
            val.map_or(SqlValue::Null, SqlValue::Bool)
        }
        "timestamp" | "timestamptz" => {
            let val: Option<NaiveDateTime> = row.try_get(idx)?;
            val.map_or(SqlValue::Null, SqlValue::Timestamp)
        }
        "json" | "jsonb" => {
            let val: Option<JsonValue> = row.try_get(idx)?;
            val.map_or(SqlValue::Null, SqlValue::Json)
        }
        "bytea" => {
            let val: Option<Vec<u8>> = row.try_get(idx)?;
            val.map_or(SqlValue::Null, SqlValue::Blob)
        }
        _ => {
            let val: Option<String> = row.try_get(idx)?;
            val.map_or(SqlValue::Null, SqlValue::Text)
        }
    };
    Ok(value)
}

/// Collect executed rows into a result set. Column metadata comes from the
/// prepared statement so a zero-row result still reports its columns.
///
/// # Errors
///
/// Returns `HelperError::PostgresError` if a column cannot be read.
pub fn build_result_set(stmt: &Statement, rows: &[Row]) -> Result<ResultSet, HelperError> {
    let column_names: Vec<String> = stmt
        .columns()
        .iter()
        .map(|col| col.name().to_string())
        .collect();
    let column_count = column_names.len();

    let mut result_set = ResultSet::with_capacity(rows.len());
    result_set.set_column_names(Arc::new(column_names));

    for row in rows {
        let mut values = Vec::with_capacity(column_count);
        for idx in 0..column_count {
            values.push(extract_value(row, idx)?);
        }
        result_set.add_row_values(values);
    }

    Ok(result_set)
}
