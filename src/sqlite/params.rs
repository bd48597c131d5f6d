use rusqlite::types::Value;

use crate::types::SqlValue;

/// Convert a helper value into a rusqlite `Value`.
///
/// Booleans become integers, timestamps and JSON become text; `SQLite` has
/// no native representation for either.
#[must_use]
pub fn to_sqlite_value(value: &SqlValue) -> Value {
    match value {
        SqlValue::Int(i) => Value::Integer(*i),
        SqlValue::Float(f) => Value::Real(*f),
        SqlValue::Text(s) => Value::Text(s.clone()),
        SqlValue::Bool(b) => Value::Integer(i64::from(*b)),
        SqlValue::Timestamp(dt) => Value::Text(dt.format("%F %T%.f").to_string()),
        SqlValue::Null => Value::Null,
        SqlValue::Json(j) => Value::Text(j.to_string()),
        SqlValue::Blob(bytes) => Value::Blob(bytes.clone()),
    }
}
