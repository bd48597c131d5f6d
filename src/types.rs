use chrono::NaiveDateTime;
use clap::ValueEnum;
use serde_json::Value as JsonValue;

/// Values that can be bound as statement parameters or read back from a
/// result row.
///
/// One enum is shared across backends so the synthesis and binding layers do
/// not need to branch on driver types:
/// ```rust
/// use sql_shorthand::prelude::*;
///
/// let mut params = ParamMap::new();
/// params.insert("id", SqlValue::Int(1));
/// params.insert("name", SqlValue::Text("alice".into()));
/// # let _ = params;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    /// Integer value (64-bit)
    Int(i64),
    /// Floating point value (64-bit)
    Float(f64),
    /// Text/string value
    Text(String),
    /// Boolean value
    Bool(bool),
    /// Timestamp value
    Timestamp(NaiveDateTime),
    /// NULL value
    Null,
    /// JSON value
    Json(JsonValue),
    /// Binary data
    Blob(Vec<u8>),
}

impl SqlValue {
    /// Check if this value is NULL
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub fn as_int(&self) -> Option<&i64> {
        if let SqlValue::Int(value) = self {
            Some(value)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        if let SqlValue::Text(value) = self {
            Some(value)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<&bool> {
        if let SqlValue::Bool(value) = self {
            return Some(value);
        } else if let Some(i) = self.as_int() {
            if *i == 1 {
                return Some(&true);
            } else if *i == 0 {
                return Some(&false);
            }
        }
        None
    }

    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        if let SqlValue::Float(value) = self {
            Some(*value)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_blob(&self) -> Option<&[u8]> {
        if let SqlValue::Blob(bytes) = self {
            Some(bytes)
        } else {
            None
        }
    }
}

/// Declared bind-parameter type tag.
///
/// Mirrors the four-way scalar domain drivers care about when a value is
/// bound under a named placeholder. When the caller supplies no explicit tag,
/// [`BindType::infer`] picks one from the value itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindType {
    /// SQL NULL
    Null,
    /// Boolean
    Bool,
    /// Integer
    Int,
    /// Character data; the default/fallback tag
    Str,
}

impl BindType {
    /// Infer a bind tag from a value. Total over the value domain; anything
    /// that is not null, boolean, or integer falls back to `Str`.
    #[must_use]
    pub fn infer(value: &SqlValue) -> Self {
        match value {
            SqlValue::Null => BindType::Null,
            SqlValue::Bool(_) => BindType::Bool,
            SqlValue::Int(_) => BindType::Int,
            _ => BindType::Str,
        }
    }

    /// Materialize a value under this tag, cast-style.
    ///
    /// Only explicit overrides go through here; inferred tags let the native
    /// variant flow to the driver unchanged. NULL inputs stay NULL under
    /// every tag.
    #[must_use]
    pub fn coerce(self, value: &SqlValue) -> SqlValue {
        if value.is_null() {
            return SqlValue::Null;
        }
        match self {
            BindType::Null => SqlValue::Null,
            BindType::Bool => SqlValue::Bool(truthy(value)),
            BindType::Int => SqlValue::Int(to_int(value)),
            BindType::Str => to_str(value),
        }
    }
}

fn truthy(value: &SqlValue) -> bool {
    match value {
        SqlValue::Bool(b) => *b,
        SqlValue::Int(i) => *i != 0,
        SqlValue::Float(f) => *f != 0.0,
        SqlValue::Text(s) => !s.is_empty() && s != "0",
        SqlValue::Null => false,
        SqlValue::Timestamp(_) | SqlValue::Json(_) => true,
        SqlValue::Blob(b) => !b.is_empty(),
    }
}

#[allow(clippy::cast_possible_truncation)]
fn to_int(value: &SqlValue) -> i64 {
    match value {
        SqlValue::Int(i) => *i,
        SqlValue::Bool(b) => i64::from(*b),
        SqlValue::Float(f) => *f as i64,
        SqlValue::Text(s) => s.trim().parse::<i64>().unwrap_or(0),
        _ => 0,
    }
}

fn to_str(value: &SqlValue) -> SqlValue {
    match value {
        SqlValue::Text(_) => value.clone(),
        SqlValue::Int(i) => SqlValue::Text(i.to_string()),
        SqlValue::Float(f) => SqlValue::Text(f.to_string()),
        SqlValue::Bool(b) => SqlValue::Text(if *b { "1".into() } else { "0".into() }),
        SqlValue::Timestamp(dt) => SqlValue::Text(dt.format("%F %T%.f").to_string()),
        SqlValue::Json(j) => SqlValue::Text(j.to_string()),
        // No lossy text rendering for binary data
        SqlValue::Blob(_) | SqlValue::Null => value.clone(),
    }
}

/// The database dialect behind a helper instance
#[derive(Debug, Clone, PartialEq, Eq, Hash, ValueEnum)]
pub enum DatabaseType {
    /// `PostgreSQL` database
    #[cfg(feature = "postgres")]
    Postgres,
    /// `SQLite` database
    #[cfg(feature = "sqlite")]
    Sqlite,
}

/// The structural form in which a fetched row is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchShape {
    /// Row as a column-name → value mapping (the default)
    #[default]
    Assoc,
    /// Row as a plain value sequence in column order
    Num,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infers_the_four_way_domain() {
        assert_eq!(BindType::infer(&SqlValue::Null), BindType::Null);
        assert_eq!(BindType::infer(&SqlValue::Bool(true)), BindType::Bool);
        assert_eq!(BindType::infer(&SqlValue::Bool(false)), BindType::Bool);
        assert_eq!(BindType::infer(&SqlValue::Int(-3)), BindType::Int);
        assert_eq!(BindType::infer(&SqlValue::Text("x".into())), BindType::Str);
        assert_eq!(BindType::infer(&SqlValue::Float(1.5)), BindType::Str);
        assert_eq!(BindType::infer(&SqlValue::Blob(vec![1])), BindType::Str);
    }

    #[test]
    fn coercion_materializes_overrides() {
        assert_eq!(
            BindType::Int.coerce(&SqlValue::Text("42".into())),
            SqlValue::Int(42)
        );
        assert_eq!(
            BindType::Int.coerce(&SqlValue::Text("not a number".into())),
            SqlValue::Int(0)
        );
        assert_eq!(
            BindType::Str.coerce(&SqlValue::Int(7)),
            SqlValue::Text("7".into())
        );
        assert_eq!(
            BindType::Bool.coerce(&SqlValue::Int(2)),
            SqlValue::Bool(true)
        );
        assert_eq!(BindType::Str.coerce(&SqlValue::Null), SqlValue::Null);
    }
}
