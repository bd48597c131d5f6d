//! Result cursors.
//!
//! A successful query yields a `Live` cursor over an eagerly collected
//! result set; a failed one yields `Empty`, which answers every cursor
//! method with zero/empty so callers never need a null check (the stored
//! error record on the helper says what went wrong).

use crate::error::ErrorInfo;
use crate::results::{ResultSet, SqlRow};
use crate::types::FetchShape;

/// A fetched row in one of the two fetch shapes.
#[derive(Debug, Clone)]
pub enum CursorRow {
    /// Column-name → value mapping
    Assoc(SqlRow),
    /// Values in column order
    Num(Vec<crate::types::SqlValue>),
}

impl CursorRow {
    /// Name lookup; `None` for rows fetched in `Num` shape.
    #[must_use]
    pub fn get(&self, column_name: &str) -> Option<&crate::types::SqlValue> {
        match self {
            CursorRow::Assoc(row) => row.get(column_name),
            CursorRow::Num(_) => None,
        }
    }

    /// Position lookup; works for both shapes.
    #[must_use]
    pub fn get_by_index(&self, index: usize) -> Option<&crate::types::SqlValue> {
        match self {
            CursorRow::Assoc(row) => row.get_by_index(index),
            CursorRow::Num(values) => values.get(index),
        }
    }
}

/// Result cursor: live statement results or the empty substitute.
#[derive(Debug)]
pub enum Cursor {
    /// Wraps an executed statement's collected rows.
    Live {
        results: ResultSet,
        shape: FetchShape,
        position: usize,
        error: ErrorInfo,
    },
    /// Substituted on failure; every method answers zero/empty.
    Empty,
}

impl Cursor {
    pub(crate) fn live(results: ResultSet, shape: FetchShape) -> Self {
        Cursor::Live {
            results,
            shape,
            position: 0,
            error: ErrorInfo::default(),
        }
    }

    /// Number of columns in the result set; `0` for the empty cursor.
    #[must_use]
    pub fn columns(&self) -> usize {
        match self {
            Cursor::Live { results, .. } => results.column_count(),
            Cursor::Empty => 0,
        }
    }

    /// Number of rows in the result set (rows affected for DML); `0` for the
    /// empty cursor.
    #[must_use]
    pub fn rows(&self) -> usize {
        match self {
            Cursor::Live { results, .. } => results.rows_affected,
            Cursor::Empty => 0,
        }
    }

    /// Fetch the next row, advancing the cursor. The shape override applies
    /// to this call only; `None` uses the cursor's default shape.
    pub fn fetch(&mut self, shape: Option<FetchShape>) -> Option<CursorRow> {
        match self {
            Cursor::Live {
                results,
                shape: default_shape,
                position,
                ..
            } => {
                let row = results.rows.get(*position)?.clone();
                *position += 1;
                Some(shape_row(row, shape.unwrap_or(*default_shape)))
            }
            Cursor::Empty => None,
        }
    }

    /// Fetch all remaining rows from the current position.
    pub fn fetch_all(&mut self, shape: Option<FetchShape>) -> Vec<CursorRow> {
        match self {
            Cursor::Live {
                results,
                shape: default_shape,
                position,
                ..
            } => {
                let effective = shape.unwrap_or(*default_shape);
                let remaining = results.rows[*position..]
                    .iter()
                    .map(|row| shape_row(row.clone(), effective))
                    .collect();
                *position = results.rows.len();
                remaining
            }
            Cursor::Empty => Vec::new(),
        }
    }

    /// Error information carried by the underlying statement; empty for both
    /// a successful statement and the empty cursor.
    #[must_use]
    pub fn error_info(&self) -> ErrorInfo {
        match self {
            Cursor::Live { error, .. } => error.clone(),
            Cursor::Empty => ErrorInfo::default(),
        }
    }
}

fn shape_row(row: SqlRow, shape: FetchShape) -> CursorRow {
    match shape {
        FetchShape::Assoc => CursorRow::Assoc(row),
        FetchShape::Num => CursorRow::Num(row.into_values()),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::types::SqlValue;

    fn sample() -> ResultSet {
        let mut rs = ResultSet::with_capacity(2);
        rs.set_column_names(Arc::new(vec!["id".to_string(), "name".to_string()]));
        rs.add_row_values(vec![SqlValue::Int(1), SqlValue::Text("a".into())]);
        rs.add_row_values(vec![SqlValue::Int(2), SqlValue::Text("b".into())]);
        rs
    }

    #[test]
    fn live_cursor_advances_and_drains() {
        let mut cursor = Cursor::live(sample(), FetchShape::Assoc);
        assert_eq!(cursor.columns(), 2);
        assert_eq!(cursor.rows(), 2);

        let first = cursor.fetch(None).unwrap();
        assert_eq!(first.get("id"), Some(&SqlValue::Int(1)));

        // Per-call override does not change the default shape
        let rest = cursor.fetch_all(Some(FetchShape::Num));
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0].get_by_index(0), Some(&SqlValue::Int(2)));
        assert_eq!(rest[0].get("id"), None);

        assert!(cursor.fetch(None).is_none());
        assert!(cursor.fetch_all(None).is_empty());
    }

    #[test]
    fn empty_cursor_answers_uniformly() {
        let mut cursor = Cursor::Empty;
        assert_eq!(cursor.columns(), 0);
        assert_eq!(cursor.rows(), 0);
        assert!(cursor.fetch(None).is_none());
        assert!(cursor.fetch_all(None).is_empty());
        assert!(cursor.error_info().is_empty());
    }
}
