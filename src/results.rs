use std::collections::HashMap;
use std::sync::Arc;

use crate::types::SqlValue;

/// A single row from an executed statement.
///
/// Column names are shared across all rows of a result set; a name→index
/// cache is built once per result set for fast lookups.
#[derive(Debug, Clone)]
pub struct SqlRow {
    column_names: Arc<Vec<String>>,
    values: Vec<SqlValue>,
    column_index: Arc<HashMap<String, usize>>,
}

impl SqlRow {
    /// Get a value by column name.
    #[must_use]
    pub fn get(&self, column_name: &str) -> Option<&SqlValue> {
        self.column_index
            .get(column_name)
            .and_then(|&idx| self.values.get(idx))
    }

    /// Get a value by column position.
    #[must_use]
    pub fn get_by_index(&self, index: usize) -> Option<&SqlValue> {
        self.values.get(index)
    }

    #[must_use]
    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    /// The row's values in column order, consuming the row.
    #[must_use]
    pub fn into_values(self) -> Vec<SqlValue> {
        self.values
    }
}

/// An eagerly collected result set from one executed statement.
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    /// The rows returned by the statement
    pub rows: Vec<SqlRow>,
    /// Rows affected; for SELECT statements this equals the row count
    pub rows_affected: usize,
    column_names: Option<Arc<Vec<String>>>,
    column_index: Option<Arc<HashMap<String, usize>>>,
}

impl ResultSet {
    /// Create a result set with preallocated row capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> ResultSet {
        ResultSet {
            rows: Vec::with_capacity(capacity),
            rows_affected: 0,
            column_names: None,
            column_index: None,
        }
    }

    /// Set the column names shared by every row, building the lookup cache
    /// once.
    pub fn set_column_names(&mut self, column_names: Arc<Vec<String>>) {
        let index = column_names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect::<HashMap<_, _>>();
        self.column_index = Some(Arc::new(index));
        self.column_names = Some(column_names);
    }

    #[must_use]
    pub fn column_names(&self) -> Option<&Arc<Vec<String>>> {
        self.column_names.as_ref()
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.column_names.as_ref().map_or(0, |names| names.len())
    }

    /// Append a row; `set_column_names` must have been called first.
    pub fn add_row_values(&mut self, values: Vec<SqlValue>) {
        if let (Some(column_names), Some(column_index)) = (&self.column_names, &self.column_index) {
            self.rows.push(SqlRow {
                column_names: column_names.clone(),
                values,
                column_index: column_index.clone(),
            });
            self.rows_affected += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_share_column_metadata() {
        let mut rs = ResultSet::with_capacity(2);
        rs.set_column_names(Arc::new(vec!["id".to_string(), "name".to_string()]));
        rs.add_row_values(vec![SqlValue::Int(1), SqlValue::Text("a".into())]);
        rs.add_row_values(vec![SqlValue::Int(2), SqlValue::Text("b".into())]);

        assert_eq!(rs.column_count(), 2);
        assert_eq!(rs.rows_affected, 2);
        assert_eq!(rs.rows[0].get("id"), Some(&SqlValue::Int(1)));
        assert_eq!(rs.rows[1].get("name"), Some(&SqlValue::Text("b".into())));
        assert_eq!(rs.rows[1].get("missing"), None);
        assert_eq!(rs.rows[0].get_by_index(1), Some(&SqlValue::Text("a".into())));
    }
}
