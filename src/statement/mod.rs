//! Shorthand statement synthesis.
//!
//! Callers may pass either full SQL text or a bare table name; a one-token
//! heuristic decides which. Synthesis is plain string concatenation over the
//! parameter map's key order, kept deliberately simple and isolated here so
//! a safer builder could replace it without touching the executor.

mod dml;
mod select;

pub use dml::{delete_statement, insert_statement, update_statement};
pub use select::select_statement;

/// What shorthand synthesis does when the parameter map is empty.
///
/// Either a hard missing-parameters failure or proceeding with an empty
/// field list; `FailFast` is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SynthesisPolicy {
    /// Raise [`crate::HelperError::MissingParameters`] (the default).
    #[default]
    FailFast,
    /// Proceed with an empty field list, yielding malformed SQL the driver
    /// will reject at prepare time.
    Permissive,
}

/// Classify a statement request: more than one whitespace-delimited token
/// means literal SQL, exactly one means a table name to synthesize around.
///
/// A heuristic, not a parser: quoted or schema-qualified identifiers that
/// contain whitespace are misclassified as literal SQL.
#[must_use]
pub fn is_sql_statement(request: &str) -> bool {
    request.split_whitespace().count() != 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_token_is_a_table_name() {
        assert!(!is_sql_statement("users"));
        assert!(is_sql_statement("SELECT * FROM users"));
        assert!(is_sql_statement("users u"));
        // Known limitation: whitespace inside a quoted identifier
        assert!(is_sql_statement("\"my table\""));
    }
}
