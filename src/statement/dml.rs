use crate::error::HelperError;
use crate::params::ParamMap;

use super::SynthesisPolicy;

/// Key order from the map minus the exclude list. Excluded keys drop out of
/// the field list only; the full map is still handed to the binder so WHERE
/// text can reference them.
fn field_keys<'a>(params: &'a ParamMap, exclude: &[&str]) -> Vec<&'a str> {
    params.keys().filter(|key| !exclude.contains(key)).collect()
}

fn check_params(
    params: &ParamMap,
    policy: SynthesisPolicy,
    operation: &'static str,
) -> Result<(), HelperError> {
    if params.is_empty() && policy == SynthesisPolicy::FailFast {
        return Err(HelperError::MissingParameters { operation });
    }
    Ok(())
}

/// Synthesize `INSERT INTO <table> (fields) VALUES (:placeholders)`.
///
/// A non-empty `where_conditions` is appended even though WHERE after a
/// VALUES list is dialect-invalid; the caller asked for it, the driver gets
/// to reject it.
///
/// # Errors
///
/// `HelperError::MissingParameters` when the map is empty under
/// [`SynthesisPolicy::FailFast`].
pub fn insert_statement(
    table: &str,
    params: &ParamMap,
    where_conditions: &str,
    exclude: &[&str],
    policy: SynthesisPolicy,
) -> Result<String, HelperError> {
    check_params(params, policy, "INSERT")?;

    let keys = field_keys(params, exclude);
    let fields = keys.join(",");
    let values = keys
        .iter()
        .map(|key| format!(":{key}"))
        .collect::<Vec<_>>()
        .join(",");

    if where_conditions.is_empty() {
        Ok(format!("INSERT INTO {table} ({fields}) VALUES ({values})"))
    } else {
        Ok(format!(
            "INSERT INTO {table} ({fields}) VALUES ({values}) WHERE {where_conditions}"
        ))
    }
}

/// Synthesize `UPDATE <table> SET k = :k,...` with an optional WHERE clause.
///
/// # Errors
///
/// `HelperError::MissingParameters` when the map is empty under
/// [`SynthesisPolicy::FailFast`].
pub fn update_statement(
    table: &str,
    params: &ParamMap,
    where_conditions: &str,
    exclude: &[&str],
    policy: SynthesisPolicy,
) -> Result<String, HelperError> {
    check_params(params, policy, "UPDATE")?;

    let assignments = field_keys(params, exclude)
        .iter()
        .map(|key| format!("{key} = :{key}"))
        .collect::<Vec<_>>()
        .join(",");

    if where_conditions.is_empty() {
        Ok(format!("UPDATE {table} SET {assignments}"))
    } else {
        Ok(format!(
            "UPDATE {table} SET {assignments} WHERE {where_conditions}"
        ))
    }
}

/// Synthesize `DELETE FROM <table>` with an optional WHERE clause.
///
/// The map contributes no fields, but the empty-map check still applies: a
/// shorthand DELETE with no parameters is almost always a call-site bug
/// about to delete every row.
///
/// # Errors
///
/// `HelperError::MissingParameters` when the map is empty under
/// [`SynthesisPolicy::FailFast`].
pub fn delete_statement(
    table: &str,
    params: &ParamMap,
    where_conditions: &str,
    policy: SynthesisPolicy,
) -> Result<String, HelperError> {
    check_params(params, policy, "DELETE")?;

    if where_conditions.is_empty() {
        Ok(format!("DELETE FROM {table}"))
    } else {
        Ok(format!("DELETE FROM {table} WHERE {where_conditions}"))
    }
}
