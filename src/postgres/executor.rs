use std::borrow::Cow;

use tokio_postgres::Client;

use crate::error::HelperError;
use crate::params::{ParamMap, TypeOverrides, resolve_bind};
use crate::results::ResultSet;
use crate::translation::number_placeholders;

use super::params::Params;
use super::query::build_result_set;

/// Rewrite named placeholders to `$N` and lay out the bound values in
/// placeholder order. Map entries with no placeholder in the text are
/// skipped; placeholders with no map entry stay as-is for the driver to
/// reject at prepare time.
fn prepare_named<'a>(
    sql: &'a str,
    params: &ParamMap,
    overrides: &TypeOverrides,
) -> (Cow<'a, str>, Vec<crate::types::SqlValue>) {
    let (rewritten, order) = number_placeholders(sql, params);
    let values = order
        .iter()
        .filter_map(|name| {
            params.get(name).map(|value| {
                let (tag, bound) = resolve_bind(name, value, overrides);
                tracing::debug!(parameter = name.as_str(), bind_type = ?tag, "binding postgres parameter");
                bound
            })
        })
        .collect();
    (rewritten, values)
}

/// Execute a SELECT (or anything that returns rows) and collect the result.
///
/// # Errors
///
/// Returns `HelperError::PostgresError` if preparation or execution fails.
pub async fn execute_select(
    client: &Client,
    sql: &str,
    params: &ParamMap,
    overrides: &TypeOverrides,
) -> Result<ResultSet, HelperError> {
    let (sql, values) = prepare_named(sql, params, overrides);
    let stmt = client.prepare(sql.as_ref()).await?;
    let bound = Params::convert(&values);
    let rows = client.query(&stmt, bound.as_refs()).await?;
    build_result_set(&stmt, &rows)
}

/// Execute a DML statement and return the number of rows affected.
///
/// # Errors
///
/// Returns `HelperError::PostgresError` if preparation or execution fails.
pub async fn execute_dml(
    client: &Client,
    sql: &str,
    params: &ParamMap,
    overrides: &TypeOverrides,
) -> Result<u64, HelperError> {
    let (sql, values) = prepare_named(sql, params, overrides);
    let stmt = client.prepare(sql.as_ref()).await?;
    let bound = Params::convert(&values);
    let affected = client.execute(&stmt, bound.as_refs()).await?;
    Ok(affected)
}

/// Execute a batch of SQL statements with no parameters.
///
/// # Errors
///
/// Returns `HelperError::PostgresError` if any statement in the batch fails.
pub async fn execute_batch(client: &Client, sql: &str) -> Result<(), HelperError> {
    client.batch_execute(sql).await?;
    Ok(())
}
