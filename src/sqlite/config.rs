use rusqlite::Connection;

use crate::error::HelperError;
use crate::settings::ConnectionSettings;

/// Open a `SQLite` connection from parsed settings.
///
/// The descriptor's database component is the file path; the literal
/// `:memory:` opens an in-memory database.
///
/// # Errors
///
/// Returns `HelperError::SqliteError` if the database cannot be opened.
pub fn open(settings: &ConnectionSettings) -> Result<Connection, HelperError> {
    let connection = if settings.database == ":memory:" {
        Connection::open_in_memory()?
    } else {
        Connection::open(&settings.database)?
    };
    Ok(connection)
}
