use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HelperError {
    #[cfg(feature = "postgres")]
    #[error(transparent)]
    PostgresError(#[from] tokio_postgres::Error),

    #[cfg(feature = "sqlite")]
    #[error(transparent)]
    SqliteError(#[from] rusqlite::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Shorthand INSERT/UPDATE/DELETE synthesis was asked to run against an
    /// empty parameter map. A programming error at the call site, so it is
    /// raised rather than recorded in [`ErrorInfo`].
    #[error("Missing {operation} parameters! Shorthand statements need a non-empty parameter map.")]
    MissingParameters { operation: &'static str },
}

/// Last-operation driver error record.
///
/// Cleared at the start of every shorthand operation and overwritten when the
/// driver rejects a prepare or execute. `state` follows the SQLSTATE
/// convention where the driver provides one (`HY000` otherwise), `code` is
/// the driver-specific numeric code when available.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ErrorInfo {
    pub state: String,
    pub code: Option<i64>,
    pub message: String,
}

impl ErrorInfo {
    /// True when no error has been recorded since the last clear.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.is_empty() && self.code.is_none() && self.message.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.state.clear();
        self.code = None;
        self.message.clear();
    }

    /// Build an error record from a helper error, extracting driver detail
    /// where the backend exposes it.
    #[must_use]
    pub fn from_error(err: &HelperError) -> Self {
        match err {
            #[cfg(feature = "postgres")]
            HelperError::PostgresError(e) => {
                if let Some(db) = e.as_db_error() {
                    ErrorInfo {
                        state: db.code().code().to_string(),
                        code: None,
                        message: db.message().to_string(),
                    }
                } else {
                    ErrorInfo {
                        state: "HY000".to_string(),
                        code: None,
                        message: e.to_string(),
                    }
                }
            }
            #[cfg(feature = "sqlite")]
            HelperError::SqliteError(e) => match e {
                rusqlite::Error::SqliteFailure(ffi, msg) => ErrorInfo {
                    state: "HY000".to_string(),
                    code: Some(i64::from(ffi.extended_code)),
                    message: msg
                        .clone()
                        .unwrap_or_else(|| ffi.to_string()),
                },
                other => ErrorInfo {
                    state: "HY000".to_string(),
                    code: None,
                    message: other.to_string(),
                },
            },
            other => ErrorInfo {
                state: "HY000".to_string(),
                code: None,
                message: other.to_string(),
            },
        }
    }
}
