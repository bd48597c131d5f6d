//! Shorthand SQL helper over `tokio-postgres` and `rusqlite`.
//!
//! The crate is a thin convenience layer on top of the database drivers: it
//! synthesizes simple SELECT/INSERT/UPDATE/DELETE text from a table name and
//! an ordered parameter map, binds named `:param` placeholders with inferred
//! or overridden types, and wraps results in a uniform cursor so callers
//! never null-check a failed query. The drivers do everything else; there is
//! no pooling, no transactions, and no SQL parsing here.
//!
//! ```rust,no_run
//! use sql_shorthand::prelude::*;
//!
//! # async fn demo() -> Result<(), HelperError> {
//! let registry = HelperRegistry::new();
//! let db = registry.get("sqlite:///tmp/app.db").await?;
//! let mut db = db.lock().await;
//!
//! let mut params = ParamMap::new();
//! params.insert("id", SqlValue::Int(7));
//! params.insert("name", SqlValue::Text("alice".into()));
//!
//! // Bare table name: synthesizes INSERT INTO users (id,name) VALUES (:id,:name)
//! let affected = db
//!     .insert("users", &params, &TypeOverrides::new(), "", &[])
//!     .await?;
//! if affected < 0 {
//!     eprintln!("insert failed: {:?}", db.error_info());
//! }
//!
//! let mut cursor = db
//!     .select("users", &params, &TypeOverrides::new(), "id = :id")
//!     .await?;
//! while let Some(row) = cursor.fetch(None) {
//!     println!("{:?}", row.get("name"));
//! }
//! # Ok(())
//! # }
//! ```

pub mod cursor;
pub mod error;
pub mod helper;
pub mod params;
pub mod registry;
pub mod results;
pub mod settings;
pub mod statement;
pub mod translation;
pub mod types;

pub mod prelude;

#[cfg(feature = "postgres")]
pub mod postgres;
#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use cursor::{Cursor, CursorRow};
pub use error::{ErrorInfo, HelperError};
pub use helper::{Attribute, DriverConnection, ErrorMode, SqlHelper, StatementExecutor};
pub use params::{ParamMap, TypeOverrides};
pub use registry::{HelperRegistry, SharedHelper};
pub use results::{ResultSet, SqlRow};
pub use settings::ConnectionSettings;
pub use statement::SynthesisPolicy;
pub use types::{BindType, DatabaseType, FetchShape, SqlValue};
