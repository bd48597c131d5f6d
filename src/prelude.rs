//! Convenient imports for common functionality.
//!
//! This module re-exports the most commonly used types and functions
//! to make it easier to get started with the library.

pub use crate::cursor::{Cursor, CursorRow};
pub use crate::error::{ErrorInfo, HelperError};
pub use crate::helper::{Attribute, ErrorMode, SqlHelper, StatementExecutor};
pub use crate::params::{ParamMap, TypeOverrides};
pub use crate::registry::{HelperRegistry, SharedHelper};
pub use crate::results::{ResultSet, SqlRow};
pub use crate::settings::ConnectionSettings;
pub use crate::statement::SynthesisPolicy;
pub use crate::types::{BindType, DatabaseType, FetchShape, SqlValue};
