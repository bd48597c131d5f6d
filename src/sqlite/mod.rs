// SQLite backend, split the same way as the postgres module:
// - config: opening a connection from parsed settings
// - params: value conversion between helper and rusqlite types
// - query: result extraction and building
// - executor: statement preparation, named binding, execution

pub mod config;
pub mod executor;
pub mod params;
pub mod query;

pub use config::open;
pub use executor::{execute_batch, execute_dml, execute_select};
pub use params::to_sqlite_value;
pub use query::build_result_set;
