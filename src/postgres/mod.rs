// PostgreSQL backend:
// - config: connecting from parsed settings
// - params: ToSql bridging for helper values
// - query: result extraction and building
// - executor: named-placeholder rewrite, prepare, execute

pub mod config;
pub mod executor;
pub mod params;
pub mod query;

pub use config::connect;
pub use executor::{execute_batch, execute_dml, execute_select};
pub use params::Params;
pub use query::build_result_set;
