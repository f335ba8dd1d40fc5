//! Command implementations.

pub mod config;
pub mod run;
pub mod staleness;
pub mod urls;
pub mod verifiability;

pub use self::config::execute_config;
pub use self::run::{execute_run, run_task};
pub use self::staleness::execute_staleness;
pub use self::urls::execute_urls;
pub use self::verifiability::execute_verifiability;
