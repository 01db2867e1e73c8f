//! Command implementations

mod help;
mod logging;

pub use help::run_help;
pub use logging::run_logging;
