//! Reusable developer utilities.
//!
//! This crate bundles three small conveniences:
//!
//! 1. **Logging toggle** - [`set_debug`] switches the process-wide log sink
//!    between DEBUG and INFO filtering.
//!
//! 2. **Timing helpers** - [`log_time`] returns a scope guard that logs the
//!    elapsed wall-clock time when dropped; [`time_it`] wraps a single
//!    closure call in the same guard.
//!
//! 3. **Help system** - [`help`] answers list / detail / search queries over
//!    a registry of the crate's own functions, returning formatted text.

pub mod help;
pub mod logging;
pub mod timing;

pub use help::{FunctionCategory, FunctionDescriptor, FunctionInfo, HelpRegistry};
pub use help::{get_function_info, help, list_functions};
pub use logging::set_debug;
pub use timing::{TimeGuard, log_time, time_it};
