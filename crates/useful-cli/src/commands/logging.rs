//! `useful logging` - toggle the global log level

use useful_utils::set_debug;

use crate::error::Result;

/// Toggle debug logging and emit a confirmation at INFO.
pub fn run_logging(debug: bool, message: Option<String>) -> Result<()> {
    set_debug(debug);
    match message {
        Some(text) => tracing::info!("{}", text),
        None => tracing::info!("Logging configured successfully"),
    }
    Ok(())
}
