//! Logging configuration for consistent output across projects.
//!
//! The process has a single log sink: a compact `fmt` layer writing to
//! stdout behind a reloadable level filter. [`set_debug`] installs the
//! sink on first use and swaps the filter on every call.

use std::sync::OnceLock;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{Registry, fmt, prelude::*, reload};

use crate::help::{FunctionCategory, FunctionDescriptor};

/// Registry entry describing [`set_debug`].
pub(crate) fn set_debug_descriptor() -> FunctionDescriptor {
    FunctionDescriptor::new(
        "set_debug",
        "logging",
        FunctionCategory::Logging,
        "Configure the global log sink with debug or info level",
    )
    .with_signature("(debug_mode: bool)")
    .with_docs(
        "When debug_mode is true the sink passes DEBUG and above; otherwise \
         INFO and above. The last call wins, and a confirmation line is \
         emitted at DEBUG severity.",
    )
    .with_location(file!(), line!())
}

/// Handle to the reloadable level filter, set on the first `set_debug` call.
static FILTER_HANDLE: OnceLock<reload::Handle<LevelFilter, Registry>> = OnceLock::new();

/// Configure the global log sink with debug or info level.
///
/// When `debug_mode` is true the sink passes DEBUG and above; otherwise
/// INFO and above. Calling this repeatedly has overwrite semantics: the
/// last call wins, and repeating the same flag leaves the sink unchanged.
/// A confirmation line is emitted at DEBUG severity, so it is only visible
/// when the new level is DEBUG.
///
/// The sink is process-wide mutable state. Concurrent calls from multiple
/// threads resolve to last-writer-wins with no corruption, but the winner
/// is unspecified; serialize calls externally if the ordering matters.
pub fn set_debug(debug_mode: bool) {
    let level = if debug_mode {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    let handle = FILTER_HANDLE.get_or_init(|| {
        let (filter, handle) = reload::Layer::new(level);
        let fmt_layer = fmt::layer().with_target(false).compact();
        // try_init: another subscriber may already be installed (tests,
        // host applications); the reload handle still works either way.
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .try_init();
        handle
    });
    let _ = handle.reload(level);

    if debug_mode {
        tracing::debug!("Debug mode ON");
    } else {
        tracing::debug!("Debug mode OFF");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn current_level() -> LevelFilter {
        FILTER_HANDLE
            .get()
            .expect("set_debug installs the handle")
            .clone_current()
            .expect("filter layer is alive")
    }

    // Single test: the filter is process-global, so interleaving parallel
    // test threads would race on it.
    #[test]
    fn toggles_and_overwrites() {
        set_debug(true);
        assert_eq!(current_level(), LevelFilter::DEBUG);

        set_debug(false);
        assert_eq!(current_level(), LevelFilter::INFO);

        // Repeating the same flag leaves the sink in the same state.
        set_debug(true);
        set_debug(true);
        assert_eq!(current_level(), LevelFilter::DEBUG);
    }
}
