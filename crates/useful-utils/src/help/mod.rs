//! Interactive help system over the library's own functions.
//!
//! A hand-registered name → descriptor mapping answers list, detail, and
//! search queries as formatted text. The global registry is built once on
//! first use and never mutated afterwards; every query path returns a
//! string, never an error.

mod builtins;
mod store;
mod types;

pub use builtins::{BUILTIN_COUNT, builtin_descriptors};
pub use store::HelpRegistry;
pub use types::{FunctionCategory, FunctionDescriptor, FunctionInfo};

use std::sync::OnceLock;

/// Global registry, built with the builtins on first access.
static REGISTRY: OnceLock<HelpRegistry> = OnceLock::new();

fn global() -> &'static HelpRegistry {
    REGISTRY.get_or_init(HelpRegistry::with_builtins)
}

const USAGE: &str = "Help System Usage:

help('list')                    - Show all available functions
help('detail', 'function_name') - Show detailed information about a function
help('search', 'query')         - Search functions by name or description

Examples:
    help('list')
    help('detail', 'set_debug')
    help('search', 'logging')";

/// Answer a help query against the global registry.
///
/// `command` is one of `list`, `detail`, or `search`; `None` returns the
/// usage block. `args` carries the function name for `detail` and the
/// query for `search`. Every input combination returns a string.
pub fn help(command: Option<&str>, args: &[&str]) -> String {
    match command {
        None => USAGE.to_string(),
        Some("list") => global().render_list(),
        Some("detail") => match args.first() {
            Some(name) => global().render_detail(name),
            None => "Usage: help('detail', 'function_name')".to_string(),
        },
        Some("search") => match args.first() {
            Some(query) => global().render_search(query),
            None => "Usage: help('search', 'query')".to_string(),
        },
        Some(other) => format!(
            "Unknown command '{}'. Use help() to see available commands.",
            other
        ),
    }
}

/// All registered function names, sorted ascending.
pub fn list_functions() -> Vec<String> {
    global().list().into_iter().map(String::from).collect()
}

/// Detail record for a registered function, if present.
pub fn get_function_info(name: &str) -> Option<FunctionInfo> {
    global().info(name)
}
