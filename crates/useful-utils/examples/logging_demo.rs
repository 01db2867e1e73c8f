//! Walkthrough of the logging toggle.

use tracing::{debug, error, info, warn};
use useful_utils::set_debug;

fn process_data(data: &str) -> String {
    debug!("Processing data: {}", data);
    if data.len() > 10 {
        warn!("Data is quite large");
    }
    let result = data.to_uppercase();
    info!("Processed result: {}", result);
    result
}

fn main() {
    println!("=== Logging Utility Example ===\n");

    println!("1. Enabling debug mode:");
    set_debug(true);
    debug!("This is a debug message");
    info!("This is an info message");
    warn!("This is a warning message");
    error!("This is an error message");
    println!("\n{}\n", "=".repeat(50));

    println!("2. Disabling debug mode:");
    set_debug(false);
    debug!("This debug message will NOT be shown");
    info!("This info message WILL be shown");
    println!("\n{}\n", "=".repeat(50));

    println!("3. Practical usage in a function:");
    set_debug(true);
    process_data("hello world");
    process_data("this is a very long string that will trigger a warning");
}
