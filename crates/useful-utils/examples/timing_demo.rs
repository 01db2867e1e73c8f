//! Walkthrough of the timing helpers.

use std::thread;
use std::time::Duration;

use useful_utils::{log_time, set_debug, time_it};

fn simulate_work(millis: u64) {
    thread::sleep(Duration::from_millis(millis));
}

fn heavy_computation() -> &'static str {
    time_it("Heavy computation", || {
        simulate_work(500);
        "Computation completed"
    })
}

fn main() {
    set_debug(true);

    println!("=== Timing Utility Example ===\n");

    println!("1. Using a log_time scope:");
    {
        let _timer = log_time("Data processing");
        simulate_work(300);
        tracing::info!("Processing data...");
        simulate_work(200);
    }
    println!("\n{}\n", "=".repeat(60));

    println!("2. Using time_it around a call:");
    let result = heavy_computation();
    println!("Result: {}", result);
    println!("\n{}\n", "=".repeat(60));

    println!("3. Nested timing:");
    {
        let _outer = log_time("Outer operation");
        {
            let _inner = log_time("Inner operation 1");
            simulate_work(100);
        }
        {
            let _inner = log_time("Inner operation 2");
            simulate_work(200);
        }
    }
}
