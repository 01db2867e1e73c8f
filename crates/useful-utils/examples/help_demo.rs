//! Walkthrough of the help system.

use useful_utils::{help, list_functions};

fn main() {
    println!("=== Help System Example ===\n");

    println!("1. Listing all available functions:");
    println!("{}", help(Some("list"), &[]));
    println!("\n{}\n", "=".repeat(60));

    println!("2. Getting detailed information about 'set_debug':");
    println!("{}", help(Some("detail"), &["set_debug"]));
    println!("\n{}\n", "=".repeat(60));

    println!("3. Searching for functions containing 'debug':");
    println!("{}", help(Some("search"), &["debug"]));
    println!("\n{}\n", "=".repeat(60));

    println!("4. Help system usage:");
    println!("{}", help(None, &[]));
    println!("\n{}\n", "=".repeat(60));

    println!("5. Using list_functions() directly:");
    println!("Available functions: {:?}", list_functions());
}
