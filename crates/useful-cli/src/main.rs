//! Useful Utils CLI
//!
//! Thin command-line front end over the useful-utils library: the help
//! system and the logging toggle. Every input combination exits 0; the
//! only failure paths are I/O.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Help { query }) => commands::run_help(query),
        Some(Commands::Logging { debug, message }) => commands::run_logging(debug, message),
        None => {
            // No command provided - show help hint
            println!("{} Useful Utils CLI", "useful".green().bold());
            println!();
            println!("Run {} for available commands.", "useful --help".cyan());
            Ok(())
        }
    }
}
