//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};

/// Useful Utils - A collection of reusable code snippets and utilities
#[derive(Parser, Debug)]
#[command(name = "useful")]
#[command(author, version, about, long_about = None)]
#[command(disable_help_subcommand = true)] // "help" is our own subcommand
pub struct Cli {
    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show help information about the library's functions
    ///
    /// Examples:
    ///   useful help                  # Usage overview
    ///   useful help list             # All registered functions
    ///   useful help detail set_debug # One function in detail
    ///   useful help search timing    # Substring search
    Help {
        #[command(subcommand)]
        query: Option<HelpQuery>,
    },

    /// Configure logging
    Logging {
        /// Enable debug mode
        #[arg(long)]
        debug: bool,

        /// Log message to display
        #[arg(short, long)]
        message: Option<String>,
    },
}

/// Help subqueries
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum HelpQuery {
    /// List all registered functions grouped by category
    List,

    /// Show detailed information about one function
    Detail {
        /// Name of the function; omitted prints a usage hint
        function_name: Option<String>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Search functions by name, description, or category
    Search {
        /// Case-insensitive substring to look for; omitted prints a usage hint
        query: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_help_detail() {
        let cli = Cli::parse_from(["useful", "help", "detail", "set_debug"]);
        assert_eq!(
            cli.command,
            Some(Commands::Help {
                query: Some(HelpQuery::Detail {
                    function_name: Some("set_debug".into()),
                    json: false,
                })
            })
        );
    }

    #[test]
    fn parses_logging_flags() {
        let cli = Cli::parse_from(["useful", "logging", "--debug", "-m", "hi"]);
        assert_eq!(
            cli.command,
            Some(Commands::Logging {
                debug: true,
                message: Some("hi".into()),
            })
        );
    }

    #[test]
    fn no_subcommand_parses() {
        let cli = Cli::parse_from(["useful"]);
        assert!(cli.command.is_none());
    }
}
