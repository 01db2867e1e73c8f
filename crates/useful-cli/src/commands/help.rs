//! `useful help` - query the function help system

use useful_utils::{get_function_info, help};

use crate::cli::HelpQuery;
use crate::error::Result;

/// Run a help query and print the result.
pub fn run_help(query: Option<HelpQuery>) -> Result<()> {
    match query {
        None => println!("{}", help(None, &[])),
        Some(HelpQuery::List) => println!("{}", help(Some("list"), &[])),
        Some(HelpQuery::Detail {
            function_name: Some(name),
            json,
        }) => {
            if json {
                // Unknown names serialize as null, mirroring the Option.
                let info = get_function_info(&name);
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("{}", help(Some("detail"), &[&name]));
            }
        }
        Some(HelpQuery::Detail {
            function_name: None,
            ..
        }) => println!("{}", help(Some("detail"), &[])),
        Some(HelpQuery::Search { query: Some(query) }) => {
            println!("{}", help(Some("search"), &[&query]));
        }
        Some(HelpQuery::Search { query: None }) => {
            println!("{}", help(Some("search"), &[]));
        }
    }
    Ok(())
}
