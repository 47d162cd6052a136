//! Command-line interface for pkgsearch-console.
//!
//! Argument parsing only; the command runners live in `main.rs`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// pkgsearch-console - terminal console for the Winget Package Search API
#[derive(Parser)]
#[command(name = "pkgsearch-console")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log level (error, warn, info, debug, trace); overrides RUST_LOG
    #[arg(long, value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check the health endpoint and show the full response
    Status {
        /// API key for the X-API-Key header (falls back to PKGSEARCH_API_KEY)
        #[arg(long, value_name = "KEY")]
        api_key: Option<String>,

        /// Render with 2-space indentation and tight colons
        #[arg(long)]
        compact: bool,

        /// Copy the report JSON to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Pretty-print a JSON document from a file or stdin
    Render {
        /// Input file (stdin when omitted)
        file: Option<PathBuf>,

        /// Render with 2-space indentation and tight colons
        #[arg(long)]
        compact: bool,

        /// Starting nesting depth for indentation
        #[arg(long, value_name = "N", default_value_t = 0)]
        level: usize,

        /// Copy the canonical JSON text to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Print the API endpoint documentation
    Docs {
        /// Show a single endpoint (ping, search, packagename,
        /// packageidentifier, publisher)
        #[arg(long, value_name = "ID")]
        endpoint: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_status_flags() {
        let cli = Cli::parse_from(["pkgsearch-console", "status", "--compact", "--copy"]);
        match cli.command {
            Commands::Status { compact, copy, api_key } => {
                assert!(compact);
                assert!(copy);
                assert!(api_key.is_none());
            }
            _ => panic!("expected status subcommand"),
        }
    }

    #[test]
    fn test_parse_render_with_level() {
        let cli = Cli::parse_from(["pkgsearch-console", "render", "data.json", "--level", "2"]);
        match cli.command {
            Commands::Render { file, level, compact, copy } => {
                assert_eq!(file.unwrap().to_str(), Some("data.json"));
                assert_eq!(level, 2);
                assert!(!compact);
                assert!(!copy);
            }
            _ => panic!("expected render subcommand"),
        }
    }

    #[test]
    fn test_global_log_level_flag() {
        let cli = Cli::parse_from(["pkgsearch-console", "docs", "--log-level", "debug"]);
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
    }
}
