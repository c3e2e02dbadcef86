//! Command-line interface for crmdesk.
//!
//! This module provides the CLI structure and output rendering for the
//! `crmdesk` binary.

mod commands;
pub mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    AddCommand, ConfigCommand, DashboardCommand, DeleteCommand, EditCommand, FieldArg,
    ListCommand, OutputFormat, SearchCommand, ShowCommand,
};

/// crmdesk - Keep track of your customers
///
/// Customer records are kept in a single CSV file that is rewritten after
/// every change. Rows are addressed by their position as shown by `list`.
#[derive(Debug, Parser)]
#[command(name = "crmdesk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Customer file to use instead of the configured one
    #[arg(short, long, global = true, value_name = "CSV")]
    pub data: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a new customer
    Add(AddCommand),

    /// List all customers
    List(ListCommand),

    /// Show a single customer
    Show(ShowCommand),

    /// Change fields of an existing customer
    Edit(EditCommand),

    /// Delete a customer
    Delete(DeleteCommand),

    /// Search customers by a column
    Search(SearchCommand),

    /// Show customer metrics
    Dashboard(DashboardCommand),

    /// View or check configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_cli_name() {
        let cli = Cli::command();
        assert_eq!(cli.get_name(), "crmdesk");
    }

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_flags() {
        use crate::logging::Verbosity;

        assert_eq!(parse(&["crmdesk", "-q", "list"]).verbosity(), Verbosity::Quiet);
        assert_eq!(parse(&["crmdesk", "list"]).verbosity(), Verbosity::Normal);
        assert_eq!(parse(&["crmdesk", "-v", "list"]).verbosity(), Verbosity::Verbose);
        assert_eq!(parse(&["crmdesk", "-vv", "list"]).verbosity(), Verbosity::Trace);
    }

    #[test]
    fn test_parse_add() {
        let cli = parse(&[
            "crmdesk", "add", "-n", "Alice", "-e", "a@x.com", "-p", "555", "--company", "Acme",
        ]);
        let Command::Add(cmd) = cli.command else {
            panic!("expected add command");
        };
        assert_eq!(cmd.name, "Alice");
        assert_eq!(cmd.company, "Acme");
        assert_eq!(cmd.address, "");
    }

    #[test]
    fn test_parse_add_requires_name() {
        let result = Cli::try_parse_from(["crmdesk", "add", "-e", "a@x.com", "-p", "555"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_edit() {
        let cli = parse(&["crmdesk", "edit", "2", "--phone", "123"]);
        let Command::Edit(cmd) = cli.command else {
            panic!("expected edit command");
        };
        assert_eq!(cmd.row, 2);
        assert_eq!(cmd.phone.as_deref(), Some("123"));
        assert!(cmd.name.is_none());
    }

    #[test]
    fn test_parse_delete_rejects_negative_row() {
        assert!(Cli::try_parse_from(["crmdesk", "delete", "-1"]).is_err());
    }

    #[test]
    fn test_parse_search() {
        let cli = parse(&["crmdesk", "search", "acme", "--by", "company", "-f", "json"]);
        let Command::Search(cmd) = cli.command else {
            panic!("expected search command");
        };
        assert_eq!(cmd.query, "acme");
        assert_eq!(cmd.by, FieldArg::Company);
        assert_eq!(cmd.format, OutputFormat::Json);
    }

    #[test]
    fn test_parse_global_paths() {
        let cli = parse(&[
            "crmdesk",
            "dashboard",
            "-c",
            "/custom/config.toml",
            "-d",
            "/data/customers.csv",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
        assert_eq!(cli.data, Some(PathBuf::from("/data/customers.csv")));
        assert!(matches!(cli.command, Command::Dashboard(_)));
    }

    #[test]
    fn test_parse_config_path() {
        let cli = parse(&["crmdesk", "config", "path"]);
        assert!(matches!(cli.command, Command::Config(ConfigCommand::Path)));
    }
}
