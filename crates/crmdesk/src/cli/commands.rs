//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::customer::{CustomerUpdate, Field, NewCustomer};

/// Add command arguments.
#[derive(Debug, Args)]
pub struct AddCommand {
    /// Customer name (required)
    #[arg(short, long)]
    pub name: String,

    /// E-mail address (required)
    #[arg(short, long)]
    pub email: String,

    /// Phone number, digits only (required)
    #[arg(short, long)]
    pub phone: String,

    /// Postal address
    #[arg(short, long, default_value = "")]
    pub address: String,

    /// Company name
    #[arg(long, default_value = "")]
    pub company: String,
}

impl From<AddCommand> for NewCustomer {
    fn from(cmd: AddCommand) -> Self {
        NewCustomer::new(cmd.name, cmd.email, cmd.phone)
            .with_address(cmd.address)
            .with_company(cmd.company)
    }
}

/// List command arguments.
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Show command arguments.
#[derive(Debug, Args)]
pub struct ShowCommand {
    /// Row position (as shown by `list`)
    pub row: usize,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Edit command arguments.
///
/// Only the given fields are changed.
#[derive(Debug, Args)]
pub struct EditCommand {
    /// Row position (as shown by `list`)
    pub row: usize,

    /// New customer name
    #[arg(short, long)]
    pub name: Option<String>,

    /// New e-mail address
    #[arg(short, long)]
    pub email: Option<String>,

    /// New phone number
    #[arg(short, long)]
    pub phone: Option<String>,

    /// New postal address
    #[arg(short, long)]
    pub address: Option<String>,

    /// New company name
    #[arg(long)]
    pub company: Option<String>,
}

impl EditCommand {
    /// Split into the row position and the field changes.
    #[must_use]
    pub fn into_parts(self) -> (usize, CustomerUpdate) {
        let update = CustomerUpdate {
            name: self.name,
            email: self.email,
            phone: self.phone,
            address: self.address,
            company: self.company,
        };
        (self.row, update)
    }
}

/// Delete command arguments.
#[derive(Debug, Args)]
pub struct DeleteCommand {
    /// Row position (as shown by `list`)
    pub row: usize,
}

/// Search command arguments.
#[derive(Debug, Args)]
pub struct SearchCommand {
    /// Text to look for (case-insensitive substring)
    pub query: String,

    /// Column to search in
    #[arg(short, long, value_enum, default_value = "name")]
    pub by: FieldArg,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Dashboard command arguments.
#[derive(Debug, Args)]
pub struct DashboardCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Searchable column argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FieldArg {
    /// Customer name
    Name,
    /// E-mail address
    Email,
    /// Phone number
    Phone,
    /// Postal address
    Address,
    /// Company name
    Company,
}

impl From<FieldArg> for Field {
    fn from(arg: FieldArg) -> Self {
        match arg {
            FieldArg::Name => Self::Name,
            FieldArg::Email => Self::Email,
            FieldArg::Phone => Self::Phone,
            FieldArg::Address => Self::Address,
            FieldArg::Company => Self::Company,
        }
    }
}

/// Output format for commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output
    Plain,
    /// Formatted table
    #[default]
    Table,
    /// JSON output
    Json,
}
