//! `crmdesk` - CLI for the customer store
//!
//! This binary is the front end to the customer file: it collects field
//! values, hands them to the store and prints the refreshed view.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use anyhow::Context;
use clap::Parser;

use crmdesk::cli::{render, Cli, Command, ConfigCommand, OutputFormat};
use crmdesk::{init_logging, Config, CustomerStore, Field};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration, letting --data override the customer file
    let mut config = Config::load_from(cli.config.clone()).context("loading configuration")?;
    if let Some(data) = cli.data.clone() {
        config = config.with_customer_file(data);
    }

    if let Command::Config(config_cmd) = cli.command {
        return handle_config(&config, config_cmd);
    }

    let mut store = open_store(&config)?;

    let command = match mutate(&mut store, cli.command)? {
        Mutation::Done(report) => {
            println!("{report}");
            return Ok(());
        }
        Mutation::NotMutating(command) => command,
    };

    match command {
        Command::List(cmd) => {
            let rows: Vec<_> = store.customers().iter().enumerate().collect();
            print_rows(&rows, cmd.format)?;
        }
        Command::Show(cmd) => {
            let customer = store
                .get(cmd.row)
                .ok_or_else(|| crmdesk::Error::row_out_of_range(cmd.row, store.len()))?;
            println!("{}", render::detail(cmd.row, customer, cmd.json)?);
        }
        Command::Search(cmd) => {
            let rows = store.search(Field::from(cmd.by), &cmd.query);
            print_rows(&rows, cmd.format)?;
        }
        Command::Dashboard(cmd) => {
            println!("{}", render::dashboard(&store.metrics(), cmd.json)?);
        }
        Command::Add(_) | Command::Edit(_) | Command::Delete(_) | Command::Config(_) => {
            unreachable!("mutations and config commands are handled earlier")
        }
    }
    Ok(())
}

/// Outcome of [`mutate`].
#[derive(Debug)]
enum Mutation {
    /// The command changed the table; holds the text to print.
    Done(String),
    /// The command is read-only and is handed back.
    NotMutating(Command),
}

/// Run `add`, `edit` or `delete` against the store.
///
/// Every report that follows a change ends with the refreshed dashboard.
fn mutate(store: &mut CustomerStore, command: Command) -> anyhow::Result<Mutation> {
    let summary = match command {
        Command::Add(cmd) => {
            let added = store.add(cmd.into())?;
            format!("Added customer #{} ({})", added.id, added.name)
        }
        Command::Edit(cmd) => {
            let (row, update) = cmd.into_parts();
            if update.is_empty() {
                return Ok(Mutation::Done(format!("Nothing to change for row {row}.")));
            }
            let updated = store.update(row, update)?;
            format!("Updated row {row} (#{} {})", updated.id, updated.name)
        }
        Command::Delete(cmd) => {
            let removed = store.delete(cmd.row)?;
            format!("Deleted row {} (#{} {})", cmd.row, removed.id, removed.name)
        }
        other => return Ok(Mutation::NotMutating(other)),
    };
    let dashboard = render::dashboard(&store.metrics(), false)?;
    Ok(Mutation::Done(format!("{summary}\n\n{dashboard}")))
}

fn open_store(config: &Config) -> anyhow::Result<CustomerStore> {
    let path = config.customer_file();
    let store = CustomerStore::load_or_create(path)
        .with_context(|| format!("opening customer file {}", path.display()))?;
    Ok(store.with_recent_window(config.dashboard.recent_window_days))
}

fn print_rows(rows: &[(usize, &crmdesk::Customer)], format: OutputFormat) -> anyhow::Result<()> {
    if rows.is_empty() && format != OutputFormat::Json {
        println!("No customers found.");
        return Ok(());
    }
    println!("{}", render::rows(rows, format)?);
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Storage]");
                println!("  Customer file:      {}", config.customer_file().display());
                println!();
                println!("[Dashboard]");
                println!(
                    "  Recent window:      {} days",
                    config.dashboard.recent_window_days
                );
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
