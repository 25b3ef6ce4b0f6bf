// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Screenstate CLI - drive the screen state from the command line

mod commands;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use commands::Output;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "screenstate")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Configuration file path
    #[arg(short, long, env = "SCREENSTATE_CONFIG", global = true)]
    config: Option<std::path::PathBuf>,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR", global = true)]
    no_color: bool,

    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter job postings by tags (all tags must match)
    Postings {
        /// Catalog JSON file (defaults to the bundled catalog)
        #[arg(long)]
        catalog: Option<std::path::PathBuf>,

        /// Tag to filter by (repeatable)
        #[arg(short, long = "filter")]
        filters: Vec<String>,

        /// Tag to remove after filtering (repeatable)
        #[arg(long)]
        remove: Vec<String>,

        /// List every tag in the catalog
        #[arg(long)]
        tags: bool,
    },

    /// Split a bill with a tip
    Split {
        /// Bill amount
        #[arg(long, default_value = "")]
        bill: String,

        /// Number of people
        #[arg(long, default_value = "")]
        people: String,

        /// Tip percentage (5, 10, 15, 25, 50)
        #[arg(long)]
        tip: Option<u8>,

        /// Custom total tip amount
        #[arg(long)]
        custom: Option<String>,
    },

    /// Price for a pageview tier
    Pricing {
        /// Tier index (0 = 10K .. 4 = 1M)
        #[arg(long)]
        tier: Option<usize>,

        /// Yearly billing (25% off)
        #[arg(long)]
        yearly: bool,
    },

    /// Spending over the last seven days
    Expenses {
        /// Select a day (mon, tues, wed, thurs, fri, sat, sun)
        #[arg(long)]
        select: Option<String>,
    },

    /// Validate card details
    Card {
        /// Cardholder name
        #[arg(long)]
        name: Option<String>,

        /// Card number
        #[arg(long)]
        number: Option<String>,

        /// Expiry month (MM)
        #[arg(long)]
        month: Option<String>,

        /// Expiry year (YY)
        #[arg(long)]
        year: Option<String>,

        /// Security code
        #[arg(long)]
        cvv: Option<String>,
    },

    /// Build a cart from add/remove actions
    Cart {
        /// Item to add as TITLE=PRICExQTY (repeatable)
        #[arg(long)]
        add: Vec<String>,

        /// Title to remove (repeatable)
        #[arg(long)]
        remove: Vec<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        shell: clap_complete::Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = screenstate::config::load(cli.config.as_deref()).context("Failed to load configuration")?;

    // Initialize logging
    let log_level = match cli.verbose {
        0 if cli.quiet => "error",
        0 => config.log_level.as_str(),
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let out = Output {
        json: cli.json,
        color: config.color && !cli.no_color,
    };

    // Execute command
    match cli.command {
        Commands::Postings { catalog, filters, remove, tags } => commands::postings::run(
            commands::postings::PostingsArgs {
                catalog: catalog.or(config.catalog),
                filters,
                remove,
                tags,
            },
            out,
        ),
        Commands::Split { bill, people, tip, custom } => {
            commands::split::run(commands::split::SplitArgs { bill, people, tip, custom }, out)
        }
        Commands::Pricing { tier, yearly } => commands::pricing::run(tier, yearly, out),
        Commands::Expenses { select } => commands::expenses::run(select, out),
        Commands::Card { name, number, month, year, cvv } => {
            commands::card::run(commands::card::CardArgs { name, number, month, year, cvv }, out)
        }
        Commands::Cart { add, remove } => commands::cart::run(add, remove, out),
        Commands::Completions { shell } => commands::completions::run(shell, &mut Cli::command()),
    }
}
