//! # projtree Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This file serves as the main entry point for the projtree CLI, the
//! command-line host for the `projtree-lib` walker. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the command handlers
//!
//! ## Architecture
//!
//! - Each command (`list`, `tree`) is a variant of the `Commands` enum
//! - Commands are mapped to handler functions in their modules
//! - All errors are propagated to this level for consistent reporting
//!
//! Nothing here is global: each invocation loads configuration, reads the
//! solution into a fresh forest, and drops everything when it returns.
//!
//! ## Examples
//!
//! ```bash
//! # List the projects of the solution in the current directory
//! projtree list
//!
//! # Same, naming the active document and logging discovery details
//! projtree -vv list Shop.sln --active-document src/App/Program.cs
//!
//! # Show the solution hierarchy
//! projtree tree Shop.sln --show-paths
//! ```
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Command handlers (list, tree)
mod common; // Solution adapters and output utilities
mod core; // Errors and configuration

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "projtree",
    about = "List every project in a solution, nested projects included",
    long_about = "Reads a Visual Studio .sln file (or a TOML project manifest) and prints\n\
                  the active document and every project it contains, skipping solution folders.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    #[command(alias = "l")]
    List(commands::list::ListArgs),
    #[command(alias = "t")]
    Tree(commands::tree::TreeArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::List(args) => commands::list::handle_list(args),
        Commands::Tree(args) => commands::tree::handle_tree(args),
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
