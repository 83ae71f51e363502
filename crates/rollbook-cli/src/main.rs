//! rollbook CLI — interactive student record manager.

use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

mod commands;
mod listing;
mod shell;

use commands::SessionArgs;

#[derive(Parser)]
#[command(
    name = "rollbook",
    version,
    about = "In-memory student record manager",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    session: SessionArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive menu (default)
    Shell {
        #[command(flatten)]
        session: SessionArgs,
    },

    /// Print the startup roster once and exit
    List {
        #[command(flatten)]
        session: SessionArgs,

        /// Order by marks, highest first
        #[arg(long)]
        by_marks: bool,

        /// Output format: text, table, json (defaults to the configured listing style)
        #[arg(long)]
        format: Option<String>,
    },

    /// Create a starter rollbook.toml
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        None => commands::interactive::execute(cli.session),
        Some(Commands::Shell { session }) => commands::interactive::execute(session),
        Some(Commands::List {
            session,
            by_marks,
            format,
        }) => commands::list::execute(session, by_marks, format),
        Some(Commands::Init) => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
