mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "scheduler")]
#[command(about = "Line-oriented event scheduler")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    run: RunArgs,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Options of the command loop, accepted with or without `run`
#[derive(Args, Debug)]
struct RunArgs {
    /// Read commands from this file instead of stdin
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Pin "today" for the booking window (format: MM/DD/YYYY)
    #[arg(long)]
    today: Option<String>,
}

impl RunArgs {
    /// Fills options missing here from `outer`, the ones given before `run`.
    fn or(self, outer: Self) -> Self {
        Self {
            input: self.input.or(outer.input),
            today: self.today.or(outer.today),
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Read commands and manage the event calendar (default)
    Run(RunArgs),

    /// List the time slots, locations and departments
    Catalog {
        /// Print the catalogs as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // stdout carries the user-facing messages, logs go to stderr
    let log_level = if cli.verbose { "debug" } else { "warn" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("scheduler={log_level},scheduler_core={log_level}").into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let run = match cli.command {
        None => cli.run,
        Some(Commands::Run(args)) => args.or(cli.run),
        Some(Commands::Catalog { json }) => return commands::catalog_command(json),
    };
    commands::run_command(run.input, run.today)
}
