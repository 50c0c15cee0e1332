use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

mod commands;

use commands::{CloneCommand, DateCommand, PadCommand, QueryCommand};

#[derive(Parser)]
#[command(name = "heron", version, about = "Deep copy and web utility helpers")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Deep copy a JSON document and verify the copy
    Clone(CloneCommand),
    /// Look up a query parameter in a URL
    Query(QueryCommand),
    /// Format a date with a pattern
    Date(DateCommand),
    /// Zero-pad a number
    Pad(PadCommand),
}

/// `RUST_LOG` directives, falling back to `warn` when none are given
fn log_filter(directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(directives.unwrap_or_default())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Clone(cmd) => cmd.run(),
        Commands::Query(cmd) => cmd.run(),
        Commands::Date(cmd) => cmd.run(),
        Commands::Pad(cmd) => cmd.run(),
    }
}
