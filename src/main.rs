mod cli;
mod commands;

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use commands::{query, sequence};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut stdout = io::stdout().lock();
    match &cli.command {
        Commands::Format(args) => sequence::handle_format(args, &mut stdout),
        Commands::Cursor(cmd) => sequence::handle_cursor(cmd, &mut stdout),
        Commands::Erase(cmd) => sequence::handle_erase(cmd, &mut stdout),
        Commands::Location => query::handle_location(&mut stdout),
        Commands::Size => query::handle_size(&mut stdout),
    }
}

/// Log to stderr so escape sequences on stdout stay clean.
fn init_tracing(verbose: bool) {
    let env_filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // Ignore a second initialization
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .with_writer(io::stderr)
        .try_init();
}
