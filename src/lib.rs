//! arigato CLI - a secure, shared workspace for secrets
//!
//! This module contains the shared CLI implementation used by the binary.

mod commands;
mod prompt;
mod validate;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// A secure, shared workspace for secrets
#[derive(Parser)]
#[command(name = "arigato")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A secure, shared workspace for secrets", long_about = None)]
#[command(arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase verbosity level
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Registers a user account
    Signup(commands::SignupArgs),
}

pub fn run() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    // Configure color output
    if cli.no_color {
        console::set_colors_enabled(false);
    }

    let rt = tokio::runtime::Runtime::new()?;

    match cli.command {
        Commands::Signup(ref args) => {
            rt.block_on(commands::cmd_signup(args, cli.quiet, cli.verbose))
        }
    }
}
