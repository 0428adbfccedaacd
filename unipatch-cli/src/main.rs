//! UniPatch CLI - Command-line interface
//!
//! This binary exposes the UniPatch library through subcommands for listing
//! Unity editor installations and resolving which patches apply to them.

mod commands;
mod error;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "unipatch",
    version = unipatch::VERSION,
    about = "Discover Unity Hub editor installations and resolve applicable patches"
)]
struct Cli {
    /// Enable verbose logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List Unity editor installations discovered on this machine
    List(commands::list::ListArgs),

    /// Resolve which patch applies to each installation
    Check(commands::check::CheckArgs),

    /// Print the executable path for an installed editor version
    ExecPath(commands::exec_path::ExecPathArgs),
}

fn main() {
    let cli = Cli::parse();
    unipatch::telemetry::init_logging(cli.verbose);

    let result = match cli.command {
        Commands::List(args) => commands::list::run(args),
        Commands::Check(args) => commands::check::run(args),
        Commands::ExecPath(args) => commands::exec_path::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
