//! Exec-path command - print the executable path for an installed version.

use clap::Args;
use unipatch::{discover_installations, StdioPrompt};

use super::common::{resolve_platform, PlatformArg};
use crate::error::CliError;

/// Arguments for the exec-path command.
#[derive(Debug, Args)]
pub struct ExecPathArgs {
    /// Installation version to resolve (use "Advance Mode" to enter a path)
    pub version: String,

    /// Platform whose editor root to scan (defaults to the host)
    #[arg(long, value_enum)]
    pub platform: Option<PlatformArg>,
}

/// Run the exec-path command.
pub fn run(args: ExecPathArgs) -> Result<(), CliError> {
    let platform = resolve_platform(args.platform)?;

    let installation = discover_installations(platform)
        .find(|i| i.version() == args.version)
        .ok_or_else(|| CliError::VersionNotFound(args.version.clone()))?;

    // Blocks on stdin for the advance-mode entry.
    let path = installation.resolve_executable_path(&mut StdioPrompt::new())?;
    println!("{}", path.display());

    Ok(())
}
