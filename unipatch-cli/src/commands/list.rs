//! List command - show Unity editor installations on this machine.

use clap::Args;
use tracing::debug;
use unipatch::InstallationDiscovery;

use super::common::{resolve_platform, PlatformArg};
use crate::error::CliError;

/// Arguments for the list command.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Platform whose editor root to scan (defaults to the host)
    #[arg(long, value_enum)]
    pub platform: Option<PlatformArg>,
}

/// Run the list command.
pub fn run(args: ListArgs) -> Result<(), CliError> {
    let platform = resolve_platform(args.platform)?;
    let discovery = InstallationDiscovery::for_platform(platform);
    debug!(root = %discovery.root().display(), "listing installations");

    println!("Unity installations ({})", platform);
    println!("Editor root: {}", discovery.root().display());
    println!();

    let mut discovered = 0;
    for installation in discovery.enumerate() {
        if installation.is_advance_mode() {
            println!("  {:<14} (path entered interactively)", installation.version());
        } else {
            println!(
                "  {:<14} {}",
                installation.version(),
                installation.location().display()
            );
            discovered += 1;
        }
    }

    println!();
    println!("{} installation(s) discovered", discovered);
    Ok(())
}
