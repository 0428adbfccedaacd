//! Check command - resolve which patch applies to each installation.

use clap::Args;
use tracing::debug;
use unipatch::{InstallationDiscovery, PatchInfo};

use super::common::{resolve_platform, PlatformArg};
use crate::error::CliError;

/// Arguments for the check command.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Platform whose editor root to scan (defaults to the host)
    #[arg(long, value_enum)]
    pub platform: Option<PlatformArg>,

    /// Patch to consider, as NAME=PATTERN or a bare version pattern.
    /// May be given multiple times; earlier patches win ties.
    #[arg(long = "patch", value_name = "[NAME=]PATTERN", required = true)]
    pub patches: Vec<String>,
}

/// Run the check command.
pub fn run(args: CheckArgs) -> Result<(), CliError> {
    let platform = resolve_platform(args.platform)?;
    let patches: Vec<PatchInfo> = args.patches.iter().map(|s| parse_patch_spec(s)).collect();
    debug!(count = patches.len(), "checking patches");

    let discovery = InstallationDiscovery::for_platform(platform);

    println!("Patch support ({})", platform);
    println!();

    for installation in discovery.enumerate() {
        let line = if installation.is_advance_mode() {
            // Always supported, never tied to a specific patch.
            "supported (manual patching)".to_string()
        } else {
            match installation.matching_patch(&patches)? {
                Some(patch) => format!("patch '{}'", patch.name),
                None => "not supported".to_string(),
            }
        };
        println!("  {:<14} {}", installation.version(), line);
    }

    Ok(())
}

/// Parse a `NAME=PATTERN` patch specification.
///
/// A bare pattern doubles as its own name. Splitting happens on the first
/// `=` so patterns may contain further equals signs.
fn parse_patch_spec(spec: &str) -> PatchInfo {
    match spec.split_once('=') {
        Some((name, pattern)) => PatchInfo::new(name, pattern),
        None => PatchInfo::new(spec, spec),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_patch_spec_named() {
        let patch = parse_patch_spec(r"2021 LTS=^2021\.");
        assert_eq!(patch.name, "2021 LTS");
        assert_eq!(patch.version, r"^2021\.");
    }

    #[test]
    fn test_parse_patch_spec_bare_pattern() {
        let patch = parse_patch_spec(r"^2021\.");
        assert_eq!(patch.name, r"^2021\.");
        assert_eq!(patch.version, r"^2021\.");
    }

    #[test]
    fn test_parse_patch_spec_splits_on_first_equals() {
        let patch = parse_patch_spec("lts=^2021\\.[0-9]=?");
        assert_eq!(patch.name, "lts");
        assert_eq!(patch.version, "^2021\\.[0-9]=?");
    }
}
