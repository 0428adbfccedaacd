//! Common types and utilities shared across CLI commands.

use clap::ValueEnum;
use unipatch::Platform;

use crate::error::CliError;

/// Platform selection for CLI arguments.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PlatformArg {
    /// Windows (C:\Program Files\Unity\Hub\Editor)
    Windows,
    /// macOS (/Applications/Unity/Hub/Editor)
    Macos,
    /// Linux (~/Unity/Hub/Editor)
    Linux,
}

impl From<PlatformArg> for Platform {
    fn from(arg: PlatformArg) -> Self {
        match arg {
            PlatformArg::Windows => Platform::Windows,
            PlatformArg::Macos => Platform::MacOS,
            PlatformArg::Linux => Platform::Linux,
        }
    }
}

/// Resolve the platform from the CLI argument, falling back to the host.
pub fn resolve_platform(arg: Option<PlatformArg>) -> Result<Platform, CliError> {
    match arg {
        Some(platform) => Ok(platform.into()),
        None => Platform::current()
            .ok_or_else(|| CliError::UnsupportedHost(std::env::consts::OS.to_string())),
    }
}
