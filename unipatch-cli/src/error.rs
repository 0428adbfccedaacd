//! CLI error types.

use std::io;

use unipatch::PatchError;

/// Errors that can occur while running a CLI command.
#[derive(Debug)]
pub enum CliError {
    /// The host operating system is not supported by Unity Hub.
    UnsupportedHost(String),

    /// No installation reports the requested version.
    VersionNotFound(String),

    /// A patch version pattern failed to evaluate.
    Patch(PatchError),

    /// I/O failure while prompting the user.
    Io(io::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedHost(os) => {
                write!(
                    f,
                    "unsupported host operating system '{}'; use --platform to pick one of \
                     windows, macos, linux",
                    os
                )
            }
            Self::VersionNotFound(version) => {
                write!(f, "no installation with version '{}' found", version)
            }
            Self::Patch(e) => write!(f, "{}", e),
            Self::Io(e) => write!(f, "input error: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Patch(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PatchError> for CliError {
    fn from(e: PatchError) -> Self {
        CliError::Patch(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}
