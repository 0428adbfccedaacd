//! UniPatch - Unity editor installation discovery and patch resolution
//!
//! This library discovers Unity editor versions installed through Unity Hub
//! and resolves which of a set of known patches applies to each installation.
//!
//! # Overview
//!
//! Unity Hub keeps every managed editor version in its own directory under a
//! platform-specific root (for example `/Applications/Unity/Hub/Editor` on
//! macOS). Each child directory is one installation, named after its version.
//! UniPatch enumerates those directories and matches the version names
//! against patch version patterns.
//!
//! # Example
//!
//! ```no_run
//! use unipatch::{discover_installations, PatchInfo, Platform};
//!
//! let patches = vec![PatchInfo::new("2021 LTS", r"^2021\.")];
//!
//! for installation in discover_installations(Platform::Linux) {
//!     match installation.matching_patch(&patches) {
//!         Ok(Some(patch)) => println!("{}: {}", installation.version(), patch.name),
//!         Ok(None) => println!("{}: no patch", installation.version()),
//!         Err(e) => eprintln!("{}", e),
//!     }
//! }
//! ```

pub mod installation;
pub mod patch;
pub mod platform;
pub mod telemetry;

pub use installation::{
    discover_installations, Installation, InstallationDiscovery, InstallationKind, Installations,
    PathPrompt, StdioPrompt, ADVANCE_MODE_VERSION, EXECUTABLE_PROMPT,
};
pub use patch::{PatchError, PatchInfo};
pub use platform::Platform;

/// Crate version string from Cargo metadata.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
