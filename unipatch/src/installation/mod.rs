//! Unity installation records, discovery, and the interactive path prompt.
//!
//! # Overview
//!
//! Unity Hub lays installations out as one directory per editor version:
//!
//! ```text
//! /Applications/Unity/Hub/Editor/
//! ├── 2020.3.48f1/
//! ├── 2021.3.5f1/
//! └── 2022.1.0b16/
//! ```
//!
//! [`InstallationDiscovery`] scans that root and produces one
//! [`Installation`] per child directory, in ascending path order, followed
//! by exactly one advance-mode entry. The advance-mode entry stands in for
//! an installation outside the Hub layout; its executable location comes
//! from the user via a [`PathPrompt`] instead of the directory structure.
//!
//! # Example
//!
//! ```no_run
//! use unipatch::installation::InstallationDiscovery;
//! use unipatch::Platform;
//!
//! let discovery = InstallationDiscovery::for_platform(Platform::MacOS);
//! for installation in discovery.enumerate() {
//!     println!("{} at {}", installation.version(), installation.location().display());
//! }
//! ```

mod discovery;
mod prompt;
mod record;

pub use discovery::{discover_installations, InstallationDiscovery, Installations};
pub use prompt::{PathPrompt, StdioPrompt, EXECUTABLE_PROMPT};
pub use record::{Installation, InstallationKind, ADVANCE_MODE_VERSION};
