//! Operating system model for installation discovery.
//!
//! The [`Platform`] enum selects both the Unity Hub editor root directory
//! and the relative location of the editor executable inside an
//! installation. The set of supported systems is closed; every `match` over
//! [`Platform`] is exhaustive, so an unsupported value cannot reach the
//! path tables at runtime.

use std::fmt;
use std::path::PathBuf;

/// Operating system a Unity installation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Windows,
    MacOS,
    Linux,
}

impl Platform {
    /// Detect the platform of the running host.
    ///
    /// Returns `None` on operating systems Unity Hub does not support.
    pub fn current() -> Option<Platform> {
        match std::env::consts::OS {
            "windows" => Some(Platform::Windows),
            "macos" => Some(Platform::MacOS),
            "linux" => Some(Platform::Linux),
            _ => None,
        }
    }

    /// Root directory where Unity Hub places managed editor installations.
    ///
    /// On Linux the root lives under the user's home directory. When the
    /// home directory cannot be determined the unexpanded `~` literal is
    /// returned; it resolves to a path that does not exist, so enumeration
    /// yields no discovered installations.
    pub fn editor_root(&self) -> PathBuf {
        match self {
            Platform::Windows => PathBuf::from(r"C:\Program Files\Unity\Hub\Editor\"),
            Platform::MacOS => PathBuf::from("/Applications/Unity/Hub/Editor"),
            Platform::Linux => dirs::home_dir()
                .map(|home| home.join("Unity/Hub/Editor"))
                .unwrap_or_else(|| PathBuf::from("~/Unity/Hub/Editor")),
        }
    }

    /// Relative path from an installation directory to the editor executable.
    pub fn executable_suffix(&self) -> &'static str {
        match self {
            Platform::Windows => r"Editor\Unity.exe",
            Platform::MacOS => "Unity.app/Contents/MacOS/Unity",
            Platform::Linux => "Unity",
        }
    }

    /// Display name for user-facing output.
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Windows => "Windows",
            Platform::MacOS => "macOS",
            Platform::Linux => "Linux",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
