//! Installation record type and patch resolution.

use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::patch::{PatchError, PatchInfo};
use crate::platform::Platform;

use super::prompt::PathPrompt;

/// Version sentinel reported by the advance-mode installation entry.
pub const ADVANCE_MODE_VERSION: &str = "Advance Mode";

/// How an installation entry came to exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallationKind {
    /// Found by scanning the Unity Hub editor directory.
    Discovered,

    /// Synthetic entry whose executable location is supplied by the user.
    AdvanceMode,
}

/// A Unity editor installation on disk.
///
/// Immutable value object: a filesystem location tagged with the platform
/// it belongs to. The version string and executable path are derived from
/// the location on demand, never stored.
///
/// The advance-mode variant carries an empty location. It reports the
/// [`ADVANCE_MODE_VERSION`] sentinel, is always supported, never resolves
/// to a concrete patch, and obtains its executable path interactively.
/// "Supported" and "has a matching patch" are deliberately different
/// predicates for that variant.
///
/// # Example
///
/// ```
/// use unipatch::{Installation, Platform};
///
/// let installation = Installation::discovered("/x/2021.3.5f1", Platform::Linux);
/// assert_eq!(installation.version(), "2021.3.5f1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Installation {
    location: PathBuf,
    platform: Platform,
    kind: InstallationKind,
}

impl Installation {
    /// Create a record for an installation discovered on disk.
    pub fn discovered(location: impl Into<PathBuf>, platform: Platform) -> Self {
        Self {
            location: location.into(),
            platform,
            kind: InstallationKind::Discovered,
        }
    }

    /// Create the advance-mode entry for a platform.
    pub fn advance_mode(platform: Platform) -> Self {
        Self {
            location: PathBuf::new(),
            platform,
            kind: InstallationKind::AdvanceMode,
        }
    }

    /// Filesystem location of the installation. Empty for advance mode.
    pub fn location(&self) -> &Path {
        &self.location
    }

    /// Platform this installation belongs to.
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// How this entry came to exist.
    pub fn kind(&self) -> InstallationKind {
        self.kind
    }

    /// Whether this is the advance-mode entry.
    pub fn is_advance_mode(&self) -> bool {
        self.kind == InstallationKind::AdvanceMode
    }

    /// Version of the installation.
    ///
    /// Derived from the final component of the installation directory,
    /// which Unity Hub names after the editor version (e.g. `2021.3.5f1`).
    /// The advance-mode entry reports [`ADVANCE_MODE_VERSION`] regardless
    /// of location.
    pub fn version(&self) -> String {
        match self.kind {
            InstallationKind::AdvanceMode => ADVANCE_MODE_VERSION.to_string(),
            InstallationKind::Discovered => self
                .location
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default(),
        }
    }

    /// Path to the editor executable inside this installation.
    ///
    /// Pure derivation: the installation location joined with the
    /// platform's executable suffix. Returns `None` for the advance-mode
    /// entry, whose location is only known to the user; use
    /// [`resolve_executable_path`](Self::resolve_executable_path) to
    /// obtain it through a prompt.
    pub fn executable_path(&self) -> Option<PathBuf> {
        match self.kind {
            InstallationKind::AdvanceMode => None,
            InstallationKind::Discovered => {
                Some(self.location.join(self.platform.executable_suffix()))
            }
        }
    }

    /// Resolve the executable path, consulting `prompt` for advance mode.
    ///
    /// Discovered installations return their derived path without touching
    /// the prompt. The advance-mode entry blocks on the prompt and returns
    /// whatever the user supplied, verbatim.
    pub fn resolve_executable_path<P: PathPrompt>(&self, prompt: &mut P) -> io::Result<PathBuf> {
        match self.executable_path() {
            Some(path) => Ok(path),
            None => prompt.request_path().map(PathBuf::from),
        }
    }

    /// Find the first patch in `patches` that applies to this installation.
    ///
    /// Candidates are tried in the order supplied; the first whose version
    /// pattern matches wins, even when a later pattern is more specific.
    /// The advance-mode entry never resolves to a patch and returns
    /// `Ok(None)` without inspecting the list.
    ///
    /// # Errors
    ///
    /// Fails on the first candidate whose pattern is not a valid regular
    /// expression.
    pub fn matching_patch<'a>(
        &self,
        patches: &'a [PatchInfo],
    ) -> Result<Option<&'a PatchInfo>, PatchError> {
        if self.is_advance_mode() {
            return Ok(None);
        }

        let version = self.version();
        for patch in patches {
            if patch.applies_to(&version)? {
                debug!(version = %version, patch = %patch.name, "patch matched");
                return Ok(Some(patch));
            }
        }

        debug!(version = %version, "no patch matched");
        Ok(None)
    }

    /// Whether any of the supplied patches supports this installation.
    ///
    /// The advance-mode entry is always supported, independent of the
    /// patch list — including an empty one.
    pub fn is_supported(&self, patches: &[PatchInfo]) -> Result<bool, PatchError> {
        match self.kind {
            InstallationKind::AdvanceMode => Ok(true),
            InstallationKind::Discovered => Ok(self.matching_patch(patches)?.is_some()),
        }
    }
}
