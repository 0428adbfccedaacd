//! Enumeration of Unity Hub editor installations.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::platform::Platform;

use super::record::Installation;

/// Discovers Unity editor installations managed by Unity Hub.
///
/// Scans the immediate children of the Hub editor root; each child
/// directory is one installation. The scan is non-recursive and performs a
/// single best-effort directory read — a root that is missing (or vanishes
/// between calls) simply yields no discovered installations.
///
/// The default root comes from the platform (see
/// [`Platform::editor_root`]); [`with_root`](Self::with_root) overrides it,
/// which tests use to scan a temporary directory.
#[derive(Debug, Clone)]
pub struct InstallationDiscovery {
    root: PathBuf,
    platform: Platform,
}

impl InstallationDiscovery {
    /// Create a discovery over the platform's default editor root.
    pub fn for_platform(platform: Platform) -> Self {
        Self {
            root: platform.editor_root(),
            platform,
        }
    }

    /// Create a discovery over an explicit root directory.
    pub fn with_root(root: impl Into<PathBuf>, platform: Platform) -> Self {
        Self {
            root: root.into(),
            platform,
        }
    }

    /// Directory scanned for installations.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Enumerate installations under the root.
    ///
    /// Yields one [`Installation`] per child directory in ascending path
    /// order, then exactly one advance-mode entry — the advance-mode entry
    /// is produced even when the root does not exist or holds no
    /// directories. The directory is read lazily on the first call to
    /// `next()`; every fresh `enumerate()` re-reads the disk, so repeated
    /// calls observe directory additions and removals.
    pub fn enumerate(&self) -> Installations {
        Installations {
            platform: self.platform,
            state: ScanState::Pending(self.root.clone()),
        }
    }
}

/// Enumerate installations for a platform's default editor root.
///
/// Convenience for [`InstallationDiscovery::for_platform`] followed by
/// [`enumerate`](InstallationDiscovery::enumerate).
///
/// # Example
///
/// ```no_run
/// use unipatch::{discover_installations, Platform};
///
/// let installations: Vec<_> = discover_installations(Platform::Linux).collect();
/// assert_eq!(installations.last().unwrap().version(), "Advance Mode");
/// ```
pub fn discover_installations(platform: Platform) -> Installations {
    InstallationDiscovery::for_platform(platform).enumerate()
}

enum ScanState {
    /// Root not read yet; the scan happens on the first `next()`.
    Pending(PathBuf),
    Discovered(std::vec::IntoIter<PathBuf>),
    AdvanceMode,
    Done,
}

/// Iterator over installations produced by [`InstallationDiscovery::enumerate`].
///
/// Finite: all discovered installations in ascending path order, then the
/// advance-mode entry, then `None`.
pub struct Installations {
    platform: Platform,
    state: ScanState,
}

impl Iterator for Installations {
    type Item = Installation;

    fn next(&mut self) -> Option<Installation> {
        loop {
            match &mut self.state {
                ScanState::Pending(root) => {
                    let directories = list_child_directories(root);
                    debug!(
                        root = %root.display(),
                        count = directories.len(),
                        "scanned editor root"
                    );
                    self.state = ScanState::Discovered(directories.into_iter());
                }
                ScanState::Discovered(paths) => match paths.next() {
                    Some(path) => return Some(Installation::discovered(path, self.platform)),
                    None => self.state = ScanState::AdvanceMode,
                },
                ScanState::AdvanceMode => {
                    self.state = ScanState::Done;
                    return Some(Installation::advance_mode(self.platform));
                }
                ScanState::Done => return None,
            }
        }
    }
}

/// List immediate child directories of `root`, sorted by full path.
///
/// A root that cannot be read counts as empty; entries that cannot be
/// inspected are skipped. Single pass, no retry.
fn list_child_directories(root: &Path) -> Vec<PathBuf> {
    let entries = match std::fs::read_dir(root) {
        Ok(entries) => entries,
        Err(e) => {
            debug!(root = %root.display(), error = %e, "editor root not readable");
            return Vec::new();
        }
    };

    let mut directories: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    directories.sort();
    directories
}
