//! Integration tests for installation discovery and patch resolution.
//!
//! These tests verify the complete flow against a real directory tree:
//! - editor root scan → installation records → patch matching
//! - advance-mode entry behavior at the end of every enumeration
//!
//! Run with: `cargo test --test discovery_integration`

use std::path::PathBuf;

use tempfile::TempDir;

use unipatch::{InstallationDiscovery, PatchInfo, Platform, ADVANCE_MODE_VERSION};

/// Build a Hub-style editor root with the given version directories.
fn make_editor_root(versions: &[&str]) -> TempDir {
    let temp = TempDir::new().unwrap();
    for version in versions {
        std::fs::create_dir_all(temp.path().join(version)).unwrap();
    }
    temp
}

#[test]
fn test_enumeration_yields_n_plus_one_with_trailing_advance_mode() {
    let root = make_editor_root(&["2019.4.40f1", "2021.3.5f1", "2022.1.0b16"]);
    let discovery = InstallationDiscovery::with_root(root.path(), Platform::Linux);

    let installations: Vec<_> = discovery.enumerate().collect();

    assert_eq!(installations.len(), 4);
    let last = installations.last().unwrap();
    assert_eq!(last.version(), ADVANCE_MODE_VERSION);
    assert!(last.is_advance_mode());
}

#[test]
fn test_enumeration_without_root_yields_single_advance_mode_entry() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("no-hub-here");
    let discovery = InstallationDiscovery::with_root(&missing, Platform::Windows);

    let installations: Vec<_> = discovery.enumerate().collect();

    assert_eq!(installations.len(), 1);
    assert_eq!(installations[0].version(), ADVANCE_MODE_VERSION);
}

#[test]
fn test_discovered_installations_come_back_in_ascending_path_order() {
    let root = make_editor_root(&["2022.1.0b16", "2019.4.40f1", "2021.3.5f1"]);
    let discovery = InstallationDiscovery::with_root(root.path(), Platform::Linux);

    let locations: Vec<PathBuf> = discovery
        .enumerate()
        .take_while(|i| !i.is_advance_mode())
        .map(|i| i.location().to_path_buf())
        .collect();

    let mut sorted = locations.clone();
    sorted.sort();
    assert_eq!(locations, sorted);
    assert_eq!(locations.len(), 3);
}

#[test]
fn test_full_flow_version_to_patch_resolution() {
    let root = make_editor_root(&["2020.3.48f1", "2021.3.5f1"]);
    let discovery = InstallationDiscovery::with_root(root.path(), Platform::Linux);

    // First match wins over the more specific later pattern.
    let patches = vec![
        PatchInfo::new("2021 family", r"^2021\."),
        PatchInfo::new("2021.3.5f1 exact", r"2021\.3\.5f1"),
        PatchInfo::new("2020 family", r"^2020\."),
    ];

    let resolved: Vec<(String, Option<String>)> = discovery
        .enumerate()
        .map(|installation| {
            let patch = installation
                .matching_patch(&patches)
                .unwrap()
                .map(|p| p.name.clone());
            (installation.version(), patch)
        })
        .collect();

    assert_eq!(
        resolved,
        vec![
            ("2020.3.48f1".to_string(), Some("2020 family".to_string())),
            ("2021.3.5f1".to_string(), Some("2021 family".to_string())),
            (ADVANCE_MODE_VERSION.to_string(), None),
        ]
    );
}

#[test]
fn test_supported_and_has_patch_diverge_for_advance_mode() {
    let root = make_editor_root(&["2021.3.5f1"]);
    let discovery = InstallationDiscovery::with_root(root.path(), Platform::Linux);
    let installations: Vec<_> = discovery.enumerate().collect();

    let discovered = &installations[0];
    let advance = &installations[1];

    // With no patches, a discovered installation is unsupported but the
    // advance-mode entry stays supported.
    assert!(!discovered.is_supported(&[]).unwrap());
    assert!(advance.is_supported(&[]).unwrap());

    // Even a pattern matching the sentinel literally resolves no patch.
    let sentinel_patch = vec![PatchInfo::new("sentinel", "Advance Mode")];
    assert!(advance.matching_patch(&sentinel_patch).unwrap().is_none());
    assert!(advance.is_supported(&sentinel_patch).unwrap());
}

#[test]
fn test_executable_paths_for_discovered_installations() {
    let root = make_editor_root(&["2021.3.5f1"]);
    let discovery = InstallationDiscovery::with_root(root.path(), Platform::Linux);

    let first = discovery.enumerate().next().unwrap();

    assert_eq!(
        first.executable_path().unwrap(),
        root.path().join("2021.3.5f1").join("Unity")
    );
}
