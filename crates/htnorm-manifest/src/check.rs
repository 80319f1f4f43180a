//! Version consistency check.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{CheckError, CheckResult};
use crate::key_path::KeyPath;
use crate::manifest::Manifest;
use crate::version::VersionString;

/// Where the declared version lives for a known manifest layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestKind {
    /// `pyproject.toml` managed by poetry: `tool.poetry.version`
    Pyproject,
    /// `Cargo.toml` of a single package: `package.version`
    Cargo,
    /// `Cargo.toml` of a workspace root: `workspace.package.version`
    CargoWorkspace,
}

impl ManifestKind {
    pub fn key_path(&self) -> KeyPath {
        let dotted = match self {
            ManifestKind::Pyproject => "tool.poetry.version",
            ManifestKind::Cargo => "package.version",
            ManifestKind::CargoWorkspace => "workspace.package.version",
        };
        KeyPath::from_segments(dotted.split('.'))
    }

    /// Pick a layout from the document's tables. A `workspace.package`
    /// table wins over `package`; anything else is treated as a pyproject.
    pub fn detect(manifest: &Manifest) -> Self {
        let workspace_package = KeyPath::from_segments(["workspace", "package"]);
        let package = KeyPath::from_segments(["package"]);

        if manifest.has_table(&workspace_package) {
            ManifestKind::CargoWorkspace
        } else if manifest.has_table(&package) {
            ManifestKind::Cargo
        } else {
            ManifestKind::Pyproject
        }
    }
}

/// Outcome of a passing check.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub manifest: PathBuf,
    pub key_path: KeyPath,
    pub expected: VersionString,
    pub found: VersionString,
}

/// Compares a library version against the one declared in a manifest.
#[derive(Debug, Clone)]
pub struct VersionCheck {
    expected: VersionString,
    manifest_path: PathBuf,
    // None: resolved with `ManifestKind::detect` once the manifest is loaded
    key_path: Option<KeyPath>,
}

impl VersionCheck {
    /// Check `expected` against `tool.poetry.version` in `manifest_path`.
    pub fn new(expected: impl Into<VersionString>, manifest_path: impl Into<PathBuf>) -> Self {
        Self {
            expected: expected.into(),
            manifest_path: manifest_path.into(),
            key_path: Some(ManifestKind::Pyproject.key_path()),
        }
    }

    pub fn with_key_path(mut self, key_path: KeyPath) -> Self {
        self.key_path = Some(key_path);
        self
    }

    /// Choose the key path from the manifest's layout at run time.
    pub fn with_detected_kind(mut self) -> Self {
        self.key_path = None;
        self
    }

    pub fn with_kind(self, kind: ManifestKind) -> Self {
        self.with_key_path(kind.key_path())
    }

    pub fn manifest_path(&self) -> &Path {
        &self.manifest_path
    }

    /// The configured key path, or `None` when it is detected at run time.
    pub fn key_path(&self) -> Option<&KeyPath> {
        self.key_path.as_ref()
    }

    /// Load the manifest and compare. Read-only; the manifest is
    /// dropped before returning.
    pub fn run(&self) -> CheckResult<CheckReport> {
        let manifest = Manifest::load(&self.manifest_path)?;
        let key_path = match &self.key_path {
            Some(key_path) => key_path.clone(),
            None => {
                let kind = ManifestKind::detect(&manifest);
                debug!("Detected {:?} layout for {:?}", kind, self.manifest_path);
                kind.key_path()
            }
        };
        let found = manifest.version_at(&key_path)?;

        if found != self.expected {
            warn!(
                "Version drift: library {} vs {} = {} in {:?}",
                self.expected, key_path, found, self.manifest_path
            );
            return Err(CheckError::Mismatch {
                path: self.manifest_path.clone(),
                key_path,
                expected: self.expected.clone(),
                found,
            });
        }

        info!("Version {} matches {} in {:?}", found, key_path, self.manifest_path);
        Ok(CheckReport {
            manifest: self.manifest_path.clone(),
            key_path,
            expected: self.expected.clone(),
            found,
        })
    }
}
