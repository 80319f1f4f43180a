//! Manifest Loader
//!
//! Reads a TOML packaging manifest into memory and resolves key paths
//! against it.

use std::fs;
use std::path::{Path, PathBuf};

use toml::{Table, Value};
use tracing::{debug, info};

use crate::error::{CheckError, CheckResult};
use crate::key_path::KeyPath;
use crate::version::VersionString;

/// Largest manifest accepted by [`Manifest::load`].
pub const MAX_MANIFEST_BYTES: u64 = 1_000_000;

/// A parsed manifest together with the path it was read from.
#[derive(Debug, Clone)]
pub struct Manifest {
    path: PathBuf,
    table: Table,
}

impl Manifest {
    /// Load and parse the manifest at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::Io`] if the file is missing or unreadable,
    /// [`CheckError::TooLarge`] past [`MAX_MANIFEST_BYTES`] and
    /// [`CheckError::Parse`] for malformed TOML.
    pub fn load(path: &Path) -> CheckResult<Self> {
        let io_err = |source| CheckError::Io {
            path: path.to_path_buf(),
            source,
        };

        let metadata = fs::metadata(path).map_err(io_err)?;
        if metadata.len() > MAX_MANIFEST_BYTES {
            return Err(CheckError::TooLarge {
                path: path.to_path_buf(),
                size: metadata.len(),
                max: MAX_MANIFEST_BYTES,
            });
        }

        let content = fs::read_to_string(path).map_err(io_err)?;
        let manifest = Self::from_toml(path, &content)?;

        info!("Loaded manifest {:?} ({} top-level keys)", path, manifest.table.len());
        Ok(manifest)
    }

    /// Parse manifest text that is already in memory. `path` is only
    /// used for error messages.
    pub fn from_toml(path: &Path, content: &str) -> CheckResult<Self> {
        let table = content.parse::<Table>().map_err(|source| CheckError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            table,
        })
    }

    /// Whether `key_path` resolves to a table.
    pub fn has_table(&self, key_path: &KeyPath) -> bool {
        self.lookup(key_path).map(Value::is_table).unwrap_or(false)
    }

    /// Walk `key_path` through nested tables.
    pub fn lookup(&self, key_path: &KeyPath) -> CheckResult<&Value> {
        let missing = || CheckError::MissingKey {
            path: self.path.clone(),
            key_path: key_path.clone(),
        };

        let (last, parents) = key_path.segments().split_last().ok_or_else(missing)?;

        let mut table = &self.table;
        for segment in parents {
            table = table
                .get(segment)
                .and_then(Value::as_table)
                .ok_or_else(missing)?;
        }

        let value = table.get(last).ok_or_else(missing)?;
        debug!("Resolved {} in {:?}", key_path, self.path);
        Ok(value)
    }

    /// Resolve `key_path` and require a string value.
    pub fn version_at(&self, key_path: &KeyPath) -> CheckResult<VersionString> {
        match self.lookup(key_path)? {
            Value::String(s) => Ok(VersionString::new(s.as_str())),
            other => Err(CheckError::NotAString {
                path: self.path.clone(),
                key_path: key_path.clone(),
                found_type: other.type_str(),
            }),
        }
    }
}
