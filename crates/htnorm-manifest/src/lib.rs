//! Manifest loading and version consistency checks.
//!
//! A [`VersionCheck`] reads a TOML packaging manifest, follows a
//! [`KeyPath`] to the declared version and compares it byte for byte
//! with the version a library advertises.

pub mod check;
pub mod error;
pub mod key_path;
pub mod manifest;
pub mod version;

pub use check::{CheckReport, ManifestKind, VersionCheck};
pub use error::{CheckError, CheckResult, ErrorKind};
pub use key_path::KeyPath;
pub use manifest::{Manifest, MAX_MANIFEST_BYTES};
pub use version::VersionString;
