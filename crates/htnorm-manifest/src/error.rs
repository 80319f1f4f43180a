//! Check Error Types
//!
//! Every failure is either an assertion mismatch or a resource problem.
//! The two kinds map to distinct exit codes.

use std::path::PathBuf;

use crate::key_path::KeyPath;
use crate::version::VersionString;

/// Failure category of a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The compared versions differ.
    Assertion = 1,
    /// The manifest could not be read, parsed, or navigated.
    Resource = 2,
}

impl ErrorKind {
    pub fn code(&self) -> i32 {
        *self as i32
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Assertion => "assertion",
            ErrorKind::Resource => "resource",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("version mismatch in {}: library reports {expected:?} but {key_path} is {found:?}", .path.display())]
    Mismatch {
        path: PathBuf,
        key_path: KeyPath,
        expected: VersionString,
        found: VersionString,
    },

    #[error("failed to read manifest {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("manifest {} is too large ({size} bytes, max {max})", .path.display())]
    TooLarge { path: PathBuf, size: u64, max: u64 },

    #[error("failed to parse manifest {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("manifest {} has no value at {key_path}", .path.display())]
    MissingKey { path: PathBuf, key_path: KeyPath },

    #[error("{key_path} in {} must be a string, found {found_type}", .path.display())]
    NotAString {
        path: PathBuf,
        key_path: KeyPath,
        found_type: &'static str,
    },

    #[error("invalid key path {0:?}")]
    InvalidKeyPath(String),
}

impl CheckError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CheckError::Mismatch { .. } => ErrorKind::Assertion,
            _ => ErrorKind::Resource,
        }
    }
}

/// Result type used throughout the crate.
pub type CheckResult<T> = Result<T, CheckError>;
