//! Dotted key paths into a TOML document.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::CheckError;

/// Non-empty sequence of table keys, written `tool.poetry.version`.
///
/// Segments are bare keys: empty segments and segments containing
/// whitespace are rejected rather than trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    /// Build from known-good segments, bypassing parsing.
    pub(crate) fn from_segments<'a>(segments: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            segments: segments.into_iter().map(str::to_string).collect(),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl FromStr for KeyPath {
    type Err = CheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let segments: Vec<String> = s.split('.').map(str::to_string).collect();
        if segments
            .iter()
            .any(|seg| seg.is_empty() || seg.chars().any(char::is_whitespace))
        {
            return Err(CheckError::InvalidKeyPath(s.to_string()));
        }
        Ok(Self { segments })
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

impl Serialize for KeyPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
