use std::fmt;

use serde::Serialize;

/// A release identifier such as `1.2.3` or `0.2.0rc1`.
///
/// Equality is byte equality. No trimming, prefix stripping or
/// normalisation happens, so `"1.2.3"` and `"v1.2.3"` are different.
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct VersionString(String);

impl VersionString {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for VersionString {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for VersionString {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for VersionString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Debug output is the quoted string so error messages show exact bytes.
impl fmt::Debug for VersionString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_is_exact() {
        assert_eq!(VersionString::from("1.2.3"), VersionString::from("1.2.3"));
        assert_ne!(VersionString::from("1.2.3"), VersionString::from("v1.2.3"));
        assert_ne!(VersionString::from("1.2.3"), VersionString::from("1.2.3 "));
        assert_ne!(VersionString::from("1.2.3"), VersionString::from("1.2.3-rc1"));
    }

    #[test]
    fn test_debug_shows_quoted_value() {
        assert_eq!(format!("{:?}", VersionString::from("1.2.3 ")), "\"1.2.3 \"");
        assert_eq!(VersionString::from("1.2.3").to_string(), "1.2.3");
    }
}
