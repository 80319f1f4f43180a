//! htnorm
//!
//! Public version surface of the library. Release tooling compares this
//! value against the packaging manifests before anything is published.

/// Release identifier of this build, taken from the workspace manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_not_empty() {
        assert!(!VERSION.is_empty());
    }
}
