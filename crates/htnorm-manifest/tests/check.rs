use std::fs;
use std::path::{Path, PathBuf};

use htnorm_manifest::{CheckError, ErrorKind, VersionCheck};
use tempfile::TempDir;

fn write_pyproject(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("pyproject.toml");
    fs::write(&path, body).unwrap();
    path
}

fn poetry(version: &str) -> String {
    format!(
        "[tool.poetry]\nname = \"pyhtnorm\"\nversion = \"{}\"\n\n[tool.poetry.dependencies]\npython = \"^3.7\"\n",
        version
    )
}

#[test]
fn passes_when_versions_match() {
    let tmp = TempDir::new().unwrap();
    let path = write_pyproject(tmp.path(), &poetry("1.2.3"));

    let report = VersionCheck::new("1.2.3", &path).run().unwrap();
    assert_eq!(report.expected.as_str(), "1.2.3");
    assert_eq!(report.found.as_str(), "1.2.3");
    assert_eq!(report.manifest, path);
}

#[test]
fn mismatch_reports_both_values() {
    let tmp = TempDir::new().unwrap();
    let path = write_pyproject(tmp.path(), &poetry("1.2.3"));

    let err = VersionCheck::new("1.2.4", &path).run().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Assertion);
    match &err {
        CheckError::Mismatch { expected, found, .. } => {
            assert_eq!(expected.as_str(), "1.2.4");
            assert_eq!(found.as_str(), "1.2.3");
        }
        other => panic!("expected mismatch, got {}", other),
    }
    let msg = err.to_string();
    assert!(msg.contains("1.2.4") && msg.contains("1.2.3"), "{}", msg);
}

#[test]
fn near_misses_are_mismatches() {
    let tmp = TempDir::new().unwrap();
    for declared in ["v1.2.3", "1.2.3 ", "1.2.3rc1", "1.2"] {
        let path = write_pyproject(tmp.path(), &poetry(declared));
        let err = VersionCheck::new("1.2.3", &path).run().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Assertion, "{:?} should not match", declared);
    }
}

#[test]
fn missing_manifest_is_resource_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("pyproject.toml");

    let err = VersionCheck::new("1.2.3", &path).run().unwrap_err();
    assert!(matches!(err, CheckError::Io { .. }), "{}", err);
    assert_eq!(err.kind(), ErrorKind::Resource);
    assert_ne!(err.kind().code(), ErrorKind::Assertion.code());
}

#[test]
fn missing_version_key_is_lookup_error() {
    let tmp = TempDir::new().unwrap();
    let path = write_pyproject(tmp.path(), "[tool.poetry]\nname = \"pyhtnorm\"\n");

    let err = VersionCheck::new("1.2.3", &path).run().unwrap_err();
    assert!(matches!(err, CheckError::MissingKey { .. }), "{}", err);
    assert_eq!(err.kind(), ErrorKind::Resource);
}

#[test]
fn malformed_manifest_is_parse_error() {
    let tmp = TempDir::new().unwrap();
    let path = write_pyproject(tmp.path(), "[tool.poetry\nversion = \"1.2.3\"\n");

    let err = VersionCheck::new("1.2.3", &path).run().unwrap_err();
    assert!(matches!(err, CheckError::Parse { .. }), "{}", err);
    assert_eq!(err.kind(), ErrorKind::Resource);
}

#[test]
fn oversized_manifest_is_rejected() {
    let tmp = TempDir::new().unwrap();
    let mut body = poetry("1.2.3");
    body.push_str(&"# padding\n".repeat(110_000));
    let path = write_pyproject(tmp.path(), &body);

    let err = VersionCheck::new("1.2.3", &path).run().unwrap_err();
    assert!(matches!(err, CheckError::TooLarge { .. }), "{}", err);
}

#[test]
fn repeated_runs_are_idempotent_and_read_only() {
    let tmp = TempDir::new().unwrap();
    let path = write_pyproject(tmp.path(), &poetry("1.2.3"));
    let before = fs::read(&path).unwrap();

    let passing = VersionCheck::new("1.2.3", &path);
    let failing = VersionCheck::new("1.2.4", &path);
    for _ in 0..5 {
        assert!(passing.run().is_ok());
        assert_eq!(failing.run().unwrap_err().kind(), ErrorKind::Assertion);
    }

    assert_eq!(fs::read(&path).unwrap(), before);
}

#[test]
fn detected_kind_reads_workspace_version() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("Cargo.toml");
    fs::write(
        &path,
        "[workspace]\nmembers = [\"crates/htnorm\"]\n\n[workspace.package]\nversion = \"0.9.1\"\n",
    )
    .unwrap();

    let report = VersionCheck::new("0.9.1", &path).with_detected_kind().run().unwrap();
    assert_eq!(report.key_path.to_string(), "workspace.package.version");
    assert_eq!(report.found.as_str(), "0.9.1");
}
