// Tests for `archgate init`.

use tempfile::TempDir;

use crate::common::*;

#[test]
fn test_init_creates_config_and_rules() {
    let dir = TempDir::new().unwrap();
    let out = run_archgate(dir.path(), &["init"]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let config_dir = dir.path().join(".archgate");
    let config = archgate_core::config::ArchgateConfig::load(&config_dir);
    assert_eq!(config.catalog, "catalog.json");
    assert!(config.enforce.parallel);

    let rules = std::fs::read_to_string(config_dir.join("rules.json")).unwrap();
    let file = archgate_enforce::definition::RuleFile::from_json(&rules).unwrap();
    assert!(!file.rules.is_empty());
}

#[test]
fn test_init_twice_fails() {
    let dir = TempDir::new().unwrap();
    assert!(run_archgate(dir.path(), &["init"]).status.success());
    let out = run_archgate(dir.path(), &["init"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("archgate init:"));
}

#[test]
/// After init and dropping in a snapshot, the starter rules pass on the demo.
fn test_init_then_check() {
    let dir = TempDir::new().unwrap();
    assert!(run_archgate(dir.path(), &["init"]).status.success());
    std::fs::write(dir.path().join(".archgate/catalog.json"), ARCHITECTURE_JSON).unwrap();
    let out = run_archgate(dir.path(), &["check"]);
    assert_eq!(
        out.status.code(),
        Some(0),
        "stdout: {}",
        String::from_utf8_lossy(&out.stdout)
    );
}
