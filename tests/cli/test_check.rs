// Tests for `archgate check` output.

use crate::common::*;

#[test]
fn test_check_human_summary() {
    let (_dir, root) = setup_project(RULES_JSON);
    let out = run_archgate(&root, &["check"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Architecture: 12 passed, 0 failed, 0 vacuous (12 rules) [ok]"), "{stdout}");
}

#[test]
fn test_check_json_report() {
    let (_dir, root) = setup_project(RULES_JSON);
    let out = run_archgate(&root, &["check", "--json"]);
    assert!(out.status.success());
    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(report["command"], "check");
    assert_eq!(report["status"], "ok");
    assert_eq!(report["summary"]["total"], 12);
    assert_eq!(report["results"].as_array().unwrap().len(), 12);
}

#[test]
fn test_check_reports_violators() {
    let rules = r#"{"rules": [{
        "that": [{ "reside_in_namespace": "Architecture" }],
        "should": [{ "have_name_ending_with": "Service" }]
    }]}"#;
    let (_dir, root) = setup_project(rules);
    let out = run_archgate(&root, &["check"]);
    assert_eq!(out.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("FAIL: Types that reside in namespace `Architecture` should have name ending with `Service`"));
    assert!(stdout.contains("  - Architecture.Controllers.ItemController\n"));
    assert!(!stdout.contains("  - Architecture.Services.ItemService\n"));
}

#[test]
fn test_check_explicit_paths() {
    let dir = tempfile::TempDir::new().unwrap();
    let catalog = dir.path().join("snapshot.json");
    let rules = dir.path().join("arch-rules.json");
    std::fs::write(&catalog, ARCHITECTURE_JSON).unwrap();
    std::fs::write(&rules, RULES_JSON).unwrap();
    let out = run_archgate(
        dir.path(),
        &[
            "check",
            "--catalog",
            catalog.to_str().unwrap(),
            "--rules",
            rules.to_str().unwrap(),
        ],
    );
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
}
