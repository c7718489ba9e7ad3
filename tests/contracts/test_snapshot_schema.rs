// Contract: catalog snapshots survive a serialize/load cycle unchanged.

use archgate_core::catalog::TypeCatalog;

use crate::common::*;

#[test]
fn test_snapshot_reload_keeps_fingerprint() {
    let catalog = demo_catalog();
    let json = serde_json::to_string(&catalog.to_snapshot()).unwrap();
    let reloaded = TypeCatalog::from_json(&json).unwrap();
    assert_eq!(catalog.fingerprint(), reloaded.fingerprint());
    assert_eq!(catalog.len(), reloaded.len());
}

#[test]
fn test_snapshot_rejects_unmarked_unresolved_reference() {
    let json = ARCHITECTURE_JSON.replace(
        r#"{ "name": "Microsoft.AspNetCore.Mvc.ControllerBase", "external": true }"#,
        r#"{ "name": "Microsoft.AspNetCore.Mvc.ControllerBase" }"#,
    );
    assert_ne!(json, ARCHITECTURE_JSON);
    assert!(TypeCatalog::from_json(&json).is_err());
}
