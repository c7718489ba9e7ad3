// Contract: `types`, `deps`, and `cycles` JSON listings.

use archgate_enforce::inspect;
use archgate_output::json::JsonFormatter;
use archgate_output::OutputFormatter;

use super::test_schema_helpers::validate_against_schema;
use crate::common::*;

const TYPES_SCHEMA: &str = r#"{
    "type": "object",
    "required": ["version", "command", "assembly", "namespace", "types"],
    "properties": {
        "command": { "const": "types" },
        "namespace": { "type": ["string", "null"] },
        "types": {
            "type": "array",
            "items": {
                "type": "object",
                "required": ["full_name", "kind", "visibility", "generic_arity", "base_type", "interfaces"],
                "properties": {
                    "kind": { "enum": ["class", "interface"] },
                    "visibility": { "enum": ["public", "non_public"] },
                    "generic_arity": { "type": "integer", "minimum": 0 },
                    "base_type": { "type": ["string", "null"] },
                    "interfaces": { "type": "array", "items": { "type": "string" } }
                }
            }
        }
    }
}"#;

const DEPS_SCHEMA: &str = r#"{
    "type": "object",
    "required": ["version", "command", "type_name", "outgoing", "incoming", "in_cycle"],
    "properties": {
        "command": { "const": "deps" },
        "outgoing": {
            "type": "array",
            "items": {
                "type": "object",
                "required": ["target", "target_namespace", "kind", "resolved"],
                "properties": {
                    "kind": { "enum": ["inheritance", "interface_implementation", "member_signature", "annotation"] },
                    "resolved": { "type": "boolean" }
                }
            }
        },
        "incoming": { "type": "array", "items": { "type": "string" } },
        "in_cycle": { "type": "boolean" }
    }
}"#;

const CYCLES_SCHEMA: &str = r#"{
    "type": "object",
    "required": ["version", "command", "assembly", "cycles"],
    "properties": {
        "command": { "const": "cycles" },
        "cycles": {
            "type": "array",
            "items": { "type": "array", "items": { "type": "string" }, "minItems": 1 }
        }
    }
}"#;

#[test]
fn test_types_listing_matches_schema() {
    let catalog = demo_catalog();
    let listing = inspect::list_types(&catalog, None);
    let value: serde_json::Value =
        serde_json::from_str(&JsonFormatter.format_types(&listing)).unwrap();
    validate_against_schema(&value, TYPES_SCHEMA);
}

#[test]
fn test_deps_listing_matches_schema() {
    let catalog = demo_catalog();
    for ty in catalog.all_types() {
        let listing = inspect::describe_dependencies(&catalog, &ty.full_name).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&JsonFormatter.format_dependencies(&listing)).unwrap();
        validate_against_schema(&value, DEPS_SCHEMA);
    }
}

#[test]
fn test_cycles_listing_matches_schema() {
    let catalog = demo_catalog();
    let value: serde_json::Value =
        serde_json::from_str(&JsonFormatter.format_cycles(&inspect::list_cycles(&catalog))).unwrap();
    validate_against_schema(&value, CYCLES_SCHEMA);
}
