// Contract: `archgate check --json` output.

use archgate_core::types::TypeDescriptor;
use archgate_enforce::definition::RuleFile;
use archgate_enforce::engine::ConformanceEngine;
use archgate_output::json::JsonFormatter;
use archgate_output::OutputFormatter;

use super::test_schema_helpers::validate_against_schema;
use crate::common::*;

const REPORT_SCHEMA: &str = r#"{
    "$schema": "http://json-schema.org/draft-07/schema#",
    "type": "object",
    "required": ["version", "command", "assembly", "catalog_hash", "status", "summary", "failures", "results"],
    "additionalProperties": false,
    "properties": {
        "version": { "type": "string" },
        "command": { "const": "check" },
        "assembly": { "type": "string" },
        "catalog_hash": { "type": "string", "pattern": "^[0-9A-Za-z]{11}$" },
        "status": { "enum": ["ok", "warning", "error"] },
        "summary": {
            "type": "object",
            "required": ["total", "passed", "failed", "vacuous"],
            "additionalProperties": false,
            "properties": {
                "total": { "type": "integer", "minimum": 0 },
                "passed": { "type": "integer", "minimum": 0 },
                "failed": { "type": "integer", "minimum": 0 },
                "vacuous": { "type": "integer", "minimum": 0 }
            }
        },
        "failures": {
            "type": "array",
            "items": {
                "type": "object",
                "required": ["description", "violating_type_names", "violating_full_names"],
                "additionalProperties": false,
                "properties": {
                    "description": { "type": "string" },
                    "violating_type_names": { "type": "array", "items": { "type": "string" }, "minItems": 1 },
                    "violating_full_names": { "type": "array", "items": { "type": "string" }, "minItems": 1 }
                }
            }
        },
        "results": {
            "type": "array",
            "items": {
                "type": "object",
                "required": ["description", "passed", "candidates", "violating_type_names", "violating_full_names"],
                "additionalProperties": false,
                "properties": {
                    "description": { "type": "string", "minLength": 1 },
                    "passed": { "type": "boolean" },
                    "candidates": { "type": "integer", "minimum": 0 },
                    "violating_type_names": { "type": "array", "items": { "type": "string" } },
                    "violating_full_names": { "type": "array", "items": { "type": "string" } }
                }
            }
        }
    }
}"#;

fn report_json(extra: Vec<TypeDescriptor>) -> serde_json::Value {
    let catalog = demo_catalog_with(extra);
    let rules = RuleFile::from_json(RULES_JSON).unwrap().compile_all(&catalog).unwrap();
    let report = ConformanceEngine::new(&catalog).evaluate_all(&rules);
    serde_json::from_str(&JsonFormatter.format_report(&report)).unwrap()
}

#[test]
fn test_passing_report_matches_schema() {
    let value = report_json(vec![]);
    validate_against_schema(&value, REPORT_SCHEMA);
    assert_eq!(value["status"], "ok");
}

#[test]
fn test_failing_report_matches_schema() {
    let value = report_json(vec![TypeDescriptor::class(CONTROLLERS, "ItemCtrl")]);
    validate_against_schema(&value, REPORT_SCHEMA);
    assert_eq!(value["status"], "error");
    let failures = value["failures"].as_array().unwrap();
    assert!(!failures.is_empty());
    for (failure, result) in failures.iter().zip(
        value["results"]
            .as_array()
            .unwrap()
            .iter()
            .filter(|r| r["passed"] == false),
    ) {
        assert_eq!(failure["description"], result["description"]);
    }
}

#[test]
fn test_summary_counts_are_consistent() {
    let value = report_json(vec![TypeDescriptor::class(CONTROLLERS, "ItemCtrl")]);
    let summary = &value["summary"];
    assert_eq!(
        summary["total"].as_u64().unwrap(),
        summary["passed"].as_u64().unwrap() + summary["failed"].as_u64().unwrap()
    );
    assert_eq!(
        summary["failed"].as_u64().unwrap() as usize,
        value["failures"].as_array().unwrap().len()
    );
}
