// Vacuous truth: rules whose selector matches nothing.

use archgate_enforce::builder::Types;
use archgate_enforce::engine::ConformanceEngine;
use archgate_enforce::types::ReportStatus;

use crate::common::*;

#[test]
/// Chained namespaces are intersected, so no class lives in all of them.
fn test_classes_public_across_disjoint_namespaces_is_vacuous() {
    let catalog = demo_catalog();
    let result = Types::in_catalog(&catalog)
        .that()
        .reside_in_namespace(CONTROLLERS)
        .and()
        .reside_in_namespace(SERVICES)
        .and()
        .reside_in_namespace(REPOSITORIES)
        .and()
        .reside_in_namespace(MODELS)
        .and()
        .are_classes()
        .should()
        .be_public()
        .get_result()
        .unwrap();
    assert!(result.passed);
    assert!(result.is_vacuous());
    assert!(result.violating_type_names.is_empty());
}

#[test]
fn test_interfaces_public_across_disjoint_namespaces_is_vacuous() {
    let catalog = demo_catalog();
    let result = Types::in_catalog(&catalog)
        .that()
        .reside_in_namespace(SERVICES)
        .and()
        .reside_in_namespace(REPOSITORIES)
        .and()
        .reside_in_namespace(MODELS)
        .and()
        .are_interfaces()
        .should()
        .be_public()
        .get_result()
        .unwrap();
    assert!(result.is_vacuous());
}

#[test]
fn test_vacuous_rule_makes_report_a_warning() {
    let catalog = demo_catalog();
    let rule = Types::in_catalog(&catalog)
        .that()
        .reside_in_namespace("Architecture.Nowhere")
        .should()
        .be_public()
        .build()
        .unwrap();
    let report = ConformanceEngine::new(&catalog).evaluate_all(&[rule]);
    assert_eq!(report.status, ReportStatus::Warning);
    assert!(report.is_success(false));
    assert!(!report.is_success(true));
}
