// Algebraic and determinism properties of evaluation.

use archgate_enforce::assertion::Assertion;
use archgate_enforce::engine::ConformanceEngine;
use archgate_enforce::rule::Rule;
use archgate_enforce::selector::Selector;

use crate::common::*;

fn selectors() -> Vec<Selector> {
    vec![
        Selector::reside_in_namespace(REPOSITORIES),
        Selector::are_classes(),
        Selector::are_interfaces(),
        Selector::are_generic_type_definitions(),
        Selector::reside_in_namespace("Architecture"),
        Selector::reside_in_namespace(MODELS).not(),
    ]
}

#[test]
fn test_and_or_are_commutative_for_every_pair() {
    let catalog = demo_catalog();
    let all = selectors();
    for a in &all {
        for b in &all {
            assert_eq!(
                a.clone().and(b.clone()).select(&catalog),
                b.clone().and(a.clone()).select(&catalog)
            );
            assert_eq!(
                a.clone().or(b.clone()).select(&catalog),
                b.clone().or(a.clone()).select(&catalog)
            );
        }
    }
}

#[test]
fn test_namespace_includes_nested_and_excludes_siblings() {
    let catalog = demo_catalog_with(vec![archgate_core::types::TypeDescriptor::class(
        "Architecture.ServicesExtras",
        "Helper",
    )]);
    let names: Vec<String> = Selector::reside_in_namespace(SERVICES)
        .select(&catalog)
        .into_iter()
        .map(|id| catalog.get(id).name.clone())
        .collect();
    assert_eq!(names, vec!["IItemService", "INewService", "ItemService"]);
}

#[test]
/// Evaluating twice gives byte-identical reports.
fn test_report_is_idempotent() {
    let catalog = demo_catalog();
    let rules = vec![
        Rule::new(&catalog, Selector::all(), Assertion::name_suffix("Service"), None).unwrap(),
        Rule::new(&catalog, Selector::are_classes(), Assertion::same_name_interface_pairing(), None)
            .unwrap(),
    ];
    let engine = ConformanceEngine::new(&catalog);
    let first = serde_json::to_string(&engine.evaluate_all(&rules)).unwrap();
    let second = serde_json::to_string(&engine.evaluate_all(&rules)).unwrap();
    assert_eq!(first, second);
}

#[test]
/// Violators follow declaration order regardless of parallel evaluation.
fn test_violators_in_declaration_order() {
    let catalog = demo_catalog();
    let rule = Rule::new(&catalog, Selector::all(), Assertion::name_suffix("Nope"), None).unwrap();
    let result = rule.evaluate(&catalog);
    let expected: Vec<String> = catalog.all_types().iter().map(|t| t.name.clone()).collect();
    assert_eq!(result.violating_type_names, expected);
}
