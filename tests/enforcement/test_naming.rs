// Naming convention rules.

use archgate_core::types::TypeDescriptor;
use archgate_enforce::builder::Types;

use crate::common::*;

#[test]
fn test_controller_names_end_with_controller() {
    let catalog = demo_catalog();
    let result = Types::in_catalog(&catalog)
        .that()
        .reside_in_namespace(CONTROLLERS)
        .should()
        .have_name_ending_with("Controller")
        .get_result()
        .unwrap();
    assert!(result.passed);
}

#[test]
/// The interfaces namespace is nested under services, so it is included.
fn test_service_names_end_with_service() {
    let catalog = demo_catalog();
    let result = Types::in_catalog(&catalog)
        .that()
        .reside_in_namespace(SERVICES)
        .should()
        .have_name_ending_with("Service")
        .get_result()
        .unwrap();
    assert!(result.passed);
    assert_eq!(result.candidates, 3);
}

#[test]
fn test_repository_names_end_with_repository_or_start_with_generic() {
    let catalog = demo_catalog();
    let result = Types::in_catalog(&catalog)
        .that()
        .reside_in_namespace(REPOSITORIES)
        .and()
        .are_classes()
        .should()
        .have_name_ending_with("Repository")
        .or()
        .have_name_starting_with("Generic")
        .get_result()
        .unwrap();
    assert!(result.passed);
    assert_eq!(result.candidates, 2);
}

#[test]
/// A misnamed controller is the only violator.
fn test_misnamed_controller() {
    let catalog = demo_catalog_with(vec![TypeDescriptor::class("Controllers", "ItemCtrl")]);
    let result = Types::in_catalog(&catalog)
        .that()
        .reside_in_namespace("Controllers")
        .should()
        .have_name_ending_with("Controller")
        .get_result()
        .unwrap();
    assert!(!result.passed);
    assert_eq!(result.violating_type_names, vec!["ItemCtrl"]);
}

#[test]
fn test_services_pair_with_same_name_interface() {
    let catalog = demo_catalog();
    let result = Types::in_catalog(&catalog)
        .that()
        .reside_in_namespace(SERVICES)
        .and()
        .are_classes()
        .should()
        .have_matching_interface()
        .get_result()
        .unwrap();
    assert!(result.passed);
}

#[test]
fn test_repositories_pair_with_same_name_interface() {
    let catalog = demo_catalog();
    let result = Types::in_catalog(&catalog)
        .that()
        .reside_in_namespace(REPOSITORIES)
        .and()
        .are_classes()
        .should()
        .have_matching_interface()
        .get_result()
        .unwrap();
    assert!(result.passed, "{:?}", result.violating_type_names);
}

#[test]
fn test_unpaired_service_is_reported() {
    let catalog = demo_catalog_with(vec![TypeDescriptor::class(SERVICES, "AuditService")
        .implementing(archgate_core::types::TypeRef::new(
            "Architecture.Services.Interfaces.INewService",
        ))]);
    let result = Types::in_catalog(&catalog)
        .that()
        .reside_in_namespace(SERVICES)
        .and()
        .are_classes()
        .should()
        .have_matching_interface()
        .get_result()
        .unwrap();
    assert_eq!(result.violating_type_names, vec!["AuditService"]);
}
