// Layer dependency rules over the demo catalog.

use archgate_enforce::builder::Types;
use archgate_core::types::{Member, TypeDescriptor, TypeRef};

use crate::common::*;

#[test]
/// Controllers reach services but never repositories.
fn test_controllers_depend_on_services_not_repositories() {
    let catalog = demo_catalog();
    let result = Types::in_catalog(&catalog)
        .that()
        .reside_in_namespace(CONTROLLERS)
        .should()
        .have_dependency_on(SERVICES)
        .and()
        .not_have_dependency_on(REPOSITORIES)
        .get_result()
        .unwrap();
    assert!(result.passed, "{:?}", result.violating_type_names);
    assert_eq!(result.candidates, 1);
}

#[test]
fn test_services_depend_on_repository_interfaces_not_controllers() {
    let catalog = demo_catalog();
    let result = Types::in_catalog(&catalog)
        .that()
        .reside_in_namespace(SERVICES)
        .and()
        .are_classes()
        .should()
        .have_dependency_on(REPOSITORY_INTERFACES)
        .and()
        .not_have_dependency_on(CONTROLLERS)
        .get_result()
        .unwrap();
    assert!(result.passed, "{:?}", result.violating_type_names);
}

#[test]
fn test_repositories_do_not_depend_on_services_or_controllers() {
    let catalog = demo_catalog();
    let result = Types::in_catalog(&catalog)
        .that()
        .reside_in_namespace(REPOSITORIES)
        .should()
        .not_have_dependency_on(SERVICE_INTERFACES)
        .and()
        .not_have_dependency_on(CONTROLLERS)
        .get_result()
        .unwrap();
    assert!(result.passed);
    assert_eq!(result.candidates, 4);
}

#[test]
/// A controller that takes a repository directly breaks the layering rule.
fn test_controller_reaching_into_repository_is_reported() {
    let catalog = demo_catalog_with(vec![TypeDescriptor::class(CONTROLLERS, "AdminController")
        .with_base(TypeRef::external("Microsoft.AspNetCore.Mvc.ControllerBase"))
        .with_member(Member::method(
            "Purge",
            vec![TypeRef::new("Architecture.Repositories.Interfaces.IItemRepository")],
        ))]);
    let result = Types::in_catalog(&catalog)
        .that()
        .reside_in_namespace(CONTROLLERS)
        .should()
        .not_have_dependency_on(REPOSITORIES)
        .get_result()
        .unwrap();
    assert!(!result.passed);
    assert_eq!(result.violating_type_names, vec!["AdminController"]);
    assert_eq!(
        result.violating_full_names,
        vec!["Architecture.Controllers.AdminController"]
    );
}

#[test]
/// Dependencies through generic arguments count.
fn test_generic_argument_creates_dependency() {
    let catalog = demo_catalog_with(vec![TypeDescriptor::class(MODELS, "ItemPage").with_member(
        Member::property(
            "Items",
            TypeRef::external("System.Collections.Generic.List")
                .with_argument(TypeRef::new("Architecture.Services.Interfaces.IItemService")),
        ),
    )]);
    let result = Types::in_catalog(&catalog)
        .that()
        .reside_in_namespace(MODELS)
        .should()
        .not_have_dependency_on(SERVICES)
        .get_result()
        .unwrap();
    assert_eq!(result.violating_type_names, vec!["ItemPage"]);
}

#[test]
/// `Architecture.Service` is not a prefix namespace of `Architecture.Services`.
fn test_namespace_prefix_is_not_containment() {
    let catalog = demo_catalog();
    let result = Types::in_catalog(&catalog)
        .that()
        .reside_in_namespace(CONTROLLERS)
        .should()
        .have_dependency_on("Architecture.Service")
        .get_result()
        .unwrap();
    assert!(!result.passed);
}
