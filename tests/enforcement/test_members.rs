// Member presence rules.

use archgate_core::types::{Member, TypeDescriptor, TypeRef};
use archgate_enforce::builder::Types;

use crate::common::*;

fn models_have(property: &str) -> bool {
    let catalog = demo_catalog();
    Types::in_catalog(&catalog)
        .that()
        .reside_in_namespace(MODELS)
        .should()
        .have_property(property)
        .get_result()
        .unwrap()
        .passed
}

#[test]
fn test_models_have_id() {
    assert!(models_have("Id"));
}

#[test]
fn test_models_have_name() {
    assert!(models_have("Name"));
}

#[test]
fn test_models_have_description() {
    assert!(models_have("Description"));
}

#[test]
fn test_member_names_are_case_sensitive() {
    assert!(!models_have("id"));
}

#[test]
/// A field named `Id` is a member but not a property.
fn test_property_check_ignores_fields() {
    let catalog = demo_catalog_with(vec![TypeDescriptor::class(MODELS, "Tag")
        .with_member(Member::field("Id", TypeRef::external("System.Int32")))]);
    let property = Types::in_catalog(&catalog)
        .that()
        .reside_in_namespace(MODELS)
        .should()
        .have_property("Id")
        .get_result()
        .unwrap();
    assert_eq!(property.violating_type_names, vec!["Tag"]);
    let member = Types::in_catalog(&catalog)
        .that()
        .reside_in_namespace(MODELS)
        .should()
        .have_member("Id")
        .get_result()
        .unwrap();
    assert!(member.passed);
}
