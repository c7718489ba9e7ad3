use archgate_core::catalog::TypeCatalog;
use archgate_core::namespace_contains;
use archgate_core::type_name::TypePattern;
use archgate_core::types::{MemberKind, TypeDescriptor, TypeId};
use serde::{Deserialize, Serialize};

use crate::types::RuleError;

/// A per-type test. The same predicates drive selectors (which types a rule
/// looks at) and conditions (what must hold for each of them).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Predicate {
    ResideInNamespace(String),
    AreClasses,
    AreInterfaces,
    AreGenericTypeDefinitions,
    ArePublic,
    ImplementInterface(TypePattern),
    /// Direct base type only, never transitive.
    Inherit(TypePattern),
    HaveNameEndingWith(String),
    HaveNameStartingWith(String),
    HaveAnnotation(String),
    HaveMember(String),
    HaveProperty(String),
    HaveMethod(String),
    HaveDependencyOn(String),
    /// Classes must implement `I<Name>`; other kinds always hold.
    HaveMatchingInterface,
    BeInDependencyCycle,
}

/// Grammatical mood used when describing a predicate: selectors read
/// "types that are classes", conditions read "should be classes".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Indicative,
    Infinitive,
}

impl Predicate {
    pub fn test(&self, catalog: &TypeCatalog, id: TypeId) -> bool {
        let ty = catalog.get(id);
        match self {
            Predicate::ResideInNamespace(ns) => namespace_contains(ns, &ty.namespace),
            Predicate::AreClasses => ty.is_class(),
            Predicate::AreInterfaces => ty.is_interface(),
            Predicate::AreGenericTypeDefinitions => ty.is_generic_definition(),
            Predicate::ArePublic => ty.is_public(),
            Predicate::ImplementInterface(pattern) => {
                ty.interfaces.iter().any(|i| pattern.matches(i))
            }
            Predicate::Inherit(pattern) => ty.base_type.as_ref().is_some_and(|b| pattern.matches(b)),
            Predicate::HaveNameEndingWith(suffix) => ty.name.ends_with(suffix.as_str()),
            Predicate::HaveNameStartingWith(prefix) => ty.name.starts_with(prefix.as_str()),
            Predicate::HaveAnnotation(annotation) => ty.annotations.iter().any(|a| a == annotation),
            Predicate::HaveMember(name) => ty.members.iter().any(|m| m.name == *name),
            Predicate::HaveProperty(name) => has_member(ty, name, MemberKind::Property),
            Predicate::HaveMethod(name) => has_member(ty, name, MemberKind::Method),
            Predicate::HaveDependencyOn(ns) => catalog.dependency_graph().depends_on(id, ns),
            Predicate::HaveMatchingInterface => has_matching_interface(ty),
            Predicate::BeInDependencyCycle => catalog.dependency_graph().in_cycle(id),
        }
    }

    /// Reject arguments that can only be programmer mistakes.
    pub fn validate(&self, catalog: &TypeCatalog) -> Result<(), RuleError> {
        match self {
            Predicate::ResideInNamespace(ns) | Predicate::HaveDependencyOn(ns) => {
                if ns.is_empty() || ns.split('.').any(str::is_empty) {
                    return Err(RuleError::invalid(format!(
                        "{}: `{ns}` is not a valid namespace",
                        self.phrase(Mood::Infinitive, false)
                    )));
                }
                Ok(())
            }
            Predicate::HaveNameEndingWith(s)
            | Predicate::HaveNameStartingWith(s)
            | Predicate::HaveAnnotation(s)
            | Predicate::HaveMember(s)
            | Predicate::HaveProperty(s)
            | Predicate::HaveMethod(s) => {
                if s.is_empty() {
                    return Err(RuleError::invalid(format!(
                        "{}: argument must not be empty",
                        self.phrase(Mood::Infinitive, false)
                    )));
                }
                Ok(())
            }
            Predicate::ImplementInterface(pattern) => {
                if let Some(target) = check_pattern(catalog, pattern)? {
                    if !target.is_interface() {
                        return Err(RuleError::invalid(format!(
                            "implement interface: `{}` is a class, not an interface",
                            pattern.name()
                        )));
                    }
                }
                Ok(())
            }
            Predicate::Inherit(pattern) => {
                if let Some(target) = check_pattern(catalog, pattern)? {
                    if target.is_interface() {
                        return Err(RuleError::invalid(format!(
                            "inherit: `{}` is an interface; use implement_interface",
                            pattern.name()
                        )));
                    }
                }
                Ok(())
            }
            Predicate::AreClasses
            | Predicate::AreInterfaces
            | Predicate::AreGenericTypeDefinitions
            | Predicate::ArePublic
            | Predicate::HaveMatchingInterface
            | Predicate::BeInDependencyCycle => Ok(()),
        }
    }

    /// Human-readable verb phrase, e.g. "reside in namespace `A`" or
    /// "are not classes".
    pub fn phrase(&self, mood: Mood, negated: bool) -> String {
        let (verb, rest) = match self {
            Predicate::ResideInNamespace(ns) => (Verb::Do("reside"), format!("in namespace `{ns}`")),
            Predicate::AreClasses => (Verb::Be, "classes".to_string()),
            Predicate::AreInterfaces => (Verb::Be, "interfaces".to_string()),
            Predicate::AreGenericTypeDefinitions => {
                (Verb::Be, "generic type definitions".to_string())
            }
            Predicate::ArePublic => (Verb::Be, "public".to_string()),
            Predicate::ImplementInterface(p) => (Verb::Do("implement"), format!("interface `{p}`")),
            Predicate::Inherit(p) => (Verb::Do("inherit"), format!("from `{p}`")),
            Predicate::HaveNameEndingWith(s) => (Verb::Do("have"), format!("name ending with `{s}`")),
            Predicate::HaveNameStartingWith(s) => {
                (Verb::Do("have"), format!("name starting with `{s}`"))
            }
            Predicate::HaveAnnotation(a) => (Verb::Do("have"), format!("annotation `{a}`")),
            Predicate::HaveMember(m) => (Verb::Do("have"), format!("member `{m}`")),
            Predicate::HaveProperty(m) => (Verb::Do("have"), format!("property `{m}`")),
            Predicate::HaveMethod(m) => (Verb::Do("have"), format!("method `{m}`")),
            Predicate::HaveDependencyOn(ns) => (Verb::Do("have"), format!("dependency on `{ns}`")),
            Predicate::HaveMatchingInterface => {
                (Verb::Do("implement"), "a same-name interface".to_string())
            }
            Predicate::BeInDependencyCycle => (Verb::Be, "in a dependency cycle".to_string()),
        };
        let head = match (verb, mood, negated) {
            (Verb::Be, Mood::Indicative, false) => "are".to_string(),
            (Verb::Be, Mood::Indicative, true) => "are not".to_string(),
            (Verb::Be, Mood::Infinitive, false) => "be".to_string(),
            (Verb::Be, Mood::Infinitive, true) => "not be".to_string(),
            (Verb::Do(v), Mood::Indicative, true) => format!("do not {v}"),
            (Verb::Do(v), Mood::Infinitive, true) => format!("not {v}"),
            (Verb::Do(v), _, false) => v.to_string(),
        };
        format!("{head} {rest}")
    }
}

#[derive(Clone, Copy)]
enum Verb {
    Be,
    Do(&'static str),
}

fn has_member(ty: &TypeDescriptor, name: &str, kind: MemberKind) -> bool {
    ty.members.iter().any(|m| m.kind == kind && m.name == name)
}

fn has_matching_interface(ty: &TypeDescriptor) -> bool {
    if !ty.is_class() {
        return true;
    }
    ty.interfaces.iter().any(|i| {
        i.simple_name()
            .strip_prefix('I')
            .is_some_and(|rest| rest == ty.name)
    })
}

/// Check a pattern against the catalog's declaration of the type it names.
/// Returns the declaration when there is one; unknown names are external.
fn check_pattern<'c>(
    catalog: &'c TypeCatalog,
    pattern: &TypePattern,
) -> Result<Option<&'c TypeDescriptor>, RuleError> {
    let Some(target) = catalog.lookup(pattern.name()) else {
        return Ok(None);
    };
    if pattern.is_open_generic() && !target.is_generic_definition() {
        return Err(RuleError::invalid(format!(
            "`{pattern}` requests a generic type definition but `{}` is not generic",
            target.full_name
        )));
    }
    if target.is_generic_definition() && pattern.arity() == 0 {
        return Err(RuleError::invalid(format!(
            "`{}` is a generic type definition; name it as `{}<{}>`",
            target.full_name,
            target.full_name,
            ",".repeat(target.generic_arity() - 1)
        )));
    }
    if pattern.arity() != target.generic_arity() {
        return Err(RuleError::invalid(format!(
            "`{pattern}` has {} generic argument(s) but `{}` declares {}",
            pattern.arity(),
            target.full_name,
            target.generic_arity()
        )));
    }
    Ok(Some(target))
}

#[cfg(test)]
#[path = "predicate_tests.rs"]
mod tests;
