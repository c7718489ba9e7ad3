//! Fluent rule construction.
//!
//! ```text
//! Types::in_catalog(&catalog)
//!     .that().reside_in_namespace("App.Controllers")
//!     .should().have_name_ending_with("Controller")
//!     .get_result()?
//! ```
//!
//! Every step consumes its receiver and returns a new value, so a partially
//! built chain can be cloned and extended in different directions. Argument
//! errors (bad namespaces, unparsable type patterns) are carried along the
//! chain and surface from [`ConditionList::build`] or
//! [`ConditionList::get_result`].

use archgate_core::catalog::TypeCatalog;
use archgate_core::type_name::TypePattern;
use archgate_core::types::TypeDescriptor;

use crate::assertion::{Assertion, Condition};
use crate::predicate::Predicate;
use crate::rule::{EvalOptions, Rule};
use crate::selector::Selector;
use crate::types::{RuleError, RuleResult};

/// Entry point: all types of one catalog.
#[derive(Debug, Clone, Copy)]
pub struct Types<'c> {
    catalog: &'c TypeCatalog,
}

impl<'c> Types<'c> {
    pub fn in_catalog(catalog: &'c TypeCatalog) -> Self {
        Self { catalog }
    }

    pub fn that(self) -> Predicates<'c> {
        Predicates {
            catalog: self.catalog,
            state: SelectorState::default(),
            error: None,
        }
    }

    /// Select every type in the catalog. Further predicates narrow it with `and()`.
    pub fn all_types(self) -> PredicateList<'c> {
        PredicateList {
            catalog: self.catalog,
            done: None,
            current: Selector::All,
            error: None,
        }
    }

    pub fn get_types(self) -> Vec<&'c TypeDescriptor> {
        self.catalog.all_types().iter().collect()
    }
}

/// Selector terms. `and` binds tighter than `or`: `done` holds the closed
/// alternatives, `current` the conjunction being extended.
#[derive(Debug, Clone, Default)]
struct SelectorState {
    done: Option<Selector>,
    current: Option<Selector>,
}

fn either(done: Option<Selector>, current: Selector) -> Selector {
    match done {
        Some(done) => done.or(current),
        None => current,
    }
}

/// Awaiting the next selector predicate.
#[derive(Debug, Clone)]
pub struct Predicates<'c> {
    catalog: &'c TypeCatalog,
    state: SelectorState,
    error: Option<String>,
}

/// At least one selector predicate has been given.
#[derive(Debug, Clone)]
pub struct PredicateList<'c> {
    catalog: &'c TypeCatalog,
    done: Option<Selector>,
    current: Selector,
    error: Option<String>,
}

impl<'c> Predicates<'c> {
    fn push(self, term: Selector) -> PredicateList<'c> {
        let current = match self.state.current {
            Some(Selector::All) | None => term,
            Some(current) => current.and(term),
        };
        PredicateList {
            catalog: self.catalog,
            done: self.state.done,
            current,
            error: self.error,
        }
    }

    fn is(self, predicate: Predicate) -> PredicateList<'c> {
        self.push(Selector::Is(predicate))
    }

    fn is_not(self, predicate: Predicate) -> PredicateList<'c> {
        self.push(Selector::Is(predicate).not())
    }

    fn with_pattern(
        mut self,
        pattern: &str,
        make: fn(TypePattern) -> Predicate,
        negated: bool,
    ) -> PredicateList<'c> {
        match TypePattern::parse(pattern) {
            Ok(p) if negated => self.is_not(make(p)),
            Ok(p) => self.is(make(p)),
            Err(e) => {
                self.error.get_or_insert(e.to_string());
                self.push(Selector::All)
            }
        }
    }

    pub fn reside_in_namespace(self, namespace: &str) -> PredicateList<'c> {
        self.is(Predicate::ResideInNamespace(namespace.to_string()))
    }

    pub fn do_not_reside_in_namespace(self, namespace: &str) -> PredicateList<'c> {
        self.is_not(Predicate::ResideInNamespace(namespace.to_string()))
    }

    pub fn are_classes(self) -> PredicateList<'c> {
        self.is(Predicate::AreClasses)
    }

    pub fn are_not_classes(self) -> PredicateList<'c> {
        self.is_not(Predicate::AreClasses)
    }

    pub fn are_interfaces(self) -> PredicateList<'c> {
        self.is(Predicate::AreInterfaces)
    }

    pub fn are_not_interfaces(self) -> PredicateList<'c> {
        self.is_not(Predicate::AreInterfaces)
    }

    pub fn are_generic_type_definitions(self) -> PredicateList<'c> {
        self.is(Predicate::AreGenericTypeDefinitions)
    }

    pub fn are_not_generic_type_definitions(self) -> PredicateList<'c> {
        self.is_not(Predicate::AreGenericTypeDefinitions)
    }

    pub fn are_public(self) -> PredicateList<'c> {
        self.is(Predicate::ArePublic)
    }

    pub fn are_not_public(self) -> PredicateList<'c> {
        self.is_not(Predicate::ArePublic)
    }

    pub fn implement_interface(self, pattern: &str) -> PredicateList<'c> {
        self.with_pattern(pattern, Predicate::ImplementInterface, false)
    }

    pub fn do_not_implement_interface(self, pattern: &str) -> PredicateList<'c> {
        self.with_pattern(pattern, Predicate::ImplementInterface, true)
    }

    pub fn have_base_type(self, pattern: &str) -> PredicateList<'c> {
        self.with_pattern(pattern, Predicate::Inherit, false)
    }

    pub fn inherit(self, pattern: &str) -> PredicateList<'c> {
        self.have_base_type(pattern)
    }

    pub fn do_not_inherit(self, pattern: &str) -> PredicateList<'c> {
        self.with_pattern(pattern, Predicate::Inherit, true)
    }

    pub fn have_name_ending_with(self, suffix: &str) -> PredicateList<'c> {
        self.is(Predicate::HaveNameEndingWith(suffix.to_string()))
    }

    pub fn have_name_starting_with(self, prefix: &str) -> PredicateList<'c> {
        self.is(Predicate::HaveNameStartingWith(prefix.to_string()))
    }

    pub fn have_annotation(self, annotation: &str) -> PredicateList<'c> {
        self.is(Predicate::HaveAnnotation(annotation.to_string()))
    }

    pub fn have_member(self, name: &str) -> PredicateList<'c> {
        self.is(Predicate::HaveMember(name.to_string()))
    }

    pub fn have_dependency_on(self, namespace: &str) -> PredicateList<'c> {
        self.is(Predicate::HaveDependencyOn(namespace.to_string()))
    }

    pub fn do_not_have_dependency_on(self, namespace: &str) -> PredicateList<'c> {
        self.is_not(Predicate::HaveDependencyOn(namespace.to_string()))
    }
}

impl<'c> PredicateList<'c> {
    pub fn and(self) -> Predicates<'c> {
        Predicates {
            catalog: self.catalog,
            state: SelectorState {
                done: self.done,
                current: Some(self.current),
            },
            error: self.error,
        }
    }

    /// Start an alternative: `a and b or c` selects `(a and b) or c`.
    pub fn or(self) -> Predicates<'c> {
        Predicates {
            catalog: self.catalog,
            state: SelectorState {
                done: Some(either(self.done, self.current)),
                current: None,
            },
            error: self.error,
        }
    }

    pub fn should(self) -> Conditions<'c> {
        let PredicateList {
            catalog,
            done,
            current,
            error,
        } = self;
        Conditions::new(catalog, either(done, current), error)
    }

    /// The selected types, in declaration order.
    pub fn get_types(self) -> Result<Vec<&'c TypeDescriptor>, RuleError> {
        let PredicateList {
            catalog,
            done,
            current,
            error,
        } = self;
        if let Some(e) = error {
            return Err(RuleError::invalid(e));
        }
        let selector = either(done, current);
        selector.validate(catalog)?;
        Ok(selector
            .select(catalog)
            .into_iter()
            .map(|id| catalog.get(id))
            .collect())
    }
}

/// Awaiting the next condition.
#[derive(Debug, Clone)]
pub struct Conditions<'c> {
    catalog: &'c TypeCatalog,
    selector: Selector,
    /// Closed alternative groups; `current` is the group being extended.
    done: Vec<Vec<Condition>>,
    current: Vec<Condition>,
    error: Option<String>,
}

/// At least one condition has been given.
#[derive(Debug, Clone)]
pub struct ConditionList<'c> {
    inner: Conditions<'c>,
    description: Option<String>,
}

impl<'c> Conditions<'c> {
    fn new(catalog: &'c TypeCatalog, selector: Selector, error: Option<String>) -> Self {
        Self {
            catalog,
            selector,
            done: Vec::new(),
            current: Vec::new(),
            error,
        }
    }

    fn push(mut self, condition: Condition) -> ConditionList<'c> {
        self.current.push(condition);
        ConditionList {
            inner: self,
            description: None,
        }
    }

    fn be(self, predicate: Predicate) -> ConditionList<'c> {
        self.push(Condition::new(predicate))
    }

    fn not_be(self, predicate: Predicate) -> ConditionList<'c> {
        self.push(Condition::negate(predicate))
    }

    fn with_pattern(
        mut self,
        pattern: &str,
        make: fn(TypePattern) -> Predicate,
        negated: bool,
    ) -> ConditionList<'c> {
        match TypePattern::parse(pattern) {
            Ok(p) if negated => self.not_be(make(p)),
            Ok(p) => self.be(make(p)),
            Err(e) => {
                self.error.get_or_insert(e.to_string());
                self.be(Predicate::AreClasses)
            }
        }
    }

    pub fn have_dependency_on(self, namespace: &str) -> ConditionList<'c> {
        self.be(Predicate::HaveDependencyOn(namespace.to_string()))
    }

    pub fn not_have_dependency_on(self, namespace: &str) -> ConditionList<'c> {
        self.not_be(Predicate::HaveDependencyOn(namespace.to_string()))
    }

    pub fn reside_in_namespace(self, namespace: &str) -> ConditionList<'c> {
        self.be(Predicate::ResideInNamespace(namespace.to_string()))
    }

    pub fn not_reside_in_namespace(self, namespace: &str) -> ConditionList<'c> {
        self.not_be(Predicate::ResideInNamespace(namespace.to_string()))
    }

    pub fn have_name_ending_with(self, suffix: &str) -> ConditionList<'c> {
        self.be(Predicate::HaveNameEndingWith(suffix.to_string()))
    }

    pub fn not_have_name_ending_with(self, suffix: &str) -> ConditionList<'c> {
        self.not_be(Predicate::HaveNameEndingWith(suffix.to_string()))
    }

    pub fn have_name_starting_with(self, prefix: &str) -> ConditionList<'c> {
        self.be(Predicate::HaveNameStartingWith(prefix.to_string()))
    }

    pub fn not_have_name_starting_with(self, prefix: &str) -> ConditionList<'c> {
        self.not_be(Predicate::HaveNameStartingWith(prefix.to_string()))
    }

    pub fn have_annotation(self, annotation: &str) -> ConditionList<'c> {
        self.be(Predicate::HaveAnnotation(annotation.to_string()))
    }

    /// Every listed annotation must be present.
    pub fn have_annotations(mut self, annotations: &[&str]) -> ConditionList<'c> {
        if annotations.is_empty() {
            self.error
                .get_or_insert_with(|| "have annotations: no annotations given".to_string());
        }
        let mut conditions = annotations
            .iter()
            .map(|a| Condition::new(Predicate::HaveAnnotation(a.to_string())));
        let Some(first) = conditions.next() else {
            return self.be(Predicate::HaveAnnotation(String::new()));
        };
        conditions.fold(self.push(first), |list, c| list.inner.push(c))
    }

    pub fn not_have_annotation(self, annotation: &str) -> ConditionList<'c> {
        self.not_be(Predicate::HaveAnnotation(annotation.to_string()))
    }

    pub fn be_public(self) -> ConditionList<'c> {
        self.be(Predicate::ArePublic)
    }

    pub fn not_be_public(self) -> ConditionList<'c> {
        self.not_be(Predicate::ArePublic)
    }

    pub fn be_classes(self) -> ConditionList<'c> {
        self.be(Predicate::AreClasses)
    }

    pub fn be_interfaces(self) -> ConditionList<'c> {
        self.be(Predicate::AreInterfaces)
    }

    pub fn be_generic_type_definitions(self) -> ConditionList<'c> {
        self.be(Predicate::AreGenericTypeDefinitions)
    }

    pub fn not_be_generic_type_definitions(self) -> ConditionList<'c> {
        self.not_be(Predicate::AreGenericTypeDefinitions)
    }

    pub fn inherit(self, pattern: &str) -> ConditionList<'c> {
        self.with_pattern(pattern, Predicate::Inherit, false)
    }

    pub fn not_inherit(self, pattern: &str) -> ConditionList<'c> {
        self.with_pattern(pattern, Predicate::Inherit, true)
    }

    pub fn implement_interface(self, pattern: &str) -> ConditionList<'c> {
        self.with_pattern(pattern, Predicate::ImplementInterface, false)
    }

    pub fn not_implement_interface(self, pattern: &str) -> ConditionList<'c> {
        self.with_pattern(pattern, Predicate::ImplementInterface, true)
    }

    pub fn have_matching_interface(self) -> ConditionList<'c> {
        self.be(Predicate::HaveMatchingInterface)
    }

    pub fn have_member(self, name: &str) -> ConditionList<'c> {
        self.be(Predicate::HaveMember(name.to_string()))
    }

    pub fn have_property(self, name: &str) -> ConditionList<'c> {
        self.be(Predicate::HaveProperty(name.to_string()))
    }

    pub fn have_method(self, name: &str) -> ConditionList<'c> {
        self.be(Predicate::HaveMethod(name.to_string()))
    }

    pub fn not_be_in_dependency_cycle(self) -> ConditionList<'c> {
        self.not_be(Predicate::BeInDependencyCycle)
    }
}

impl<'c> ConditionList<'c> {
    pub fn and(self) -> Conditions<'c> {
        self.inner
    }

    /// Start an alternative group of conditions.
    pub fn or(self) -> Conditions<'c> {
        let mut inner = self.inner;
        let group = std::mem::take(&mut inner.current);
        inner.done.push(group);
        inner
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn build(self) -> Result<Rule, RuleError> {
        let Conditions {
            catalog,
            selector,
            mut done,
            current,
            error,
        } = self.inner;
        if let Some(e) = error {
            return Err(RuleError::invalid(e));
        }
        done.push(current);
        let assertion = Assertion::new(done)?;
        Rule::new(catalog, selector, assertion, self.description)
    }

    pub fn get_result(self) -> Result<RuleResult, RuleError> {
        let catalog = self.inner.catalog;
        Ok(self.build()?.evaluate_with(catalog, &EvalOptions::default()))
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
