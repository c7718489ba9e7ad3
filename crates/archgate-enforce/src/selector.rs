use std::collections::BTreeSet;

use archgate_core::catalog::TypeCatalog;
use archgate_core::types::TypeId;
use serde::{Deserialize, Serialize};

use crate::predicate::{Mood, Predicate};
use crate::types::RuleError;

/// A set of catalog types. Iteration order is declaration order.
pub type TypeSet = BTreeSet<TypeId>;

/// A composable filter over a catalog.
///
/// Results are sets keyed by [`TypeId`], so `and`/`or` are commutative and
/// associative: operand order never changes the selected types.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selector {
    All,
    Is(Predicate),
    Not(Box<Selector>),
    And(Box<Selector>, Box<Selector>),
    Or(Box<Selector>, Box<Selector>),
}

impl Selector {
    pub fn all() -> Self {
        Selector::All
    }

    pub fn is(predicate: Predicate) -> Self {
        Selector::Is(predicate)
    }

    pub fn and(self, other: Selector) -> Self {
        Selector::And(Box::new(self), Box::new(other))
    }

    pub fn or(self, other: Selector) -> Self {
        Selector::Or(Box::new(self), Box::new(other))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        Selector::Not(Box::new(self))
    }

    // Primitive selectors.

    pub fn reside_in_namespace(namespace: &str) -> Self {
        Selector::Is(Predicate::ResideInNamespace(namespace.to_string()))
    }

    pub fn are_classes() -> Self {
        Selector::Is(Predicate::AreClasses)
    }

    pub fn are_interfaces() -> Self {
        Selector::Is(Predicate::AreInterfaces)
    }

    pub fn are_generic_type_definitions() -> Self {
        Selector::Is(Predicate::AreGenericTypeDefinitions)
    }

    pub fn implement_interface(pattern: archgate_core::type_name::TypePattern) -> Self {
        Selector::Is(Predicate::ImplementInterface(pattern))
    }

    pub fn have_base_type(pattern: archgate_core::type_name::TypePattern) -> Self {
        Selector::Is(Predicate::Inherit(pattern))
    }

    /// Evaluate against a catalog.
    pub fn select(&self, catalog: &TypeCatalog) -> TypeSet {
        match self {
            Selector::All => catalog.iter().map(|(id, _)| id).collect(),
            Selector::Is(predicate) => catalog
                .iter()
                .filter(|(id, _)| predicate.test(catalog, *id))
                .map(|(id, _)| id)
                .collect(),
            Selector::Not(inner) => {
                let excluded = inner.select(catalog);
                catalog
                    .iter()
                    .map(|(id, _)| id)
                    .filter(|id| !excluded.contains(id))
                    .collect()
            }
            Selector::And(a, b) => {
                let left = a.select(catalog);
                if left.is_empty() {
                    return left;
                }
                let right = b.select(catalog);
                left.intersection(&right).copied().collect()
            }
            Selector::Or(a, b) => {
                let mut left = a.select(catalog);
                left.extend(b.select(catalog));
                left
            }
        }
    }

    /// Single-type evaluation with the same semantics as [`Selector::select`].
    pub fn matches(&self, catalog: &TypeCatalog, id: TypeId) -> bool {
        match self {
            Selector::All => true,
            Selector::Is(predicate) => predicate.test(catalog, id),
            Selector::Not(inner) => !inner.matches(catalog, id),
            Selector::And(a, b) => a.matches(catalog, id) && b.matches(catalog, id),
            Selector::Or(a, b) => a.matches(catalog, id) || b.matches(catalog, id),
        }
    }

    pub fn validate(&self, catalog: &TypeCatalog) -> Result<(), RuleError> {
        match self {
            Selector::All => Ok(()),
            Selector::Is(predicate) => predicate.validate(catalog),
            Selector::Not(inner) => inner.validate(catalog),
            Selector::And(a, b) | Selector::Or(a, b) => {
                a.validate(catalog)?;
                b.validate(catalog)
            }
        }
    }

    /// Noun phrase naming the selected types, e.g.
    /// "types that reside in namespace `A` and are classes".
    pub fn describe(&self) -> String {
        match self {
            Selector::All => "all types".to_string(),
            _ => format!("types that {}", self.clause(false)),
        }
    }

    fn clause(&self, inside_and: bool) -> String {
        match self {
            Selector::All => "exist".to_string(),
            Selector::Is(predicate) => predicate.phrase(Mood::Indicative, false),
            Selector::Not(inner) => match inner.as_ref() {
                Selector::Is(predicate) => predicate.phrase(Mood::Indicative, true),
                other => format!("are not ({})", other.clause(false)),
            },
            Selector::And(a, b) => format!("{} and {}", a.clause(true), b.clause(true)),
            Selector::Or(a, b) if inside_and => {
                format!("({} or {})", a.clause(false), b.clause(false))
            }
            Selector::Or(a, b) => format!("{} or {}", a.clause(false), b.clause(false)),
        }
    }
}
