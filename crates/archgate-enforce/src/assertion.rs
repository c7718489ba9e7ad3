use archgate_core::catalog::TypeCatalog;
use archgate_core::type_name::TypePattern;
use archgate_core::types::TypeId;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::predicate::{Mood, Predicate};
use crate::selector::TypeSet;
use crate::types::RuleError;

/// A predicate that every candidate must satisfy, optionally negated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Condition {
    pub predicate: Predicate,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub negated: bool,
}

impl Condition {
    pub fn new(predicate: Predicate) -> Self {
        Self {
            predicate,
            negated: false,
        }
    }

    pub fn negate(predicate: Predicate) -> Self {
        Self {
            predicate,
            negated: true,
        }
    }

    pub fn holds(&self, catalog: &TypeCatalog, id: TypeId) -> bool {
        self.predicate.test(catalog, id) != self.negated
    }

    pub fn describe(&self) -> String {
        self.predicate.phrase(Mood::Infinitive, self.negated)
    }
}

/// What a rule demands of its candidates, in disjunctive normal form.
///
/// Each inner group is a conjunction; a candidate conforms when any group
/// fully holds. An assertion always has at least one non-empty group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Assertion {
    groups: Vec<Vec<Condition>>,
}

impl Assertion {
    pub fn new(groups: Vec<Vec<Condition>>) -> Result<Self, RuleError> {
        if groups.is_empty() || groups.iter().any(Vec::is_empty) {
            return Err(RuleError::invalid("an assertion needs at least one condition"));
        }
        Ok(Self { groups })
    }

    pub fn condition(condition: Condition) -> Self {
        Self {
            groups: vec![vec![condition]],
        }
    }

    pub fn groups(&self) -> &[Vec<Condition>] {
        &self.groups
    }

    /// Conjunction. `(a or b) and c` distributes to `(a and c) or (b and c)`.
    pub fn and(self, other: Assertion) -> Self {
        let mut groups = Vec::with_capacity(self.groups.len() * other.groups.len());
        for left in &self.groups {
            for right in &other.groups {
                let mut group = left.clone();
                group.extend(right.iter().cloned());
                groups.push(group);
            }
        }
        Self { groups }
    }

    pub fn or(mut self, other: Assertion) -> Self {
        self.groups.extend(other.groups);
        self
    }

    pub fn dependency_presence(namespace: &str) -> Self {
        Self::condition(Condition::new(Predicate::HaveDependencyOn(namespace.to_string())))
    }

    pub fn dependency_absence(namespace: &str) -> Self {
        Self::condition(Condition::negate(Predicate::HaveDependencyOn(namespace.to_string())))
    }

    pub fn name_suffix(suffix: &str) -> Self {
        Self::condition(Condition::new(Predicate::HaveNameEndingWith(suffix.to_string())))
    }

    pub fn name_prefix(prefix: &str) -> Self {
        Self::condition(Condition::new(Predicate::HaveNameStartingWith(prefix.to_string())))
    }

    /// Every listed annotation must be present. An empty list is rejected
    /// by [`Assertion::validate`].
    pub fn has_annotations(annotations: &[&str]) -> Self {
        let group = if annotations.is_empty() {
            vec![Condition::new(Predicate::HaveAnnotation(String::new()))]
        } else {
            annotations
                .iter()
                .map(|a| Condition::new(Predicate::HaveAnnotation(a.to_string())))
                .collect()
        };
        Self {
            groups: vec![group],
        }
    }

    pub fn is_public() -> Self {
        Self::condition(Condition::new(Predicate::ArePublic))
    }

    pub fn inherits(pattern: TypePattern) -> Self {
        Self::condition(Condition::new(Predicate::Inherit(pattern)))
    }

    pub fn same_name_interface_pairing() -> Self {
        Self::condition(Condition::new(Predicate::HaveMatchingInterface))
    }

    pub fn member_presence(name: &str) -> Self {
        Self::condition(Condition::new(Predicate::HaveMember(name.to_string())))
    }

    pub fn holds(&self, catalog: &TypeCatalog, id: TypeId) -> bool {
        self.groups
            .iter()
            .any(|group| group.iter().all(|c| c.holds(catalog, id)))
    }

    /// Candidates for which the assertion does not hold, in declaration order.
    pub fn evaluate(&self, catalog: &TypeCatalog, candidates: &TypeSet, parallel: bool) -> Vec<TypeId> {
        let mut violators: Vec<TypeId> = if parallel {
            let ids: Vec<TypeId> = candidates.iter().copied().collect();
            ids.into_par_iter()
                .filter(|id| !self.holds(catalog, *id))
                .collect()
        } else {
            candidates
                .iter()
                .copied()
                .filter(|id| !self.holds(catalog, *id))
                .collect()
        };
        violators.sort_unstable();
        violators
    }

    pub fn validate(&self, catalog: &TypeCatalog) -> Result<(), RuleError> {
        self.groups
            .iter()
            .flatten()
            .try_for_each(|c| c.predicate.validate(catalog))
    }

    pub fn describe(&self) -> String {
        let groups: Vec<String> = self
            .groups
            .iter()
            .map(|group| {
                group
                    .iter()
                    .map(Condition::describe)
                    .collect::<Vec<_>>()
                    .join(" and ")
            })
            .collect();
        if groups.len() > 1 && self.groups.iter().any(|g| g.len() > 1) {
            groups
                .iter()
                .map(|g| format!("({g})"))
                .collect::<Vec<_>>()
                .join(" or ")
        } else {
            groups.join(" or ")
        }
    }
}

#[cfg(test)]
#[path = "assertion_tests.rs"]
mod tests;
