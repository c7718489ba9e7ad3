use archgate_core::catalog::TypeCatalog;
use archgate_core::namespace_contains;
use serde::{Deserialize, Serialize};

use crate::assertion::Assertion;
use crate::selector::{Selector, TypeSet};
use crate::types::{RuleError, RuleResult};

/// Evaluation switches shared by every rule in a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalOptions {
    pub parallel: bool,
    /// Types in these namespaces are dropped from every selection.
    pub exclude_namespaces: Vec<String>,
}

impl Default for EvalOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            exclude_namespaces: Vec::new(),
        }
    }
}

/// A validated selector/assertion pair. Stateless; evaluating twice against
/// the same catalog gives the same result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub description: String,
    pub selector: Selector,
    pub assertion: Assertion,
}

impl Rule {
    pub fn new(
        catalog: &TypeCatalog,
        selector: Selector,
        assertion: Assertion,
        description: Option<String>,
    ) -> Result<Self, RuleError> {
        selector.validate(catalog)?;
        assertion.validate(catalog)?;
        let description = match description {
            Some(d) if !d.trim().is_empty() => d,
            _ => format!("{} should {}", capitalize(&selector.describe()), assertion.describe()),
        };
        Ok(Self {
            description,
            selector,
            assertion,
        })
    }

    pub fn evaluate(&self, catalog: &TypeCatalog) -> RuleResult {
        self.evaluate_with(catalog, &EvalOptions::default())
    }

    pub fn evaluate_with(&self, catalog: &TypeCatalog, options: &EvalOptions) -> RuleResult {
        let candidates = self.candidates(catalog, options);
        let violators = self.assertion.evaluate(catalog, &candidates, options.parallel);
        tracing::debug!(
            rule = %self.description,
            candidates = candidates.len(),
            violations = violators.len(),
            "evaluated rule"
        );
        let (names, full_names) = violators
            .iter()
            .map(|id| {
                let ty = catalog.get(*id);
                (ty.name.clone(), ty.full_name.clone())
            })
            .unzip();
        RuleResult {
            description: self.description.clone(),
            passed: violators.is_empty(),
            candidates: candidates.len(),
            violating_type_names: names,
            violating_full_names: full_names,
        }
    }

    fn candidates(&self, catalog: &TypeCatalog, options: &EvalOptions) -> TypeSet {
        let mut selected = self.selector.select(catalog);
        if !options.exclude_namespaces.is_empty() {
            selected.retain(|id| {
                let ns = &catalog.get(*id).namespace;
                !options
                    .exclude_namespaces
                    .iter()
                    .any(|excluded| namespace_contains(excluded, ns))
            });
        }
        selected
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
