use archgate_core::catalog::TypeCatalog;
use archgate_core::config::ArchgateConfig;
use rayon::prelude::*;

use crate::rule::{EvalOptions, Rule};
use crate::types::{Report, RuleResult};

/// Evaluates rule sets against one catalog.
pub struct ConformanceEngine<'c> {
    catalog: &'c TypeCatalog,
    options: EvalOptions,
}

impl<'c> ConformanceEngine<'c> {
    pub fn new(catalog: &'c TypeCatalog) -> Self {
        Self {
            catalog,
            options: EvalOptions::default(),
        }
    }

    /// Create an engine configured from an `ArchgateConfig`.
    pub fn with_config(catalog: &'c TypeCatalog, config: &ArchgateConfig) -> Self {
        Self {
            catalog,
            options: EvalOptions {
                parallel: config.enforce.parallel,
                exclude_namespaces: config.exclude_namespaces.clone(),
            },
        }
    }

    pub fn catalog(&self) -> &'c TypeCatalog {
        self.catalog
    }

    pub fn options(&self) -> &EvalOptions {
        &self.options
    }

    pub fn evaluate(&self, rule: &Rule) -> RuleResult {
        rule.evaluate_with(self.catalog, &self.options)
    }

    /// Evaluate every rule. Results follow the order of `rules`.
    pub fn evaluate_all(&self, rules: &[Rule]) -> Report {
        // Build the shared graph once, before rules race to initialize it.
        if self.options.parallel && rules.len() > 1 {
            self.catalog.dependency_graph();
        }
        let results: Vec<RuleResult> = if self.options.parallel {
            rules.par_iter().map(|rule| self.evaluate(rule)).collect()
        } else {
            rules.iter().map(|rule| self.evaluate(rule)).collect()
        };
        let report = Report::from_results(self.catalog.assembly(), self.catalog.fingerprint(), results);
        tracing::debug!(
            assembly = %report.assembly,
            total = report.summary.total,
            failed = report.summary.failed,
            vacuous = report.summary.vacuous,
            "evaluated rule set"
        );
        report
    }
}
