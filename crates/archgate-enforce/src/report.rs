use crate::types::{Report, ReportStatus, ReportSummary, RuleFailure, RuleResult};

pub(crate) const REPORT_VERSION: &str = "0.1.0";

impl Report {
    /// Aggregate rule results. Result order is kept as given.
    ///
    /// An empty rule set checks nothing and reports `Warning`, like a
    /// vacuous pass.
    pub fn from_results(assembly: &str, catalog_hash: &str, results: Vec<RuleResult>) -> Self {
        let passed = results.iter().filter(|r| r.passed).count();
        let vacuous = results.iter().filter(|r| r.is_vacuous()).count();
        let failures: Vec<RuleFailure> = results
            .iter()
            .filter(|r| !r.passed)
            .map(|r| RuleFailure {
                description: r.description.clone(),
                violating_type_names: r.violating_type_names.clone(),
                violating_full_names: r.violating_full_names.clone(),
            })
            .collect();
        let status = if !failures.is_empty() {
            ReportStatus::Error
        } else if vacuous > 0 || results.is_empty() {
            ReportStatus::Warning
        } else {
            ReportStatus::Ok
        };
        Self {
            version: REPORT_VERSION.to_string(),
            command: "check".to_string(),
            assembly: assembly.to_string(),
            catalog_hash: catalog_hash.to_string(),
            status,
            summary: ReportSummary {
                total: results.len(),
                passed,
                failed: failures.len(),
                vacuous,
            },
            failures,
            results,
        }
    }

    /// Under `strict`, a vacuous pass counts as a failure.
    pub fn is_success(&self, strict: bool) -> bool {
        match self.status {
            ReportStatus::Ok => true,
            ReportStatus::Warning => !strict,
            ReportStatus::Error => false,
        }
    }
}
