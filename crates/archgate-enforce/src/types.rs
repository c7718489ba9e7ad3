use serde::{Deserialize, Serialize};

/// Outcome of evaluating one rule against one catalog.
///
/// Violators appear in catalog declaration order. `violating_type_names`
/// holds simple names and `violating_full_names` the matching
/// fully-qualified names, index for index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleResult {
    pub description: String,
    pub passed: bool,
    /// Number of types the selector matched.
    pub candidates: usize,
    pub violating_type_names: Vec<String>,
    pub violating_full_names: Vec<String>,
}

impl RuleResult {
    /// Passed only because the selector matched nothing.
    pub fn is_vacuous(&self) -> bool {
        self.passed && self.candidates == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    /// Every rule passed with at least one candidate.
    Ok,
    /// Every rule passed, but at least one passed vacuously or the rule set was empty.
    Warning,
    /// At least one rule failed.
    Error,
}

impl ReportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Ok => "ok",
            ReportStatus::Warning => "warning",
            ReportStatus::Error => "error",
        }
    }
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub vacuous: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleFailure {
    pub description: String,
    pub violating_type_names: Vec<String>,
    pub violating_full_names: Vec<String>,
}

/// Aggregate of a rule-set evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub version: String,
    pub command: String,
    pub assembly: String,
    pub catalog_hash: String,
    pub status: ReportStatus,
    pub summary: ReportSummary,
    pub failures: Vec<RuleFailure>,
    pub results: Vec<RuleResult>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeListing {
    pub version: String,
    pub command: String,
    pub assembly: String,
    pub namespace: Option<String>,
    pub types: Vec<TypeEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeEntry {
    pub full_name: String,
    pub kind: String,
    pub visibility: String,
    pub generic_arity: usize,
    pub base_type: Option<String>,
    pub interfaces: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyListing {
    pub version: String,
    pub command: String,
    pub type_name: String,
    pub outgoing: Vec<EdgeEntry>,
    /// Catalog types that depend on `type_name`, in declaration order.
    pub incoming: Vec<String>,
    pub in_cycle: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeEntry {
    pub target: String,
    pub target_namespace: String,
    pub kind: String,
    pub resolved: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleListing {
    pub version: String,
    pub command: String,
    pub assembly: String,
    pub cycles: Vec<Vec<String>>,
}

/// Errors raised while building rules. A failing rule is not an error.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error("Invalid rule definition: {0}")]
    InvalidRuleDefinition(String),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl RuleError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        RuleError::InvalidRuleDefinition(message.into())
    }
}
