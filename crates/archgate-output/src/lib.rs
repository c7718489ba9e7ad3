//! Output formatters for archgate command results.
//!
//! Provides two output modes:
//! - **Human** (default): plain text for terminals and CI logs
//! - **JSON** (`--json`): machine-readable structured output

pub mod human;
pub(crate) mod human_helpers;
pub mod json;

use archgate_enforce::types::{CycleListing, DependencyListing, Report, TypeListing};

pub trait OutputFormatter {
    fn format_report(&self, report: &Report) -> String;
    fn format_types(&self, listing: &TypeListing) -> String;
    fn format_dependencies(&self, listing: &DependencyListing) -> String;
    fn format_cycles(&self, listing: &CycleListing) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl ReportFormat {
    pub fn formatter(self) -> Box<dyn OutputFormatter> {
        match self {
            ReportFormat::Text => Box::new(human::HumanFormatter),
            ReportFormat::Json => Box::new(json::JsonFormatter),
        }
    }
}

/// Render a report in the requested format.
pub fn render(report: &Report, format: ReportFormat) -> String {
    format.formatter().format_report(report)
}
