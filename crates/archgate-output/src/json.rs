use crate::OutputFormatter;
use archgate_enforce::types::{CycleListing, DependencyListing, Report, TypeListing};

pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &Report) -> String {
        serde_json::to_string_pretty(report).unwrap_or_default()
    }
    fn format_types(&self, listing: &TypeListing) -> String {
        serde_json::to_string_pretty(listing).unwrap_or_default()
    }
    fn format_dependencies(&self, listing: &DependencyListing) -> String {
        serde_json::to_string_pretty(listing).unwrap_or_default()
    }
    fn format_cycles(&self, listing: &CycleListing) -> String {
        serde_json::to_string_pretty(listing).unwrap_or_default()
    }
}
