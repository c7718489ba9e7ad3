use crate::human_helpers::{format_failure_human, plural};
use crate::OutputFormatter;
use archgate_enforce::types::{CycleListing, DependencyListing, Report, TypeListing};

pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format_report(&self, report: &Report) -> String {
        let mut out = String::new();

        for failure in &report.failures {
            out.push_str(&format_failure_human(failure));
        }

        for result in report.results.iter().filter(|r| r.is_vacuous()) {
            out.push_str(&format!("WARN: {} (no matching types)\n", result.description));
        }

        if !out.is_empty() {
            out.push('\n');
        }

        let s = &report.summary;
        out.push_str(&format!(
            "{}: {} passed, {} failed, {} vacuous ({}) [{}]\n",
            report.assembly,
            s.passed,
            s.failed,
            s.vacuous,
            plural(s.total, "rule"),
            report.status,
        ));
        out
    }

    fn format_types(&self, listing: &TypeListing) -> String {
        let mut out = String::new();
        for t in &listing.types {
            let generic = if t.generic_arity > 0 {
                format!("<{}>", ",".repeat(t.generic_arity - 1))
            } else {
                String::new()
            };
            out.push_str(&format!(
                "{}{}  {} {}\n",
                t.full_name, generic, t.visibility, t.kind
            ));
            if let Some(base) = &t.base_type {
                out.push_str(&format!("  : {}\n", base));
            }
            for i in &t.interfaces {
                out.push_str(&format!("  + {}\n", i));
            }
        }
        out.push_str(&format!("\n{}\n", plural(listing.types.len(), "type")));
        out
    }

    fn format_dependencies(&self, listing: &DependencyListing) -> String {
        let mut out = format!("{}\n", listing.type_name);
        if listing.in_cycle {
            out.push_str("  (part of a dependency cycle)\n");
        }

        if !listing.outgoing.is_empty() {
            out.push_str(&format!("\nDepends on ({}):\n", listing.outgoing.len()));
            for e in &listing.outgoing {
                let external = if e.resolved { "" } else { " [external]" };
                out.push_str(&format!("  {} ({}){}\n", e.target, e.kind, external));
            }
        }

        if !listing.incoming.is_empty() {
            out.push_str(&format!("\nUsed by ({}):\n", listing.incoming.len()));
            for name in &listing.incoming {
                out.push_str(&format!("  {}\n", name));
            }
        }
        out
    }

    fn format_cycles(&self, listing: &CycleListing) -> String {
        if listing.cycles.is_empty() {
            return format!("{}: no dependency cycles\n", listing.assembly);
        }
        let mut out = String::new();
        for (i, cycle) in listing.cycles.iter().enumerate() {
            out.push_str(&format!("cycle {}: {}\n", i + 1, cycle.join(" -> ")));
        }
        out.push_str(&format!("\n{}\n", plural(listing.cycles.len(), "cycle")));
        out
    }
}
