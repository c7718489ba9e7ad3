use std::path::PathBuf;

use archgate_core::config::ArchgateConfig;
use archgate_enforce::definition::RuleFile;
use archgate_enforce::engine::ConformanceEngine;
use archgate_output::OutputFormatter;

/// Run `archgate check` -- evaluate every rule and report.
///
/// Exit codes: 0 all rules passed, 1 a rule failed (or, under `--strict`,
/// passed without matching any type), 2 the catalog or rule file is unusable.
pub fn run(
    formatter: &dyn OutputFormatter,
    verbose: bool,
    catalog: Option<PathBuf>,
    rules: Option<PathBuf>,
    strict: bool,
) -> i32 {
    let dir = match super::config_dir("check") {
        Ok(d) => d,
        Err(code) => return code,
    };
    let config = ArchgateConfig::load(&dir);

    let catalog = match super::load_catalog("check", catalog, &dir, &config) {
        Ok(c) => c,
        Err(code) => return code,
    };

    let rules_path = rules.unwrap_or_else(|| config.rules_path(&dir));
    let rules = match RuleFile::load(&rules_path).and_then(|f| f.compile_all(&catalog)) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("archgate check: {}", e);
            return 2;
        }
    };

    if rules.is_empty() {
        eprintln!("archgate check: {} defines no rules", rules_path.display());
    }

    let report = ConformanceEngine::with_config(&catalog, &config).evaluate_all(&rules);
    print!("{}", formatter.format_report(&report));

    if verbose {
        eprintln!(
            "archgate check: {} rule(s) over {} type(s), catalog {}",
            report.summary.total,
            catalog.len(),
            report.catalog_hash
        );
    }

    let strict = strict || config.enforce.strict;
    if report.is_success(strict) {
        0
    } else {
        1
    }
}
