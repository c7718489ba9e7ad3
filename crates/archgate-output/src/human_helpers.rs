use archgate_enforce::types::RuleFailure;

/// Violators beyond this many are summarized as "and N more".
const MAX_LISTED_VIOLATORS: usize = 20;

pub(crate) fn format_failure_human(failure: &RuleFailure) -> String {
    let mut out = format!("FAIL: {}\n", failure.description);
    for name in failure.violating_full_names.iter().take(MAX_LISTED_VIOLATORS) {
        out.push_str(&format!("  - {}\n", name));
    }
    let hidden = failure
        .violating_full_names
        .len()
        .saturating_sub(MAX_LISTED_VIOLATORS);
    if hidden > 0 {
        out.push_str(&format!("  ... and {} more\n", hidden));
    }
    out
}

pub(crate) fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{} {}", count, word)
    } else {
        format!("{} {}s", count, word)
    }
}
