use std::path::PathBuf;

use archgate_output::OutputFormatter;

/// Run `archgate types` -- list catalog types, optionally within a namespace.
pub fn run(formatter: &dyn OutputFormatter, catalog: Option<PathBuf>, namespace: Option<String>) -> i32 {
    let catalog = match super::open_catalog("types", catalog) {
        Ok(c) => c,
        Err(code) => return code,
    };
    let listing = archgate_enforce::inspect::list_types(&catalog, namespace.as_deref());
    print!("{}", formatter.format_types(&listing));
    0
}
