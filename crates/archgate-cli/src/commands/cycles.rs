use std::path::PathBuf;

use archgate_output::OutputFormatter;

/// Run `archgate cycles` -- report groups of mutually dependent types.
pub fn run(formatter: &dyn OutputFormatter, catalog: Option<PathBuf>) -> i32 {
    let catalog = match super::open_catalog("cycles", catalog) {
        Ok(c) => c,
        Err(code) => return code,
    };
    let listing = archgate_enforce::inspect::list_cycles(&catalog);
    print!("{}", formatter.format_cycles(&listing));
    0
}
