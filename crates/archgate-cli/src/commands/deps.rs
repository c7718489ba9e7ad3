use std::path::PathBuf;

use archgate_output::OutputFormatter;

/// Run `archgate deps <TYPE>` -- outgoing edges and dependents of one type.
pub fn run(formatter: &dyn OutputFormatter, catalog: Option<PathBuf>, type_name: String) -> i32 {
    let catalog = match super::open_catalog("deps", catalog) {
        Ok(c) => c,
        Err(code) => return code,
    };
    match archgate_enforce::inspect::describe_dependencies(&catalog, &type_name) {
        Ok(listing) => {
            print!("{}", formatter.format_dependencies(&listing));
            0
        }
        Err(e) => {
            eprintln!("archgate deps: {e}");
            2
        }
    }
}
