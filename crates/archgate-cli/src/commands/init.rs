use std::fs;

use archgate_core::config::{ArchgateConfig, CONFIG_FILE};

/// Starter rule file written by `archgate init`.
pub(crate) const STARTER_RULES: &str = r#"{
  "rules": [
    {
      "description": "Every class is public",
      "that": ["are_classes"],
      "should": ["are_public"]
    },
    {
      "description": "No class takes part in a dependency cycle",
      "that": ["are_classes"],
      "should": [{ "not": "be_in_dependency_cycle" }]
    }
  ]
}
"#;

/// Run `archgate init` -- create .archgate/ with a config and starter rules.
pub fn run(verbose: bool) -> i32 {
    let dir = match super::config_dir("init") {
        Ok(d) => d,
        Err(code) => return code,
    };

    if dir.exists() {
        eprintln!("archgate init: .archgate/ directory already exists");
        return 2;
    }

    if let Err(e) = fs::create_dir_all(&dir) {
        eprintln!("archgate init: failed to create .archgate/: {}", e);
        return 2;
    }

    let config = ArchgateConfig::default();
    if let Err(e) = config.save(&dir) {
        eprintln!("archgate init: failed to write {}: {}", CONFIG_FILE, e);
        return 2;
    }

    let rules_path = config.rules_path(&dir);
    if let Err(e) = fs::write(&rules_path, STARTER_RULES) {
        eprintln!("archgate init: failed to write {}: {}", rules_path.display(), e);
        return 2;
    }

    if verbose {
        eprintln!(
            "archgate init: initialized in {}; place the extractor snapshot at {}",
            dir.display(),
            config.catalog_path(&dir).display()
        );
    }
    0
}
