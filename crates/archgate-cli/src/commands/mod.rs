pub mod check;
pub mod completion;
pub mod cycles;
pub mod deps;
pub mod init;
pub mod types;

use std::path::{Path, PathBuf};

use archgate_core::catalog::TypeCatalog;
use archgate_core::config::{ArchgateConfig, CONFIG_DIR};

/// The `.archgate/` directory under the current working directory.
pub(crate) fn config_dir(cmd: &str) -> Result<PathBuf, i32> {
    match std::env::current_dir() {
        Ok(cwd) => Ok(cwd.join(CONFIG_DIR)),
        Err(e) => {
            eprintln!("archgate {cmd}: failed to get current directory: {e}");
            Err(2)
        }
    }
}

/// Load the catalog from an explicit path, or from the configured one.
pub(crate) fn load_catalog(
    cmd: &str,
    explicit: Option<PathBuf>,
    config_dir: &Path,
    config: &ArchgateConfig,
) -> Result<TypeCatalog, i32> {
    let path = explicit.unwrap_or_else(|| config.catalog_path(config_dir));
    TypeCatalog::load(&path).map_err(|e| {
        eprintln!("archgate {cmd}: {e}");
        2
    })
}

/// Shared prelude for the read-only commands.
pub(crate) fn open_catalog(cmd: &str, explicit: Option<PathBuf>) -> Result<TypeCatalog, i32> {
    let dir = config_dir(cmd)?;
    let config = ArchgateConfig::load(&dir);
    load_catalog(cmd, explicit, &dir, &config)
}
