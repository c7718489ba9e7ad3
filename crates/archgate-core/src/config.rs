//! Configuration file loading for archgate.
//!
//! Reads `.archgate/archgate.json` and provides typed access to all settings.
//! Falls back to sensible defaults when the config file is missing or incomplete.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const CONFIG_DIR: &str = ".archgate";
pub const CONFIG_FILE: &str = "archgate.json";

/// Top-level archgate configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchgateConfig {
    pub version: String,
    /// Catalog snapshot path, relative to the config directory.
    #[serde(default = "default_catalog")]
    pub catalog: String,
    /// Rule definition file, relative to the config directory.
    #[serde(default = "default_rules")]
    pub rules: String,
    #[serde(default)]
    pub enforce: EnforceConfig,
    /// Types in these namespaces are dropped from every selector result.
    #[serde(default)]
    pub exclude_namespaces: Vec<String>,
}

/// Evaluation toggles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnforceConfig {
    /// Treat rules that passed with no candidates as failures.
    #[serde(default)]
    pub strict: bool,
    #[serde(default = "default_true")]
    pub parallel: bool,
}

fn default_true() -> bool {
    true
}
fn default_catalog() -> String {
    "catalog.json".to_string()
}
fn default_rules() -> String {
    "rules.json".to_string()
}

impl Default for EnforceConfig {
    fn default() -> Self {
        Self {
            strict: false,
            parallel: true,
        }
    }
}

impl Default for ArchgateConfig {
    fn default() -> Self {
        Self {
            version: "0.1.0".to_string(),
            catalog: default_catalog(),
            rules: default_rules(),
            enforce: EnforceConfig::default(),
            exclude_namespaces: vec![],
        }
    }
}

impl ArchgateConfig {
    /// Load configuration from `archgate.json` inside the given config directory.
    /// Returns defaults if the file doesn't exist or can't be parsed.
    pub fn load(config_dir: &Path) -> Self {
        let config_path = config_dir.join(CONFIG_FILE);
        let content = match std::fs::read_to_string(&config_path) {
            Ok(c) => c,
            Err(_) => return Self::default(),
        };
        match serde_json::from_str(&content) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::warn!(
                    path = %config_path.display(),
                    error = %e,
                    "failed to parse config, using defaults"
                );
                Self::default()
            }
        }
    }

    /// Write the configuration as pretty JSON into the config directory.
    pub fn save(&self, config_dir: &Path) -> std::io::Result<()> {
        std::fs::create_dir_all(config_dir)?;
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(config_dir.join(CONFIG_FILE), json + "\n")
    }

    pub fn catalog_path(&self, config_dir: &Path) -> PathBuf {
        config_dir.join(&self.catalog)
    }

    pub fn rules_path(&self, config_dir: &Path) -> PathBuf {
        config_dir.join(&self.rules)
    }
}
