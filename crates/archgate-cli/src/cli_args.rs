use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "archgate", version, about = "Architecture conformance rules over type metadata")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as structured JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Log evaluation details to stderr
    #[arg(long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Create .archgate/ with a default config and a starter rule file
    Init,

    /// Evaluate the rule file against the catalog snapshot
    Check {
        /// Catalog snapshot (defaults to the configured path)
        #[arg(long, env = "ARCHGATE_CATALOG")]
        catalog: Option<PathBuf>,
        /// Rule file (defaults to the configured path)
        #[arg(long, env = "ARCHGATE_RULES")]
        rules: Option<PathBuf>,
        /// Fail when a rule matched no types
        #[arg(long)]
        strict: bool,
    },

    /// List catalog types
    Types {
        /// Only types in this namespace (nested namespaces included)
        #[arg(long)]
        namespace: Option<String>,
        /// Catalog snapshot (defaults to the configured path)
        #[arg(long, env = "ARCHGATE_CATALOG")]
        catalog: Option<PathBuf>,
    },

    /// Show the dependencies of one type
    Deps {
        /// Fully-qualified type name
        type_name: String,
        /// Catalog snapshot (defaults to the configured path)
        #[arg(long, env = "ARCHGATE_CATALOG")]
        catalog: Option<PathBuf>,
    },

    /// List dependency cycles among catalog types
    Cycles {
        /// Catalog snapshot (defaults to the configured path)
        #[arg(long, env = "ARCHGATE_CATALOG")]
        catalog: Option<PathBuf>,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for (bash, zsh, fish, elvish, powershell)
        shell: String,
    },
}

#[cfg(test)]
#[path = "cli_args_tests.rs"]
mod tests;
