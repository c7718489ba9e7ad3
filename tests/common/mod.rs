//! Shared test helpers for all archgate integration tests.
//!
//! Import from any integration test entry point with:
//!   `#[path = "common/mod.rs"] mod common;`
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use archgate_core::catalog::{CatalogSnapshot, TypeCatalog};
use archgate_core::types::TypeDescriptor;
use tempfile::TempDir;

pub const CONTROLLERS: &str = "Architecture.Controllers";
pub const SERVICES: &str = "Architecture.Services";
pub const SERVICE_INTERFACES: &str = "Architecture.Services.Interfaces";
pub const REPOSITORIES: &str = "Architecture.Repositories";
pub const REPOSITORY_INTERFACES: &str = "Architecture.Repositories.Interfaces";
pub const MODELS: &str = "Architecture.Models";

pub const ARCHITECTURE_JSON: &str = include_str!("../fixtures/architecture.json");
pub const RULES_JSON: &str = include_str!("../fixtures/rules.json");

/// Snapshot of the layered demo application.
pub fn demo_snapshot() -> CatalogSnapshot {
    serde_json::from_str(ARCHITECTURE_JSON).expect("fixture snapshot is valid JSON")
}

pub fn demo_catalog() -> TypeCatalog {
    TypeCatalog::from_json(ARCHITECTURE_JSON).expect("fixture catalog is well-formed")
}

/// The demo catalog with extra types appended after the originals.
pub fn demo_catalog_with(extra: Vec<TypeDescriptor>) -> TypeCatalog {
    let mut snapshot = demo_snapshot();
    snapshot.types.extend(extra);
    TypeCatalog::from_snapshot(snapshot).expect("extended fixture catalog is well-formed")
}

/// Write the demo catalog and rule file into a fresh project directory laid
/// out the way `archgate init` leaves it.
///
/// Returns (TempDir, project_root). Hold the TempDir to keep the directory alive.
pub fn setup_project(rules: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let config_dir = dir.path().join(".archgate");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("catalog.json"), ARCHITECTURE_JSON).unwrap();
    fs::write(config_dir.join("rules.json"), rules).unwrap();
    let root = dir.path().to_path_buf();
    (dir, root)
}

/// Get path to compiled archgate binary.
///
/// Builds the binary if it doesn't exist yet.
pub fn archgate_bin() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove 'deps'
    path.push("archgate");
    if path.exists() {
        return path;
    }
    let workspace = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let fallback = workspace.join("target/debug/archgate");
    if fallback.exists() {
        return fallback;
    }
    let status = Command::new("cargo")
        .args(["build", "-p", "archgate-cli"])
        .current_dir(&workspace)
        .status()
        .expect("Failed to build archgate");
    assert!(status.success(), "Failed to build archgate binary");
    fallback
}

/// Run archgate in `dir` with the given arguments.
pub fn run_archgate(dir: &Path, args: &[&str]) -> std::process::Output {
    Command::new(archgate_bin())
        .args(args)
        .current_dir(dir)
        .env_remove("ARCHGATE_CATALOG")
        .env_remove("ARCHGATE_RULES")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run archgate")
}
