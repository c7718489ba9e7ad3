//! Core types, catalog, and dependency graph for archgate.
//!
//! This crate provides the foundational data structures used across all archgate crates:
//! - [`types`]: Type descriptors, references, members, and error types
//! - [`type_name`]: Type name patterns (`Name`, `Name<>`, `Name<Arg>`) used by rules
//! - [`catalog`]: The immutable [`TypeCatalog`](catalog::TypeCatalog) snapshot
//! - [`graph`]: Dependency edges derived from a catalog
//! - [`config`]: Configuration loading from `.archgate/archgate.json`
//! - [`hash`]: Deterministic catalog fingerprints (base62 of xxhash64)

pub mod catalog;
pub mod config;
pub mod graph;
pub mod hash;
pub mod type_name;
pub mod types;

/// Returns true if `namespace` lies inside `parent`: equal to it, or nested
/// under it with a `.` separator. `A` contains `A.B` but not `AB`.
pub fn namespace_contains(parent: &str, namespace: &str) -> bool {
    match namespace.strip_prefix(parent) {
        Some("") => true,
        Some(rest) => rest.starts_with('.'),
        None => false,
    }
}

/// Namespace part of a fully-qualified name (`A.B.C` -> `A.B`, `C` -> ``).
/// Generic argument lists are ignored so `A.B<C.D>` yields `A`.
pub fn namespace_of(full_name: &str) -> &str {
    let head = full_name.split('<').next().unwrap_or(full_name);
    match head.rfind('.') {
        Some(idx) => &head[..idx],
        None => "",
    }
}

/// Simple name part of a fully-qualified name (`A.B.C` -> `C`).
pub fn simple_name_of(full_name: &str) -> &str {
    let head = full_name.split('<').next().unwrap_or(full_name);
    match head.rfind('.') {
        Some(idx) => &head[idx + 1..],
        None => head,
    }
}
