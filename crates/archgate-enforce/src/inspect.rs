//! Catalog listings backing the `types`, `deps`, and `cycles` commands.

use archgate_core::catalog::TypeCatalog;
use archgate_core::namespace_contains;
use archgate_core::types::TypeDescriptor;

use crate::report::REPORT_VERSION;
use crate::types::{CycleListing, DependencyListing, EdgeEntry, RuleError, TypeEntry, TypeListing};

pub fn list_types(catalog: &TypeCatalog, namespace: Option<&str>) -> TypeListing {
    let types = catalog
        .all_types()
        .iter()
        .filter(|ty| namespace.map_or(true, |ns| namespace_contains(ns, &ty.namespace)))
        .map(type_entry)
        .collect();
    TypeListing {
        version: REPORT_VERSION.to_string(),
        command: "types".to_string(),
        assembly: catalog.assembly().to_string(),
        namespace: namespace.map(str::to_string),
        types,
    }
}

fn type_entry(ty: &TypeDescriptor) -> TypeEntry {
    TypeEntry {
        full_name: ty.full_name.clone(),
        kind: ty.kind.as_str().to_string(),
        visibility: ty.visibility.as_str().to_string(),
        generic_arity: ty.generic_arity(),
        base_type: ty.base_type.as_ref().map(|b| b.to_string()),
        interfaces: ty.interfaces.iter().map(|i| i.to_string()).collect(),
    }
}

/// Outgoing edges and incoming dependents of one catalog type.
pub fn describe_dependencies(catalog: &TypeCatalog, identity: &str) -> Result<DependencyListing, RuleError> {
    let id = catalog
        .id_of(identity)
        .ok_or_else(|| RuleError::invalid(format!("type `{identity}` is not in the catalog")))?;
    let graph = catalog.dependency_graph();
    let outgoing = graph
        .edges_from(id)
        .iter()
        .map(|edge| EdgeEntry {
            target: edge.target.clone(),
            target_namespace: edge.target_namespace.clone(),
            kind: edge.kind.as_str().to_string(),
            resolved: edge.target_id.is_some(),
        })
        .collect();
    let incoming = graph
        .dependents_of(id)
        .into_iter()
        .map(|dep| catalog.get(dep).full_name.clone())
        .collect();
    Ok(DependencyListing {
        version: REPORT_VERSION.to_string(),
        command: "deps".to_string(),
        type_name: catalog.get(id).full_name.clone(),
        outgoing,
        incoming,
        in_cycle: graph.in_cycle(id),
    })
}

pub fn list_cycles(catalog: &TypeCatalog) -> CycleListing {
    let cycles = catalog
        .dependency_graph()
        .cycles()
        .iter()
        .map(|cycle| cycle.iter().map(|id| catalog.get(*id).full_name.clone()).collect())
        .collect();
    CycleListing {
        version: REPORT_VERSION.to_string(),
        command: "cycles".to_string(),
        assembly: catalog.assembly().to_string(),
        cycles,
    }
}
