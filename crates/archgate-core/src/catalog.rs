use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::graph::DependencyGraph;
use crate::types::{CatalogError, TypeDescriptor, TypeId, TypeKind, TypeRef};

/// Extractor output: the declared types of one analyzed assembly, in
/// declaration order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    pub assembly: String,
    #[serde(default)]
    pub types: Vec<TypeDescriptor>,
}

/// Immutable snapshot of the type metadata of one analyzed unit.
///
/// Descriptors are stored in declaration order and addressed by [`TypeId`].
/// The dependency graph and the fingerprint are derived lazily and memoized
/// for the lifetime of the catalog.
#[derive(Debug)]
pub struct TypeCatalog {
    assembly: String,
    types: Vec<TypeDescriptor>,
    index: HashMap<String, TypeId>,
    graph: OnceLock<DependencyGraph>,
    fingerprint: OnceLock<String>,
}

impl TypeCatalog {
    /// Build a catalog from extractor output, rejecting inconsistent metadata.
    pub fn from_snapshot(snapshot: CatalogSnapshot) -> Result<Self, CatalogError> {
        let CatalogSnapshot { assembly, types } = snapshot;
        if types.len() > u32::MAX as usize {
            return Err(CatalogError::MalformedMetadata(format!(
                "snapshot holds {} types, more than a catalog can address",
                types.len()
            )));
        }

        let mut index = HashMap::with_capacity(types.len());
        for (i, ty) in types.iter().enumerate() {
            check_identity(ty)?;
            if index.insert(ty.full_name.clone(), TypeId(i as u32)).is_some() {
                return Err(malformed(&ty.full_name, "duplicate type identity"));
            }
        }

        let catalog = Self {
            assembly,
            types,
            index,
            graph: OnceLock::new(),
            fingerprint: OnceLock::new(),
        };
        for ty in &catalog.types {
            catalog.check_references(ty)?;
        }
        Ok(catalog)
    }

    /// Convenience constructor for an in-memory list of descriptors.
    pub fn new(assembly: &str, types: Vec<TypeDescriptor>) -> Result<Self, CatalogError> {
        Self::from_snapshot(CatalogSnapshot {
            assembly: assembly.to_string(),
            types,
        })
    }

    /// Parse and validate a snapshot from JSON.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let snapshot: CatalogSnapshot = serde_json::from_str(json)?;
        Self::from_snapshot(snapshot)
    }

    /// Load and validate a snapshot file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_json(&content)?;
        tracing::debug!(
            path = %path.display(),
            types = catalog.len(),
            "loaded type catalog"
        );
        Ok(catalog)
    }

    pub fn assembly(&self) -> &str {
        &self.assembly
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Every descriptor in declaration order.
    pub fn all_types(&self) -> &[TypeDescriptor] {
        &self.types
    }

    /// Every descriptor with its id, in declaration order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (TypeId, &TypeDescriptor)> {
        self.types
            .iter()
            .enumerate()
            .map(|(i, ty)| (TypeId(i as u32), ty))
    }

    /// Descriptors whose namespace is `namespace` or nested below it.
    pub fn types_in_namespace(&self, namespace: &str) -> Vec<&TypeDescriptor> {
        self.types
            .iter()
            .filter(|ty| crate::namespace_contains(namespace, &ty.namespace))
            .collect()
    }

    /// Look up a descriptor by fully-qualified name.
    pub fn lookup(&self, identity: &str) -> Option<&TypeDescriptor> {
        self.id_of(identity).map(|id| self.get(id))
    }

    pub fn id_of(&self, identity: &str) -> Option<TypeId> {
        self.index.get(identity).copied()
    }

    /// Descriptor for an id handed out by this catalog.
    ///
    /// Panics if `id` belongs to a different, larger catalog.
    pub fn get(&self, id: TypeId) -> &TypeDescriptor {
        &self.types[id.index()]
    }

    /// Dependency edges for every type, computed on first use.
    pub fn dependency_graph(&self) -> &DependencyGraph {
        self.graph.get_or_init(|| DependencyGraph::build(self))
    }

    /// Content fingerprint, computed on first use.
    pub fn fingerprint(&self) -> &str {
        self.fingerprint
            .get_or_init(|| crate::hash::catalog_fingerprint(&self.assembly, &self.types))
    }

    /// Owned copy of the extractor-facing representation.
    pub fn to_snapshot(&self) -> CatalogSnapshot {
        CatalogSnapshot {
            assembly: self.assembly.clone(),
            types: self.types.clone(),
        }
    }

    // -- Validation --

    fn check_references(&self, ty: &TypeDescriptor) -> Result<(), CatalogError> {
        if ty.kind == TypeKind::Interface && ty.base_type.is_some() {
            return Err(malformed(&ty.full_name, "interfaces cannot declare a base type"));
        }

        if let Some(base) = &ty.base_type {
            if base.name == ty.full_name {
                return Err(malformed(&ty.full_name, "type inherits from itself"));
            }
            if let Some(target) = self.lookup(&base.name) {
                if target.is_interface() {
                    return Err(malformed(
                        &ty.full_name,
                        &format!("base type `{}` is an interface", base.name),
                    ));
                }
            }
        }

        for interface in &ty.interfaces {
            if let Some(target) = self.lookup(&interface.name) {
                if !target.is_interface() {
                    return Err(malformed(
                        &ty.full_name,
                        &format!("implemented interface `{}` is a class", interface.name),
                    ));
                }
            }
        }

        for member in &ty.members {
            if member.name.is_empty() {
                return Err(malformed(&ty.full_name, "member with empty name"));
            }
        }

        if ty.annotations.iter().any(|a| a.is_empty()) {
            return Err(malformed(&ty.full_name, "empty annotation identity"));
        }

        for reference in ty.references() {
            self.check_reference(ty, reference)?;
        }
        Ok(())
    }

    fn check_reference(&self, owner: &TypeDescriptor, reference: &TypeRef) -> Result<(), CatalogError> {
        if reference.name.is_empty() {
            return Err(malformed(&owner.full_name, "type reference with empty name"));
        }
        if reference.arguments.is_empty() && owner.is_generic_parameter(&reference.name) {
            return Ok(());
        }

        match self.lookup(&reference.name) {
            Some(target) => {
                if reference.external {
                    return Err(malformed(
                        &owner.full_name,
                        &format!("`{}` is marked external but declared in the snapshot", reference.name),
                    ));
                }
                if target.generic_arity() != reference.arguments.len() {
                    return Err(malformed(
                        &owner.full_name,
                        &format!(
                            "`{}` expects {} generic argument(s), reference supplies {}",
                            reference.name,
                            target.generic_arity(),
                            reference.arguments.len()
                        ),
                    ));
                }
            }
            None if !reference.external => {
                return Err(malformed(
                    &owner.full_name,
                    &format!("unresolved reference `{}` is not marked external", reference.name),
                ));
            }
            None => {}
        }

        for argument in &reference.arguments {
            self.check_reference(owner, argument)?;
        }
        Ok(())
    }
}

fn check_identity(ty: &TypeDescriptor) -> Result<(), CatalogError> {
    let label = if ty.full_name.is_empty() { &ty.name } else { &ty.full_name };
    if ty.name.is_empty() {
        return Err(malformed(label, "empty simple name"));
    }
    if ty.name.contains(['.', '<', '>', ',']) {
        return Err(malformed(label, "simple name contains a separator"));
    }
    if !ty.namespace.is_empty() && ty.namespace.split('.').any(str::is_empty) {
        return Err(malformed(label, "namespace has an empty segment"));
    }
    let expected = if ty.namespace.is_empty() {
        ty.name.clone()
    } else {
        format!("{}.{}", ty.namespace, ty.name)
    };
    if ty.full_name != expected {
        return Err(malformed(
            label,
            &format!("full name does not match namespace and simple name (expected `{expected}`)"),
        ));
    }
    for (i, param) in ty.generic_parameters.iter().enumerate() {
        if param.is_empty() || ty.generic_parameters[..i].contains(param) {
            return Err(malformed(label, "generic parameters must be non-empty and unique"));
        }
    }
    Ok(())
}

fn malformed(type_name: &str, reason: &str) -> CatalogError {
    CatalogError::MalformedMetadata(format!("{type_name}: {reason}"))
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
