//! Type-level dependency edges derived from a [`TypeCatalog`].
//!
//! Edges are computed per type from its declarations (no traversal), so cyclic
//! dependencies among application types are harmless. Cycles are still found
//! and reported through strongly connected components.

use std::collections::HashSet;

use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Serialize};

use crate::catalog::TypeCatalog;
use crate::types::{TypeDescriptor, TypeId, TypeRef};

/// How a type comes to depend on another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    Inheritance,
    InterfaceImplementation,
    MemberSignature,
    Annotation,
}

impl EdgeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeKind::Inheritance => "inheritance",
            EdgeKind::InterfaceImplementation => "interface_implementation",
            EdgeKind::MemberSignature => "member_signature",
            EdgeKind::Annotation => "annotation",
        }
    }
}

impl std::fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A directed dependency from one catalog type to another type identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyEdge {
    pub from: TypeId,
    /// Fully-qualified identity of the target type.
    pub target: String,
    /// Namespace of the target: the catalog's declaration when the target is
    /// resolved, the literal prefix of `target` otherwise.
    pub target_namespace: String,
    /// Present when the target is declared in the same catalog.
    pub target_id: Option<TypeId>,
    pub kind: EdgeKind,
}

impl DependencyEdge {
    /// True if the target lives in `namespace` (or below it), or is the type
    /// named by `namespace` itself.
    pub fn resolves_into(&self, namespace: &str) -> bool {
        crate::namespace_contains(namespace, &self.target_namespace)
            || crate::namespace_contains(namespace, &self.target)
    }
}

/// Dependency edges of every type in a catalog, indexed by [`TypeId`].
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    edges: Vec<Vec<DependencyEdge>>,
    cycles: Vec<Vec<TypeId>>,
    in_cycle: Vec<bool>,
}

impl DependencyGraph {
    pub fn build(catalog: &TypeCatalog) -> Self {
        let edges: Vec<Vec<DependencyEdge>> = catalog
            .iter()
            .map(|(id, ty)| edges_for(catalog, id, ty))
            .collect();

        let mut graph: DiGraph<TypeId, ()> =
            DiGraph::with_capacity(edges.len(), edges.iter().map(Vec::len).sum());
        let nodes: Vec<NodeIndex> = (0..edges.len())
            .map(|i| graph.add_node(TypeId(i as u32)))
            .collect();
        for (from, out) in edges.iter().enumerate() {
            for edge in out {
                if let Some(to) = edge.target_id {
                    graph.add_edge(nodes[from], nodes[to.index()], ());
                }
            }
        }

        let mut cycles: Vec<Vec<TypeId>> = tarjan_scc(&graph)
            .into_iter()
            .filter(|scc| scc.len() > 1)
            .map(|scc| {
                let mut ids: Vec<TypeId> = scc.into_iter().map(|n| graph[n]).collect();
                ids.sort();
                ids
            })
            .collect();
        cycles.sort();

        let mut in_cycle = vec![false; edges.len()];
        for id in cycles.iter().flatten() {
            in_cycle[id.index()] = true;
        }

        let graph = Self {
            edges,
            cycles,
            in_cycle,
        };
        tracing::debug!(
            types = graph.edges.len(),
            edges = graph.edge_count(),
            cycles = graph.cycles.len(),
            "built dependency graph"
        );
        graph
    }

    /// Outgoing edges of `id`, in declaration order of the references.
    pub fn edges_from(&self, id: TypeId) -> &[DependencyEdge] {
        self.edges.get(id.index()).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every edge of the graph, grouped by source type.
    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(Vec::len).sum()
    }

    /// True if any edge of `id` resolves into `namespace`.
    pub fn depends_on(&self, id: TypeId, namespace: &str) -> bool {
        self.edges_from(id).iter().any(|e| e.resolves_into(namespace))
    }

    /// Types with at least one edge whose target is `id`, in declaration order.
    pub fn dependents_of(&self, id: TypeId) -> Vec<TypeId> {
        self.edges
            .iter()
            .enumerate()
            .filter(|(_, out)| out.iter().any(|e| e.target_id == Some(id)))
            .map(|(i, _)| TypeId(i as u32))
            .collect()
    }

    /// Groups of catalog types that depend on each other, each sorted by
    /// declaration order.
    pub fn cycles(&self) -> &[Vec<TypeId>] {
        &self.cycles
    }

    pub fn in_cycle(&self, id: TypeId) -> bool {
        self.in_cycle.get(id.index()).copied().unwrap_or(false)
    }
}

fn edges_for(catalog: &TypeCatalog, id: TypeId, ty: &TypeDescriptor) -> Vec<DependencyEdge> {
    let mut collector = EdgeCollector {
        catalog,
        owner: ty,
        from: id,
        seen: HashSet::new(),
        edges: Vec::new(),
    };
    if let Some(base) = &ty.base_type {
        collector.add_ref(base, EdgeKind::Inheritance);
    }
    for interface in &ty.interfaces {
        collector.add_ref(interface, EdgeKind::InterfaceImplementation);
    }
    for member in &ty.members {
        for reference in &member.types {
            collector.add_ref(reference, EdgeKind::MemberSignature);
        }
    }
    for annotation in &ty.annotations {
        collector.add_target(annotation, EdgeKind::Annotation);
    }
    collector.edges
}

struct EdgeCollector<'a> {
    catalog: &'a TypeCatalog,
    owner: &'a TypeDescriptor,
    from: TypeId,
    seen: HashSet<(String, EdgeKind)>,
    edges: Vec<DependencyEdge>,
}

impl EdgeCollector<'_> {
    fn add_ref(&mut self, reference: &TypeRef, kind: EdgeKind) {
        // Bindings of the owner's own generic parameters are not dependencies.
        if reference.arguments.is_empty() && self.owner.is_generic_parameter(&reference.name) {
            return;
        }
        self.add_target(&reference.name, kind);
        for argument in &reference.arguments {
            self.add_ref(argument, kind);
        }
    }

    fn add_target(&mut self, target: &str, kind: EdgeKind) {
        if target == self.owner.full_name {
            return;
        }
        if !self.seen.insert((target.to_string(), kind)) {
            return;
        }
        let target_id = self.catalog.id_of(target);
        let target_namespace = match target_id {
            Some(tid) => self.catalog.get(tid).namespace.clone(),
            None => crate::namespace_of(target).to_string(),
        };
        self.edges.push(DependencyEdge {
            from: self.from,
            target: target.to_string(),
            target_namespace,
            target_id,
            kind,
        });
    }
}
