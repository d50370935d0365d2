use super::PackageId;
use std::collections::HashMap;

/// DependencyGraph aggregate: the adjacency map produced by a traversal.
///
/// Each key is a discovered package; each value is the list of dependency
/// names recorded verbatim from that package's manifest (sorted and
/// deduplicated by the parser, not yet resolved to versions). Keys are
/// inserted at most once per run and iteration follows insertion order.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    nodes: HashMap<PackageId, Vec<String>>,
    order: Vec<PackageId>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a node and its dependency names.
    ///
    /// Returns `false` (and leaves the existing entry untouched) if the
    /// node is already present — discovery is idempotent.
    pub fn insert(&mut self, id: PackageId, dependency_names: Vec<String>) -> bool {
        if self.nodes.contains_key(&id) {
            return false;
        }
        self.order.push(id.clone());
        self.nodes.insert(id, dependency_names);
        true
    }

    pub fn contains(&self, id: &PackageId) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn dependency_names(&self, id: &PackageId) -> Option<&[String]> {
        self.nodes.get(id).map(Vec::as_slice)
    }

    /// Iterates nodes in insertion (discovery) order.
    pub fn iter(&self) -> impl Iterator<Item = (&PackageId, &[String])> {
        self.order
            .iter()
            .map(move |id| (id, self.nodes[id].as_slice()))
    }

    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
