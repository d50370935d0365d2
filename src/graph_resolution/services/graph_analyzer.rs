use crate::graph_resolution::domain::{DependencyGraph, PackageId, VersionMap};
use std::collections::{HashMap, HashSet};

/// GraphAnalyzer service for deriving analyses over a frozen graph
///
/// Both analyses are recomputed from scratch on every call; nothing is
/// cached between queries. Dependency names are resolved to package ids
/// through the version map recorded during discovery, so no registry
/// round trips happen here.
pub struct GraphAnalyzer;

impl GraphAnalyzer {
    /// Load order: every node appears after all of its dependencies
    /// (leaves first, root last).
    ///
    /// Depth-first post-order over the graph, driven by an explicit work
    /// stack so arbitrarily deep chains cannot overflow the call stack.
    /// Only dependency ids that exist as graph keys are entered, which
    /// stops naturally at depth-cut and filtered leaves. If the registry
    /// served cyclic manifests the traversal still terminates, but the
    /// relative order within the cycle is arbitrary.
    pub fn topological_order(
        graph: &DependencyGraph,
        versions: &VersionMap,
        root: &PackageId,
    ) -> Vec<PackageId> {
        let mut order = Vec::with_capacity(graph.node_count());
        let mut visited: HashSet<PackageId> = HashSet::new();
        // (node, children_done): a node is first expanded, then emitted
        // once it comes back with the flag set.
        let mut stack: Vec<(PackageId, bool)> = vec![(root.clone(), false)];

        while let Some((id, children_done)) = stack.pop() {
            if children_done {
                order.push(id);
                continue;
            }
            if !visited.insert(id.clone()) {
                continue;
            }
            let Some(names) = graph.dependency_names(&id) else {
                continue;
            };
            stack.push((id, true));
            // Reversed so the first declared dependency is expanded first.
            for name in names.iter().rev() {
                let Ok(dep_id) = versions.resolve_id(name) else {
                    continue;
                };
                if graph.contains(&dep_id) && !visited.contains(&dep_id) {
                    stack.push((dep_id, false));
                }
            }
        }

        order
    }

    /// Reverse-adjacency index: for every package, which packages declare
    /// a dependency on it.
    ///
    /// Entries within each list follow the forward graph's insertion
    /// order.
    pub fn reverse_index(
        graph: &DependencyGraph,
        versions: &VersionMap,
    ) -> HashMap<PackageId, Vec<PackageId>> {
        let mut reverse: HashMap<PackageId, Vec<PackageId>> = HashMap::new();

        for (id, names) in graph.iter() {
            for name in names {
                let Ok(target) = versions.resolve_id(name) else {
                    continue;
                };
                reverse.entry(target).or_default().push(id.clone());
            }
        }

        reverse
    }
}
