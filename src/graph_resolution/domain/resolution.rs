use super::{DependencyGraph, VersionMap};

/// The complete output of one traversal: the frozen dependency graph plus
/// the name → version mapping that was built alongside it.
///
/// Returned fresh from every `build()` call; nothing is shared between
/// runs, so one process can resolve several packages independently.
#[derive(Debug, Clone)]
pub struct Resolution {
    graph: DependencyGraph,
    versions: VersionMap,
}

impl Resolution {
    pub fn new(graph: DependencyGraph, versions: VersionMap) -> Self {
        Self { graph, versions }
    }

    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }

    pub fn versions(&self) -> &VersionMap {
        &self.versions
    }

    pub fn into_parts(self) -> (DependencyGraph, VersionMap) {
        (self.graph, self.versions)
    }
}

#[cfg(test)]
mod tests {
    use super::super::PackageId;
    use super::*;

    #[test]
    fn test_resolution_accessors() {
        let mut graph = DependencyGraph::new();
        graph.insert(PackageId::new("demo", "1.0").unwrap(), vec!["left".into()]);
        let mut versions = VersionMap::new();
        versions.insert("left", "0.2.0");

        let resolution = Resolution::new(graph, versions);
        assert_eq!(resolution.graph().node_count(), 1);
        assert_eq!(resolution.versions().resolve("left"), "0.2.0");

        let (graph, versions) = resolution.into_parts();
        assert_eq!(graph.node_count(), 1);
        assert_eq!(versions.len(), 1);
    }
}
