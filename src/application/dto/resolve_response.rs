use crate::graph_resolution::domain::{PackageId, Resolution};

/// ResolveResponse - Internal response DTO from the graph resolution use case
///
/// Carries the frozen resolution plus the derived analyses, ready for
/// renderers and presenters to consume.
#[derive(Debug, Clone)]
pub struct ResolveResponse {
    /// The root package the traversal started from
    pub root: PackageId,
    /// The frozen graph and its version map
    pub resolution: Resolution,
    /// Load order: dependencies first, root last
    pub load_order: Vec<PackageId>,
    /// Packages depending on the requested name (only when requested)
    pub dependents: Option<Vec<PackageId>>,
    /// Node count reported by the reference tool (only when requested and
    /// the tool ran successfully)
    pub reference_node_count: Option<usize>,
}

impl ResolveResponse {
    pub fn node_count(&self) -> usize {
        self.resolution.graph().node_count()
    }

    /// `Some(false)` when the reference tool ran and disagreed.
    pub fn reference_count_matches(&self) -> Option<bool> {
        self.reference_node_count
            .map(|count| count == self.node_count())
    }
}
