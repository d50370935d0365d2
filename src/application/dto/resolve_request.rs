use crate::graph_resolution::domain::TraversalPolicy;

/// ResolveRequest - Internal request DTO for the graph resolution use case
#[derive(Debug, Clone)]
pub struct ResolveRequest {
    /// Name of the root package
    pub package_name: String,
    /// Pinned root version; `None` means "resolve the latest"
    pub version: Option<String>,
    /// Depth and filter bounds for the traversal
    pub policy: TraversalPolicy,
    /// Whether to cross-check the node count against `cargo tree`
    pub check_against_reference: bool,
    /// If set, answer "which packages depend on this name"
    pub dependents_of: Option<String>,
}

impl ResolveRequest {
    pub fn new(package_name: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            version: None,
            policy: TraversalPolicy::unbounded(),
            check_against_reference: false,
            dependents_of: None,
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_policy(mut self, policy: TraversalPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_reference_check(mut self) -> Self {
        self.check_against_reference = true;
        self
    }

    pub fn with_dependents_of(mut self, name: impl Into<String>) -> Self {
        self.dependents_of = Some(name.into());
        self
    }
}
