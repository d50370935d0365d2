pub mod dependency_graph;
pub mod package_id;
pub mod resolution;
pub mod traversal_policy;
pub mod version_map;

pub use dependency_graph::DependencyGraph;
pub use package_id::PackageId;
pub use resolution::Resolution;
pub use traversal_policy::TraversalPolicy;
pub use version_map::{VersionMap, FALLBACK_VERSION};
