//! crate-viz - Dependency graph resolver and visualizer for crates.io packages
//!
//! This library resolves the transitive dependency graph of a package hosted
//! on crates.io and derives analyses over it: load order (topological sort),
//! reverse dependency lookups, and depth/filter-bounded traversal. The
//! finished graph can be rendered as a Graphviz DOT or Mermaid diagram.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`graph_resolution`): Pure data model and the core
//!   traversal/analysis services
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Version resolution
//!
//! Dependencies are declared by name; this tool resolves every name to its
//! latest published version rather than solving semver requirements. That
//! is a deliberate simplification: the resulting graph approximates what a
//! fresh `cargo update` would see, and can differ from a lockfile-accurate
//! resolution.
//!
//! # Example
//!
//! ```no_run
//! use crate_viz::prelude::*;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! // Create adapters
//! let registry = CratesIoClient::new()?;
//! let reporter = StderrProgressReporter::new();
//! let comparator = CargoTreeComparator::new();
//!
//! // Create use case
//! let use_case = ResolveGraphUseCase::new(registry, reporter, comparator);
//!
//! // Execute
//! let request = ResolveRequest::new("serde").with_version("1.0.200");
//! let response = use_case.execute(request).await?;
//!
//! // Render the graph
//! let renderer = DotRenderer::new();
//! let diagram = renderer.render(&response.resolution, &response.root)?;
//! println!("{}", diagram);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod graph_resolution;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemWriter, FixtureRegistryClient, JsonSnapshotStore, StdoutPresenter,
    };
    pub use crate::adapters::outbound::network::CratesIoClient;
    pub use crate::adapters::outbound::process::CargoTreeComparator;
    pub use crate::adapters::outbound::renderers::{DotRenderer, MermaidRenderer};
    pub use crate::application::dto::{OutputFormat, ResolveRequest, ResolveResponse};
    pub use crate::application::factories::RendererFactory;
    pub use crate::application::use_cases::ResolveGraphUseCase;
    pub use crate::graph_resolution::domain::{
        DependencyGraph, PackageId, Resolution, TraversalPolicy, VersionMap, FALLBACK_VERSION,
    };
    pub use crate::graph_resolution::services::{GraphAnalyzer, GraphBuilder, ManifestParser};
    pub use crate::ports::outbound::{
        GraphRenderer, OutputPresenter, ProgressReporter, RegistryClient, SnapshotStore,
        TreeComparator,
    };
    pub use crate::shared::Result;
}
