/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (registry, file system, console, etc.).
pub mod graph_renderer;
pub mod output_presenter;
pub mod progress_reporter;
pub mod registry_client;
pub mod snapshot_store;
pub mod tree_comparator;

pub use graph_renderer::GraphRenderer;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use registry_client::RegistryClient;
pub use snapshot_store::SnapshotStore;
pub use tree_comparator::TreeComparator;
