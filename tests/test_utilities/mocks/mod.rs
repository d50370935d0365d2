/// Mock implementations for testing
mod mock_progress_reporter;
mod mock_registry_client;
mod mock_tree_comparator;

pub use mock_progress_reporter::MockProgressReporter;
pub use mock_registry_client::MockRegistryClient;
pub use mock_tree_comparator::MockTreeComparator;
