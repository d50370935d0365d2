/// Filesystem adapters for snapshot and output I/O
mod file_writer;
mod fixture_registry;
mod snapshot_store;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use fixture_registry::FixtureRegistryClient;
pub use snapshot_store::JsonSnapshotStore;
