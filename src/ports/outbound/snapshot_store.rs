use crate::graph_resolution::domain::{DependencyGraph, Resolution};
use crate::shared::Result;
use std::path::Path;

/// SnapshotStore port for persisting and reloading resolved graphs
///
/// The on-disk shape is a JSON object whose keys are canonical
/// `name@version` strings and whose values are arrays of dependency-name
/// strings; a builder result written through `save` must come back
/// unchanged through `load`.
pub trait SnapshotStore {
    /// Loads a previously saved graph. The version map of the returned
    /// resolution is seeded from the snapshot keys.
    ///
    /// # Errors
    /// Returns an error if the file is missing, oversized, or not valid
    /// snapshot JSON.
    fn load(&self, path: &Path) -> Result<Resolution>;

    /// Persists a graph in the snapshot JSON shape.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    fn save(&self, path: &Path, graph: &DependencyGraph) -> Result<()>;
}
