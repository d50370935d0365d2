use crate::graph_resolution::domain::PackageId;
use crate::shared::Result;
use async_trait::async_trait;

/// TreeComparator port for sanity-checking a resolution against a
/// reference tool
///
/// Implementations ask an external dependency tool (e.g. `cargo tree`) how
/// many distinct packages it sees for the same root, so the resolver's node
/// count can be cross-checked. Purely diagnostic; failures are reported as
/// warnings, never as fatal errors.
#[async_trait]
pub trait TreeComparator: Send + Sync {
    /// Returns the number of distinct packages the reference tool reports
    /// for `root`.
    ///
    /// # Errors
    /// Returns an error if the tool cannot be run or its output cannot be
    /// understood.
    async fn count_nodes(&self, root: &PackageId) -> Result<usize>;
}
