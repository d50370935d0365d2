use crate::shared::Result;
use async_trait::async_trait;

/// RegistryClient port for talking to the package registry
///
/// This port abstracts the remote registry (crates.io) behind the two
/// operations the traversal needs: fetching a package's manifest text and
/// looking up the newest published version of a name.
///
/// # Async Support
/// All methods are async; implementations must be `Send + Sync`.
#[async_trait]
pub trait RegistryClient: Send + Sync {
    /// Fetches the manifest text for a specific package version.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The network request fails or returns a non-2xx status
    /// - The downloaded archive contains no manifest entry
    ///
    /// The caller treats any error as "this node has no dependencies" and
    /// keeps traversing; a failed fetch never aborts a run.
    async fn fetch_manifest(&self, name: &str, version: &str) -> Result<String>;

    /// Looks up the latest published version of a package name.
    ///
    /// Dependencies are declared by name only at this stage, and this tool
    /// deliberately resolves every name to its latest known version rather
    /// than solving semver requirements. Callers fall back to a sentinel
    /// version when this fails.
    async fn resolve_latest_version(&self, name: &str) -> Result<String>;
}
