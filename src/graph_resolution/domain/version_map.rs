use super::PackageId;
use crate::shared::Result;
use std::collections::HashMap;

/// Version used when the registry cannot tell us the latest version of a
/// dependency name. Resolution failures degrade to this instead of failing
/// the traversal.
pub const FALLBACK_VERSION: &str = "1.0.0";

/// Name → resolved-version mapping built up during discovery.
///
/// Each dependency name is resolved against the registry exactly once per
/// run; the topological sort and the reverse index read this map instead of
/// asking the registry again.
#[derive(Debug, Clone, Default)]
pub struct VersionMap {
    versions: HashMap<String, String>,
}

impl VersionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.versions.get(name).map(String::as_str)
    }

    pub fn insert(&mut self, name: impl Into<String>, version: impl Into<String>) {
        self.versions.insert(name.into(), version.into());
    }

    /// Resolved version for `name`, or [`FALLBACK_VERSION`] if the name was
    /// never resolved during discovery.
    pub fn resolve(&self, name: &str) -> &str {
        self.get(name).unwrap_or(FALLBACK_VERSION)
    }

    /// Resolves a dependency name to a concrete [`PackageId`].
    ///
    /// # Errors
    /// Returns an error if the name does not form a valid package id.
    pub fn resolve_id(&self, name: &str) -> Result<PackageId> {
        PackageId::new(name, self.resolve(name))
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }
}
