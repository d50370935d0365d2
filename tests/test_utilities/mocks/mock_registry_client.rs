use async_trait::async_trait;
use crate_viz::prelude::*;
use std::collections::HashMap;

/// Mock RegistryClient for testing
///
/// Serves synthesized manifests from an in-memory map keyed by
/// `name@version`; the latest-version lookup answers from the same
/// registrations.
pub struct MockRegistryClient {
    manifests: HashMap<String, String>,
    latest: HashMap<String, String>,
}

impl MockRegistryClient {
    pub fn new() -> Self {
        Self {
            manifests: HashMap::new(),
            latest: HashMap::new(),
        }
    }

    /// Registers a package with the given dependency names.
    pub fn with_package(mut self, name: &str, version: &str, deps: &[&str]) -> Self {
        let mut manifest = String::from("[dependencies]\n");
        for dep in deps {
            manifest.push_str(&format!("{} = \"*\"\n", dep));
        }
        self.manifests
            .insert(format!("{}@{}", name, version), manifest);
        self.latest.insert(name.to_string(), version.to_string());
        self
    }

    /// Registers a name whose version resolves but whose archive download
    /// always fails.
    pub fn with_broken_archive(mut self, name: &str, version: &str) -> Self {
        self.latest.insert(name.to_string(), version.to_string());
        self
    }
}

impl Default for MockRegistryClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RegistryClient for MockRegistryClient {
    async fn fetch_manifest(&self, name: &str, version: &str) -> Result<String> {
        self.manifests
            .get(&format!("{}@{}", name, version))
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("mock registry has no archive for {}@{}", name, version))
    }

    async fn resolve_latest_version(&self, name: &str) -> Result<String> {
        self.latest
            .get(name)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("mock registry has no versions for '{}'", name))
    }
}
