use crate::graph_resolution::domain::Resolution;
use crate::ports::outbound::{RegistryClient, SnapshotStore};
use crate::shared::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;

/// FixtureRegistryClient adapter serving manifests from an on-disk snapshot
///
/// Test mode: instead of talking to crates.io, this adapter replays a
/// previously saved graph. Manifest text is synthesized from the recorded
/// dependency names, so the traversal (including depth and filter policy)
/// runs against it exactly as it would against the network.
pub struct FixtureRegistryClient {
    manifests: HashMap<String, String>,
    latest: HashMap<String, String>,
}

impl FixtureRegistryClient {
    /// Loads the fixture through a snapshot store.
    pub fn load(store: &dyn SnapshotStore, path: &Path) -> Result<Self> {
        Ok(Self::from_resolution(&store.load(path)?))
    }

    pub fn from_resolution(resolution: &Resolution) -> Self {
        let mut manifests = HashMap::new();
        let mut latest = HashMap::new();

        for (id, dependency_names) in resolution.graph().iter() {
            let mut manifest = String::from("[dependencies]\n");
            for name in dependency_names {
                manifest.push_str(&format!("{} = \"*\"\n", name));
            }
            manifests.insert(id.canonical(), manifest);
            latest.insert(id.name().to_string(), id.version().to_string());
        }

        Self { manifests, latest }
    }
}

#[async_trait]
impl RegistryClient for FixtureRegistryClient {
    async fn fetch_manifest(&self, name: &str, version: &str) -> Result<String> {
        self.manifests
            .get(&format!("{}@{}", name, version))
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("snapshot has no entry for {}@{}", name, version))
    }

    async fn resolve_latest_version(&self, name: &str) -> Result<String> {
        self.latest
            .get(name)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("snapshot has no version for '{}'", name))
    }
}
