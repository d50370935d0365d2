use crate::graph_resolution::domain::{
    DependencyGraph, PackageId, Resolution, TraversalPolicy, VersionMap, FALLBACK_VERSION,
};
use crate::graph_resolution::services::ManifestParser;
use crate::ports::outbound::{ProgressReporter, RegistryClient};
use crate::shared::Result;
use std::collections::{HashSet, VecDeque};

/// GraphBuilder - Core breadth-first discovery of a dependency closure
///
/// Starting from a root package, the builder walks the frontier one queue
/// entry at a time: fetch the node's manifest, record its dependency names,
/// resolve each name to its latest version, and enqueue unseen packages one
/// level deeper. Depth and filter policy bound the walk; a bounded node is
/// still recorded, with an empty dependency list, so it shows up as a leaf.
///
/// The visited set is checked at enqueue time, which is what keeps diamond
/// dependencies and registry cycles from enqueueing the same package twice.
///
/// All remote failures degrade the affected node to an empty dependency
/// list; `build` itself never fails.
pub struct GraphBuilder<'a, R, P> {
    registry: &'a R,
    reporter: &'a P,
}

impl<'a, R, P> GraphBuilder<'a, R, P>
where
    R: RegistryClient,
    P: ProgressReporter,
{
    pub fn new(registry: &'a R, reporter: &'a P) -> Self {
        Self { registry, reporter }
    }

    /// Computes the depth- and filter-bounded transitive dependency closure
    /// of `root`.
    ///
    /// Every run starts from fresh state and returns a fresh
    /// [`Resolution`]; nothing carries over between calls.
    pub async fn build(&self, root: &PackageId, policy: &TraversalPolicy) -> Resolution {
        let mut graph = DependencyGraph::new();
        let mut versions = VersionMap::new();
        let mut visited: HashSet<String> = HashSet::new();
        let mut queue: VecDeque<(PackageId, usize)> = VecDeque::new();

        // The root's version is pinned by the caller, never re-resolved.
        versions.insert(root.name(), root.version());
        visited.insert(root.canonical());
        queue.push_back((root.clone(), 0));

        while let Some((id, depth)) = queue.pop_front() {
            // Idempotence guard: the visited set already prevents double
            // enqueueing, so this only fires if a caller-seeded duplicate
            // slips in.
            if graph.contains(&id) {
                continue;
            }

            if policy.cuts_off(depth) {
                self.reporter
                    .report(&format!("✂️  {} reached depth limit, not expanded", id));
                graph.insert(id, Vec::new());
                continue;
            }

            if policy.excludes(id.name()) {
                self.reporter
                    .report(&format!("🚫 {} matches exclusion filter, not expanded", id));
                graph.insert(id, Vec::new());
                continue;
            }

            let dependency_names = match self.fetch_dependency_names(&id).await {
                Ok(names) => names,
                Err(e) => {
                    self.reporter.report_error(&format!(
                        "⚠️  Warning: failed to fetch manifest for {}: {}",
                        id, e
                    ));
                    Vec::new()
                }
            };

            self.reporter.report(&format!(
                "📦 {} → {} dependenc{}",
                id,
                dependency_names.len(),
                if dependency_names.len() == 1 { "y" } else { "ies" }
            ));

            for name in &dependency_names {
                let version = self.resolve_version(name, &mut versions).await;
                match PackageId::new(name.clone(), version) {
                    Ok(dep_id) => {
                        if visited.insert(dep_id.canonical()) {
                            queue.push_back((dep_id, depth + 1));
                        }
                    }
                    Err(e) => {
                        self.reporter
                            .report_error(&format!("⚠️  Warning: skipping dependency '{}': {}", name, e));
                    }
                }
            }

            graph.insert(id, dependency_names);
        }

        Resolution::new(graph, versions)
    }

    async fn fetch_dependency_names(&self, id: &PackageId) -> Result<Vec<String>> {
        let manifest = self.registry.fetch_manifest(id.name(), id.version()).await?;
        ManifestParser::parse_dependency_names(&manifest)
    }

    /// Resolves `name` to its latest version, asking the registry at most
    /// once per name per run. A failed lookup degrades to
    /// [`FALLBACK_VERSION`].
    async fn resolve_version(&self, name: &str, versions: &mut VersionMap) -> String {
        if let Some(version) = versions.get(name) {
            return version.to_string();
        }

        let version = match self.registry.resolve_latest_version(name).await {
            Ok(version) => version,
            Err(e) => {
                self.reporter.report_error(&format!(
                    "⚠️  Warning: could not resolve latest version for '{}': {} (using {})",
                    name, e, FALLBACK_VERSION
                ));
                FALLBACK_VERSION.to_string()
            }
        };

        versions.insert(name, &version);
        version
    }
}
