use crate::application::dto::{ResolveRequest, ResolveResponse};
use crate::graph_resolution::domain::{PackageId, Resolution, FALLBACK_VERSION};
use crate::graph_resolution::services::{GraphAnalyzer, GraphBuilder};
use crate::ports::outbound::{ProgressReporter, RegistryClient, TreeComparator};
use crate::shared::Result;

/// ResolveGraphUseCase - Core use case for dependency graph resolution
///
/// Orchestrates the resolution workflow: pin the root version, run the
/// breadth-first discovery, derive the load order (and, on request, the
/// reverse-dependency lookup and the reference-tool cross-check).
///
/// Infrastructure comes in through generic dependency injection.
///
/// # Type Parameters
/// * `R` - RegistryClient implementation
/// * `P` - ProgressReporter implementation
/// * `C` - TreeComparator implementation
pub struct ResolveGraphUseCase<R, P, C> {
    registry: R,
    reporter: P,
    comparator: C,
}

impl<R, P, C> ResolveGraphUseCase<R, P, C>
where
    R: RegistryClient,
    P: ProgressReporter,
    C: TreeComparator,
{
    /// Creates a new ResolveGraphUseCase with injected dependencies
    pub fn new(registry: R, reporter: P, comparator: C) -> Self {
        Self {
            registry,
            reporter,
            comparator,
        }
    }

    /// Executes the graph resolution use case
    ///
    /// # Errors
    /// Returns an error only for invalid input (a package name that cannot
    /// form a package id). Remote failures degrade inside the traversal
    /// and never surface here.
    pub async fn execute(&self, request: ResolveRequest) -> Result<ResolveResponse> {
        // Step 1: Pin the root version.
        let root_version = match &request.version {
            Some(version) => version.clone(),
            None => self.resolve_root_version(&request.package_name).await,
        };
        let root = PackageId::new(request.package_name.clone(), root_version)?;

        // Step 2: Breadth-first discovery.
        self.reporter
            .report(&format!("🕸️  Resolving dependency graph of {}", root));
        if let Some(max_depth) = request.policy.max_depth() {
            self.reporter
                .report(&format!("   - Depth limit: {}", max_depth));
        }
        if let Some(filter) = request.policy.filter() {
            self.reporter
                .report(&format!("   - Excluding names containing: '{}'", filter));
        }

        let builder = GraphBuilder::new(&self.registry, &self.reporter);
        let resolution = builder.build(&root, &request.policy).await;

        self.reporter.report_completion(&format!(
            "✅ Discovered {} package(s), {} dependency edge(s)",
            resolution.graph().node_count(),
            resolution.graph().edge_count()
        ));

        // Step 3: Load order (recomputed from the frozen graph).
        let load_order =
            GraphAnalyzer::topological_order(resolution.graph(), resolution.versions(), &root);
        self.reporter
            .report("📚 Load order (dependencies first):");
        for (index, id) in load_order.iter().enumerate() {
            self.reporter
                .report(&format!("   {:>3}. {}", index + 1, id));
        }

        // Step 4: Reverse lookup, when asked for.
        let dependents = match &request.dependents_of {
            Some(name) => Some(self.lookup_dependents(&resolution, name)),
            None => None,
        };

        // Step 5: Reference-tool cross-check, when asked for.
        let reference_node_count = if request.check_against_reference {
            self.run_reference_check(&root, resolution.graph().node_count())
                .await
        } else {
            None
        };

        Ok(ResolveResponse {
            root,
            resolution,
            load_order,
            dependents,
            reference_node_count,
        })
    }

    /// Resolves the latest version of the root, degrading to the sentinel
    /// version if the registry cannot answer.
    async fn resolve_root_version(&self, name: &str) -> String {
        self.reporter
            .report(&format!("🔍 Looking up latest version of '{}'", name));
        match self.registry.resolve_latest_version(name).await {
            Ok(version) => {
                self.reporter
                    .report(&format!("   - Latest version: {}", version));
                version
            }
            Err(e) => {
                self.reporter.report_error(&format!(
                    "⚠️  Warning: could not resolve latest version for '{}': {} (using {})",
                    name, e, FALLBACK_VERSION
                ));
                FALLBACK_VERSION.to_string()
            }
        }
    }

    fn lookup_dependents(&self, resolution: &Resolution, name: &str) -> Vec<PackageId> {
        let mut reverse =
            GraphAnalyzer::reverse_index(resolution.graph(), resolution.versions());
        let dependents = match resolution.versions().resolve_id(name) {
            Ok(target) => reverse.remove(&target).unwrap_or_default(),
            Err(_) => Vec::new(),
        };

        if dependents.is_empty() {
            self.reporter
                .report(&format!("🔎 Nothing in the graph depends on '{}'", name));
        } else {
            self.reporter
                .report(&format!("🔎 Packages depending on '{}':", name));
            for id in &dependents {
                self.reporter.report(&format!("   - {}", id));
            }
        }
        dependents
    }

    async fn run_reference_check(&self, root: &PackageId, own_count: usize) -> Option<usize> {
        self.reporter
            .report("🧮 Cross-checking node count with cargo tree...");
        match self.comparator.count_nodes(root).await {
            Ok(reference_count) => {
                if reference_count == own_count {
                    self.reporter.report(&format!(
                        "   - Counts agree: {} package(s)",
                        reference_count
                    ));
                } else {
                    self.reporter.report_error(&format!(
                        "⚠️  Count mismatch: resolver found {} package(s), cargo tree found {}",
                        own_count, reference_count
                    ));
                }
                Some(reference_count)
            }
            Err(e) => {
                self.reporter.report_error(&format!(
                    "⚠️  Warning: reference check skipped: {}",
                    e
                ));
                None
            }
        }
    }
}
