mod adapters;
mod application;
mod cli;
mod config;
mod graph_resolution;
mod ports;
mod shared;

use adapters::outbound::console::StderrProgressReporter;
use adapters::outbound::filesystem::{
    FileSystemWriter, FixtureRegistryClient, JsonSnapshotStore, StdoutPresenter,
};
use adapters::outbound::network::CratesIoClient;
use adapters::outbound::process::CargoTreeComparator;
use application::dto::{OutputFormat, ResolveRequest, ResolveResponse};
use application::factories::RendererFactory;
use application::use_cases::ResolveGraphUseCase;
use cli::Args;
use graph_resolution::domain::TraversalPolicy;
use ports::outbound::{OutputPresenter, RegistryClient, SnapshotStore};
use shared::error::ExitCode;
use shared::Result;
use std::path::Path;
use std::process;
use std::str::FromStr;

#[tokio::main]
async fn main() {
    match run().await {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

async fn run() -> Result<ExitCode> {
    let args = Args::parse_args();

    let config = match &args.config {
        Some(path) => Some(config::load_config_from_path(path)?),
        None => config::discover_config(Path::new("."))?,
    }
    .unwrap_or_default();

    // Command-line arguments win over config file values.
    let (package_name, version) = match &args.package {
        Some(spec) => cli::parse_package_spec(spec)?,
        None => match config.package.clone() {
            Some(name) => (name, config.version.clone()),
            None => {
                anyhow::bail!(
                    "No package specified.\n\n💡 Hint: Pass a package spec (e.g. `crate-viz serde`) or set 'package' in crate-viz.config.json"
                );
            }
        },
    };

    let format = match args.format {
        Some(format) => format,
        None => match &config.format {
            Some(name) => OutputFormat::from_str(name)
                .map_err(|e| anyhow::anyhow!("Invalid config: {}", e))?,
            None => OutputFormat::default(),
        },
    };

    let max_depth = args.max_depth.or(config.max_depth);
    let filter = args.filter.clone().or_else(|| config.filter.clone());
    let output = args.output.clone().or_else(|| config.output.clone());
    let snapshot = args.snapshot.clone().or_else(|| config.snapshot.clone());

    let mut policy = TraversalPolicy::unbounded();
    if let Some(depth) = max_depth {
        policy = policy.with_max_depth(depth);
    }
    if let Some(filter) = filter {
        policy = policy.with_filter(filter);
    }

    let mut request = ResolveRequest::new(package_name).with_policy(policy);
    if let Some(version) = version {
        request = request.with_version(version);
    }
    if args.check {
        request = request.with_reference_check();
    }
    if let Some(name) = &args.dependents_of {
        request = request.with_dependents_of(name.clone());
    }

    // Snapshot mode swaps the network client for a fixture-backed one; the
    // traversal itself is identical.
    let response = match &snapshot {
        Some(snapshot_path) => {
            let store = JsonSnapshotStore::new();
            let registry = FixtureRegistryClient::load(&store, snapshot_path)?;
            resolve(registry, args.quiet, request).await?
        }
        None => resolve(CratesIoClient::new()?, args.quiet, request).await?,
    };

    if let Some(path) = &args.save_snapshot {
        JsonSnapshotStore::new().save(path, response.resolution.graph())?;
        eprintln!("💾 Snapshot saved to {}", path.display());
    }

    if !args.quiet {
        eprintln!("{}", RendererFactory::progress_message(format));
    }

    let renderer = RendererFactory::create(format);
    let rendered = renderer.render(&response.resolution, &response.root)?;

    let presenter: Box<dyn OutputPresenter> = match &output {
        Some(path) => Box::new(FileSystemWriter::new(path.clone())),
        None => Box::new(StdoutPresenter::new()),
    };
    presenter.present(&rendered)?;

    match response.reference_count_matches() {
        Some(false) => Ok(ExitCode::CountMismatch),
        _ => Ok(ExitCode::Success),
    }
}

/// Runs the use case with the standard reporter and comparator wired in.
async fn resolve<R: RegistryClient>(
    registry: R,
    quiet: bool,
    request: ResolveRequest,
) -> Result<ResolveResponse> {
    let reporter = if quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    };

    let use_case = ResolveGraphUseCase::new(registry, reporter, CargoTreeComparator::new());
    use_case.execute(request).await
}
