use clap::Parser;
use std::path::PathBuf;

use crate::application::dto::OutputFormat;
use crate::shared::error::VizError;
use crate::shared::Result;

/// Resolve and visualize the dependency graph of a crates.io package
#[derive(Parser, Debug)]
#[command(name = "crate-viz")]
#[command(version)]
#[command(about = "Resolve and visualize the dependency graph of a crates.io package", long_about = None)]
pub struct Args {
    /// Package to resolve: NAME or NAME@VERSION (version defaults to the latest release)
    pub package: Option<String>,

    /// Diagram format: dot or mermaid (defaults to dot)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Maximum traversal depth; nodes at the limit are kept but not expanded
    #[arg(short = 'd', long)]
    pub max_depth: Option<usize>,

    /// Exclude packages whose name contains this substring (case-insensitive)
    #[arg(short = 'x', long, value_name = "SUBSTRING")]
    pub filter: Option<String>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Resolve against an on-disk graph snapshot instead of crates.io
    #[arg(long, value_name = "FILE")]
    pub snapshot: Option<PathBuf>,

    /// Save the resolved graph as a snapshot file
    #[arg(long, value_name = "FILE")]
    pub save_snapshot: Option<PathBuf>,

    /// Cross-check the node count against `cargo tree`
    #[arg(long)]
    pub check: bool,

    /// Report which packages in the graph depend on NAME
    #[arg(long, value_name = "NAME")]
    pub dependents_of: Option<String>,

    /// Suppress per-node progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to a crate-viz.config.json file (auto-discovered otherwise)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Splits a `NAME` or `NAME@VERSION` spec into its parts.
pub fn parse_package_spec(spec: &str) -> Result<(String, Option<String>)> {
    let spec = spec.trim();
    if spec.is_empty() {
        return Err(VizError::InvalidPackageSpec {
            spec: spec.to_string(),
            reason: "empty package spec".to_string(),
        }
        .into());
    }

    match spec.split_once('@') {
        None => Ok((spec.to_string(), None)),
        Some((name, version)) => {
            if name.is_empty() {
                return Err(VizError::InvalidPackageSpec {
                    spec: spec.to_string(),
                    reason: "missing package name before '@'".to_string(),
                }
                .into());
            }
            if version.is_empty() {
                return Err(VizError::InvalidPackageSpec {
                    spec: spec.to_string(),
                    reason: "missing version after '@'".to_string(),
                }
                .into());
            }
            if version.contains('@') {
                return Err(VizError::InvalidPackageSpec {
                    spec: spec.to_string(),
                    reason: "more than one '@' separator".to_string(),
                }
                .into());
            }
            Ok((name.to_string(), Some(version.to_string())))
        }
    }
}
