use crate::graph_resolution::domain::PackageId;
use crate::ports::outbound::TreeComparator;
use crate::shared::Result;
use async_trait::async_trait;
use std::collections::HashSet;
use std::fs;
use tokio::process::Command;

/// Name given to the throwaway package `cargo tree` runs against. Its own
/// line is excluded from the reported count.
const SCRATCH_PACKAGE: &str = "crate-viz-scratch";

/// CargoTreeComparator adapter shelling out to `cargo tree`
///
/// Builds a scratch project in a temporary directory that depends on the
/// root package at its exact version, then counts the distinct packages
/// `cargo tree` prints. Cargo resolves with real semver constraints while
/// this tool resolves every name to its latest version, so the two counts
/// are a sanity signal, not an equality guarantee.
pub struct CargoTreeComparator;

impl CargoTreeComparator {
    pub fn new() -> Self {
        Self
    }

    /// Counts distinct `name vX.Y.Z` lines, ignoring the scratch package
    /// and `(*)` de-duplication markers.
    fn count_distinct_packages(stdout: &str) -> usize {
        let mut seen: HashSet<(String, String)> = HashSet::new();
        for line in stdout.lines() {
            let mut parts = line.split_whitespace();
            let (Some(name), Some(version)) = (parts.next(), parts.next()) else {
                continue;
            };
            if name == SCRATCH_PACKAGE || !version.starts_with('v') {
                continue;
            }
            seen.insert((name.to_string(), version.to_string()));
        }
        seen.len()
    }
}

impl Default for CargoTreeComparator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TreeComparator for CargoTreeComparator {
    async fn count_nodes(&self, root: &PackageId) -> Result<usize> {
        let scratch = tempfile::tempdir()?;

        fs::write(
            scratch.path().join("Cargo.toml"),
            format!(
                "[package]\nname = \"{}\"\nversion = \"0.0.0\"\nedition = \"2021\"\n\n[dependencies]\n{} = \"={}\"\n",
                SCRATCH_PACKAGE,
                root.name(),
                root.version()
            ),
        )?;
        fs::create_dir(scratch.path().join("src"))?;
        fs::write(scratch.path().join("src").join("lib.rs"), "")?;

        let output = Command::new("cargo")
            .arg("tree")
            .arg("--prefix")
            .arg("none")
            .current_dir(scratch.path())
            .output()
            .await?;

        if !output.status.success() {
            anyhow::bail!(
                "cargo tree failed: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        Ok(Self::count_distinct_packages(&String::from_utf8_lossy(
            &output.stdout,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_distinct_packages() {
        let stdout = "\
crate-viz-scratch v0.0.0 (/tmp/scratch)
serde v1.0.200
serde_derive v1.0.200
proc-macro2 v1.0.80
quote v1.0.36
proc-macro2 v1.0.80 (*)
";
        assert_eq!(CargoTreeComparator::count_distinct_packages(stdout), 4);
    }

    #[test]
    fn test_count_distinct_packages_empty_output() {
        assert_eq!(CargoTreeComparator::count_distinct_packages(""), 0);
    }

    #[test]
    fn test_count_ignores_non_package_lines() {
        let stdout = "warning: something\nserde v1.0.200\n";
        assert_eq!(CargoTreeComparator::count_distinct_packages(stdout), 1);
    }

    #[test]
    fn test_count_distinguishes_versions() {
        let stdout = "syn v1.0.109\nsyn v2.0.60\n";
        assert_eq!(CargoTreeComparator::count_distinct_packages(stdout), 2);
    }
}
