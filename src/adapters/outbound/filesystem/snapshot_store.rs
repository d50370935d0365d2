use crate::graph_resolution::domain::{DependencyGraph, PackageId, Resolution, VersionMap};
use crate::ports::outbound::SnapshotStore;
use crate::shared::error::VizError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_SNAPSHOT_SIZE};
use crate::shared::Result;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// JsonSnapshotStore adapter for persisting resolved graphs on disk
///
/// The file format is a JSON object: keys are canonical `name@version`
/// strings, values are arrays of dependency-name strings. This is the
/// round-trip shape the builder's output is saved in and reloaded from.
pub struct JsonSnapshotStore;

impl JsonSnapshotStore {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonSnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotStore for JsonSnapshotStore {
    fn load(&self, path: &Path) -> Result<Resolution> {
        if !path.exists() {
            return Err(VizError::SnapshotNotFound {
                path: path.to_path_buf(),
                suggestion: "Run with --save-snapshot first, or point --snapshot at an existing graph file".to_string(),
            }
            .into());
        }

        validate_regular_file(path, "snapshot")?;
        let metadata = fs::metadata(path)?;
        validate_file_size(metadata.len(), path, MAX_SNAPSHOT_SIZE)?;

        let content = fs::read_to_string(path).map_err(|e| VizError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        let raw: BTreeMap<String, Vec<String>> =
            serde_json::from_str(&content).map_err(|e| VizError::SnapshotParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        let mut graph = DependencyGraph::new();
        let mut versions = VersionMap::new();
        for (key, dependency_names) in raw {
            let id = PackageId::from_str(&key).map_err(|e| VizError::SnapshotParseError {
                path: path.to_path_buf(),
                details: format!("bad key '{}': {}", key, e),
            })?;
            versions.insert(id.name(), id.version());
            graph.insert(id, dependency_names);
        }

        Ok(Resolution::new(graph, versions))
    }

    fn save(&self, path: &Path, graph: &DependencyGraph) -> Result<()> {
        let mut raw: BTreeMap<String, &[String]> = BTreeMap::new();
        for (id, dependency_names) in graph.iter() {
            raw.insert(id.canonical(), dependency_names);
        }

        let content = serde_json::to_string_pretty(&raw)?;
        fs::write(path, content).map_err(|e| VizError::FileWriteError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn id(name: &str, version: &str) -> PackageId {
        PackageId::new(name, version).unwrap()
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("graph.json");

        let mut graph = DependencyGraph::new();
        graph.insert(id("demo", "1.0"), vec!["left".into(), "right".into()]);
        graph.insert(id("left", "1.0"), vec!["leaf".into()]);
        graph.insert(id("leaf", "1.0"), vec![]);

        let store = JsonSnapshotStore::new();
        store.save(&path, &graph).unwrap();

        let resolution = store.load(&path).unwrap();
        let loaded = resolution.graph();
        assert_eq!(loaded.node_count(), 3);
        assert_eq!(
            loaded.dependency_names(&id("demo", "1.0")),
            Some(&["left".to_string(), "right".to_string()][..])
        );
        assert_eq!(loaded.dependency_names(&id("leaf", "1.0")), Some(&[][..]));
        // The version map is seeded from the snapshot keys.
        assert_eq!(resolution.versions().resolve("left"), "1.0");
    }

    #[test]
    fn test_load_accepts_hand_written_snapshot() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("graph.json");
        fs::write(
            &path,
            r#"{
  "demo@1.0": ["left"],
  "left@1.0": []
}"#,
        )
        .unwrap();

        let resolution = JsonSnapshotStore::new().load(&path).unwrap();
        assert_eq!(resolution.graph().node_count(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let result = JsonSnapshotStore::new().load(Path::new("/nonexistent/graph.json"));
        assert!(result.is_err());
        assert!(format!("{}", result.unwrap_err()).contains("Snapshot file not found"));
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();

        let result = JsonSnapshotStore::new().load(&path);
        assert!(result.is_err());
        assert!(format!("{}", result.unwrap_err()).contains("Failed to parse snapshot file"));
    }

    #[test]
    fn test_load_rejects_bad_key() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad-key.json");
        fs::write(&path, r#"{"no-version": []}"#).unwrap();

        let result = JsonSnapshotStore::new().load(&path);
        assert!(result.is_err());
        assert!(format!("{}", result.unwrap_err()).contains("bad key"));
    }
}
