use crate::shared::Result;
use std::collections::BTreeSet;
use toml::Value;

/// ManifestParser service for extracting dependency names from manifest text
///
/// This is pure parsing logic with no I/O. It consults the `dependencies`
/// and `dev-dependencies` tables plus every `target.*.dependencies` table,
/// skips optional dependencies, and returns the merged names sorted and
/// deduplicated.
pub struct ManifestParser;

impl ManifestParser {
    /// Extracts the non-optional dependency names declared by a manifest.
    ///
    /// # Errors
    /// Returns an error if the manifest is not valid TOML.
    pub fn parse_dependency_names(manifest: &str) -> Result<Vec<String>> {
        let value: Value = toml::from_str(manifest)?;

        let mut names = BTreeSet::new();

        Self::collect_section(value.get("dependencies"), &mut names);
        Self::collect_section(value.get("dev-dependencies"), &mut names);

        if let Some(targets) = value.get("target").and_then(Value::as_table) {
            for target_config in targets.values() {
                Self::collect_section(target_config.get("dependencies"), &mut names);
            }
        }

        Ok(names.into_iter().collect())
    }

    fn collect_section(section: Option<&Value>, names: &mut BTreeSet<String>) {
        let Some(table) = section.and_then(Value::as_table) else {
            return;
        };
        for (name, spec) in table {
            // A detailed spec table may mark the dependency optional.
            let optional = spec
                .as_table()
                .and_then(|t| t.get("optional"))
                .and_then(Value::as_bool)
                .unwrap_or(false);
            if !optional {
                names.insert(name.clone());
            }
        }
    }
}
