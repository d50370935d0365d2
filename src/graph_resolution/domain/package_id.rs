use crate::shared::Result;

/// Maximum length for package names (security limit)
const MAX_PACKAGE_NAME_LENGTH: usize = 64;

/// Maximum length for package versions (security limit)
const MAX_VERSION_LENGTH: usize = 100;

/// Identity of a package at a concrete version.
///
/// The canonical form is `"name@version"`, which is also the on-disk key
/// used by graph snapshots. Equality and hashing go through both fields;
/// because `@` is rejected in names, this is equivalent to comparing the
/// canonical strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageId {
    name: String,
    version: String,
}

impl PackageId {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let version = version.into();

        if name.is_empty() {
            anyhow::bail!("Package name cannot be empty");
        }
        if name.len() > MAX_PACKAGE_NAME_LENGTH {
            anyhow::bail!(
                "Package name is too long ({} bytes). Maximum allowed: {} bytes",
                name.len(),
                MAX_PACKAGE_NAME_LENGTH
            );
        }
        // crates.io package names: alphanumeric plus hyphens and underscores
        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            anyhow::bail!(
                "Package name '{}' contains invalid characters. Only alphanumeric, hyphens, and underscores are allowed.",
                name
            );
        }

        if version.is_empty() {
            anyhow::bail!("Package version cannot be empty");
        }
        if version.len() > MAX_VERSION_LENGTH {
            anyhow::bail!(
                "Package version is too long ({} bytes). Maximum allowed: {} bytes",
                version.len(),
                MAX_VERSION_LENGTH
            );
        }
        if !version
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '+')
        {
            anyhow::bail!(
                "Package version '{}' contains invalid characters. Only alphanumeric, dots, hyphens, and plus signs are allowed.",
                version
            );
        }

        Ok(Self { name, version })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// The `"name@version"` form used for snapshot keys and display.
    pub fn canonical(&self) -> String {
        format!("{}@{}", self.name, self.version)
    }
}

impl std::fmt::Display for PackageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.name, self.version)
    }
}

impl std::str::FromStr for PackageId {
    type Err = anyhow::Error;

    /// Parses the canonical `"name@version"` form back into a PackageId.
    fn from_str(s: &str) -> Result<Self> {
        match s.split_once('@') {
            Some((name, version)) => PackageId::new(name, version),
            None => anyhow::bail!(
                "'{}' is not a canonical package id (expected \"name@version\")",
                s
            ),
        }
    }
}
