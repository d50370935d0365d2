use crate::ports::outbound::RegistryClient;
use crate::shared::Result;
use async_trait::async_trait;
use flate2::read::GzDecoder;
use serde::Deserialize;
use std::io::Read;
use std::time::Duration;

const CRATES_IO_API: &str = "https://crates.io/api/v1";

/// Manifest file name looked up inside downloaded crate archives.
const MANIFEST_FILENAME: &str = "Cargo.toml";

#[derive(Debug, Deserialize)]
struct CrateResponse {
    #[serde(rename = "crate")]
    krate: CrateInfo,
}

#[derive(Debug, Deserialize)]
struct CrateInfo {
    max_version: String,
}

/// CratesIoClient adapter for fetching package data from the crates.io API
///
/// This adapter implements the RegistryClient port. Manifests come from the
/// published `.crate` archive (a gzip-compressed tarball); the latest
/// version comes from the crate metadata endpoint.
///
/// Every remote call is attempted exactly once - failed nodes degrade at
/// the caller, so retrying here would only slow a large traversal down.
pub struct CratesIoClient {
    client: reqwest::Client,
    base_url: String,
}

impl CratesIoClient {
    /// Creates a new crates.io client with default configuration
    pub fn new() -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("crate-viz/{}", version);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: CRATES_IO_API.to_string(),
        })
    }

    /// Points the client at a different API root. Used by tests that stand
    /// in for crates.io.
    #[allow(dead_code)]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Validates and sanitizes package name and version for URL safety
    fn validate_url_component(component: &str, component_type: &str) -> Result<()> {
        // Security: Prevent URL injection attacks
        if component.contains('/') || component.contains('\\') {
            anyhow::bail!(
                "Security: {} contains path separators which are not allowed",
                component_type
            );
        }

        if component.contains("..") {
            anyhow::bail!(
                "Security: {} contains '..' which is not allowed",
                component_type
            );
        }

        if component.contains('#') || component.contains('?') || component.contains('@') {
            anyhow::bail!(
                "Security: {} contains URL-unsafe characters",
                component_type
            );
        }

        Ok(())
    }

    /// Pulls the manifest text out of a `.crate` archive.
    ///
    /// The archive is a gzip-compressed tarball; the manifest is the entry
    /// whose path ends in `Cargo.toml`.
    fn extract_manifest(archive_bytes: &[u8]) -> Result<String> {
        let decoder = GzDecoder::new(archive_bytes);
        let mut archive = tar::Archive::new(decoder);

        for entry in archive.entries()? {
            let mut entry = entry?;
            let path = entry.path()?;
            let is_manifest = path
                .file_name()
                .map(|f| f == MANIFEST_FILENAME)
                .unwrap_or(false);
            if is_manifest {
                let mut manifest = String::new();
                entry.read_to_string(&mut manifest)?;
                return Ok(manifest);
            }
        }

        anyhow::bail!("archive contains no {} entry", MANIFEST_FILENAME)
    }
}

#[async_trait]
impl RegistryClient for CratesIoClient {
    async fn fetch_manifest(&self, name: &str, version: &str) -> Result<String> {
        Self::validate_url_component(name, "Package name")?;
        Self::validate_url_component(version, "Version")?;

        let encoded_name = urlencoding::encode(name);
        let encoded_version = urlencoding::encode(version);

        let url = format!(
            "{}/crates/{}/{}/download",
            self.base_url, encoded_name, encoded_version
        );

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            anyhow::bail!("crates.io returned status code {}", response.status());
        }

        let archive_bytes = response.bytes().await?;
        Self::extract_manifest(&archive_bytes)
    }

    async fn resolve_latest_version(&self, name: &str) -> Result<String> {
        Self::validate_url_component(name, "Package name")?;

        let encoded_name = urlencoding::encode(name);
        let url = format!("{}/crates/{}", self.base_url, encoded_name);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            anyhow::bail!("crates.io returned status code {}", response.status());
        }

        let crate_response: CrateResponse = response.json().await?;
        Ok(crate_response.krate.max_version)
    }
}
