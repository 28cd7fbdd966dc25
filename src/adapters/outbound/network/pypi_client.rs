use crate::ports::outbound::LicenseRepository;
use crate::sbom_generation::policies::{LicensePriority, RegistryLicenseFields};
use crate::sbom_generation::services::TOOL_NAME;
use crate::shared::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

const PYPI_BASE_URL: &str = "https://pypi.org/pypi";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct PyPiPackageInfo {
    info: PyPiInfo,
}

#[derive(Debug, Deserialize)]
struct PyPiInfo {
    #[serde(default)]
    license: Option<String>,
    #[serde(default)]
    license_expression: Option<String>,
    #[serde(default)]
    classifiers: Vec<String>,
}

impl From<PyPiInfo> for RegistryLicenseFields {
    fn from(info: PyPiInfo) -> Self {
        Self {
            license: info.license,
            license_expression: info.license_expression,
            classifiers: info.classifiers,
        }
    }
}

/// PyPiLicenseRepository adapter for the PyPI JSON API
///
/// Looks up the latest release metadata of a package and picks its license
/// text with [`LicensePriority`]. Every request is bounded by a 10 second
/// client timeout.
pub struct PyPiLicenseRepository {
    client: reqwest::Client,
    base_url: String,
}

impl PyPiLicenseRepository {
    pub fn new() -> Result<Self> {
        Self::with_base_url(PYPI_BASE_URL)
    }

    /// Points the repository at a PyPI-compatible mirror
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let user_agent = format!("{}/{}", TOOL_NAME, env!("CARGO_PKG_VERSION"));
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn validate_package_name(package_name: &str) -> Result<()> {
        if package_name.is_empty()
            || package_name.contains(['/', '\\', '#', '?', '@'])
            || package_name.contains("..")
        {
            anyhow::bail!(
                "Package name '{}' contains characters that are not allowed in a registry URL",
                package_name
            );
        }
        Ok(())
    }

    fn package_url(&self, package_name: &str) -> String {
        format!(
            "{}/{}/json",
            self.base_url,
            urlencoding::encode(package_name)
        )
    }
}

// No Default: building the HTTP client can fail.

#[async_trait]
impl LicenseRepository for PyPiLicenseRepository {
    async fn fetch_license(&self, package_name: &str) -> Result<Option<String>> {
        Self::validate_package_name(package_name)?;

        let url = self.package_url(package_name);
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            anyhow::bail!(
                "PyPI returned status {} for package '{}'",
                response.status(),
                package_name
            );
        }

        let package: PyPiPackageInfo = response.json().await?;
        Ok(LicensePriority::select_text(&package.info.into()))
    }
}
