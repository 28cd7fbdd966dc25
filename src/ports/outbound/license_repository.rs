use crate::shared::Result;
use async_trait::async_trait;

/// LicenseRepository port for looking up license text in a package registry
///
/// # Async Support
/// Lookups are async so several packages can be fetched concurrently.
/// Implementations must be `Send + Sync`.
#[async_trait]
pub trait LicenseRepository: Send + Sync {
    /// Fetches the raw license text for a package
    ///
    /// # Returns
    /// `Ok(None)` when the registry knows the package but declares no license
    ///
    /// # Errors
    /// Returns an error if the request fails, the registry answers with an
    /// error status, or the response cannot be parsed
    async fn fetch_license(&self, package_name: &str) -> Result<Option<String>>;
}
