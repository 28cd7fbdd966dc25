use crate::ports::outbound::LicenseRepository;
use crate::shared::Result;
use async_trait::async_trait;
use dashmap::DashMap;

/// CachingLicenseRepository wraps a LicenseRepository with a per-package cache
///
/// Successful answers (including "no license declared") are kept for the
/// lifetime of the wrapper; failures are not cached so a later lookup can
/// retry.
pub struct CachingLicenseRepository<R: LicenseRepository> {
    inner: R,
    cache: DashMap<String, Option<String>>,
}

impl<R: LicenseRepository> CachingLicenseRepository<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            cache: DashMap::new(),
        }
    }

    /// Number of packages with a cached answer
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }

    fn cache_key(package_name: &str) -> String {
        package_name.to_lowercase().replace('_', "-")
    }
}

#[async_trait]
impl<R: LicenseRepository> LicenseRepository for CachingLicenseRepository<R> {
    async fn fetch_license(&self, package_name: &str) -> Result<Option<String>> {
        let key = Self::cache_key(package_name);
        if let Some(cached) = self.cache.get(&key) {
            return Ok(cached.clone());
        }

        let license = self.inner.fetch_license(package_name).await?;
        self.cache.insert(key, license.clone());
        Ok(license)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingRepository {
        call_count: AtomicUsize,
        fail: bool,
    }

    impl CountingRepository {
        fn new(fail: bool) -> Self {
            Self {
                call_count: AtomicUsize::new(0),
                fail,
            }
        }

        fn calls(&self) -> usize {
            self.call_count.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl LicenseRepository for CountingRepository {
        async fn fetch_license(&self, package_name: &str) -> Result<Option<String>> {
            self.call_count.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                anyhow::bail!("registry unavailable");
            }
            Ok((package_name != "unlicensed").then(|| "MIT".to_string()))
        }
    }

    #[tokio::test]
    async fn test_second_lookup_is_cached() {
        let repo = CachingLicenseRepository::new(CountingRepository::new(false));

        assert_eq!(repo.fetch_license("requests").await.unwrap(), Some("MIT".to_string()));
        assert_eq!(repo.fetch_license("requests").await.unwrap(), Some("MIT".to_string()));

        assert_eq!(repo.inner.calls(), 1);
        assert_eq!(repo.cache_size(), 1);
    }

    #[tokio::test]
    async fn test_name_variants_share_an_entry() {
        let repo = CachingLicenseRepository::new(CountingRepository::new(false));

        repo.fetch_license("Typing_Extensions").await.unwrap();
        repo.fetch_license("typing-extensions").await.unwrap();

        assert_eq!(repo.inner.calls(), 1);
    }

    #[tokio::test]
    async fn test_absent_license_is_cached() {
        let repo = CachingLicenseRepository::new(CountingRepository::new(false));

        assert_eq!(repo.fetch_license("unlicensed").await.unwrap(), None);
        assert_eq!(repo.fetch_license("unlicensed").await.unwrap(), None);
        assert_eq!(repo.inner.calls(), 1);
    }

    #[tokio::test]
    async fn test_failures_are_not_cached() {
        let repo = CachingLicenseRepository::new(CountingRepository::new(true));

        assert!(repo.fetch_license("requests").await.is_err());
        assert!(repo.fetch_license("requests").await.is_err());
        assert_eq!(repo.inner.calls(), 2);
        assert_eq!(repo.cache_size(), 0);
    }
}
