use async_trait::async_trait;
use fda_sbom::prelude::*;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock LicenseRepository for testing
///
/// Packages it was not told about are lookup failures. The call counter is
/// shared so it can be read after the mock has been moved into a use case.
pub struct MockLicenseRepository {
    pub licenses: HashMap<String, Option<String>>,
    pub should_fail: bool,
    calls: Arc<AtomicUsize>,
}

impl MockLicenseRepository {
    pub fn new() -> Self {
        Self {
            licenses: HashMap::new(),
            should_fail: false,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_license(mut self, package: &str, license: &str) -> Self {
        self.licenses
            .insert(package.to_string(), Some(license.to_string()));
        self
    }

    pub fn with_no_license(mut self, package: &str) -> Self {
        self.licenses.insert(package.to_string(), None);
        self
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::new()
        }
    }

    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

impl Default for MockLicenseRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LicenseRepository for MockLicenseRepository {
    async fn fetch_license(&self, package_name: &str) -> Result<Option<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.should_fail {
            anyhow::bail!("Mock license repository failure");
        }

        match self.licenses.get(package_name) {
            Some(license) => Ok(license.clone()),
            None => anyhow::bail!("package '{}' not found", package_name),
        }
    }
}
