use crate::ports::outbound::{LicenseRepository, ProgressReporter};
use crate::sbom_generation::domain::BillOfMaterials;
use crate::sbom_generation::policies::LicenseNormalizer;
use futures::stream::{self, StreamExt};

/// Package manager whose components can be looked up
const ENRICHABLE_PACKAGE_MANAGER: &str = "pip";

/// Concurrent registry requests in flight at once
const MAX_CONCURRENT_FETCHES: usize = 8;

/// Counts reported after an enrichment run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnrichmentSummary {
    pub attempted: usize,
    pub enriched: usize,
    pub failed: usize,
}

/// EnrichLicensesUseCase - fills in missing licenses from a package registry
///
/// Only pip components without any license are looked up. Answers are
/// normalized with the same [`LicenseNormalizer`] the scanners use. A failed
/// lookup is a warning; the component keeps an empty license list.
///
/// # Type Parameters
/// * `LR` - LicenseRepository implementation
pub struct EnrichLicensesUseCase<LR> {
    repository: LR,
    max_concurrent: usize,
}

impl<LR: LicenseRepository> EnrichLicensesUseCase<LR> {
    pub fn new(repository: LR) -> Self {
        Self {
            repository,
            max_concurrent: MAX_CONCURRENT_FETCHES,
        }
    }

    pub fn with_max_concurrent(mut self, max_concurrent: usize) -> Self {
        self.max_concurrent = max_concurrent.max(1);
        self
    }

    pub async fn execute(
        &self,
        bom: &mut BillOfMaterials,
        reporter: &dyn ProgressReporter,
    ) -> EnrichmentSummary {
        let targets: Vec<(usize, String)> = bom
            .components
            .iter()
            .enumerate()
            .filter(|(_, c)| {
                c.licenses.is_empty()
                    && c.package_manager.as_deref() == Some(ENRICHABLE_PACKAGE_MANAGER)
            })
            .map(|(index, c)| (index, c.name.clone()))
            .collect();

        let mut summary = EnrichmentSummary {
            attempted: targets.len(),
            ..EnrichmentSummary::default()
        };
        if targets.is_empty() {
            return summary;
        }

        reporter.report(&format!(
            "🔍 Fetching license information for {} package(s)...",
            targets.len()
        ));

        let results: Vec<_> = stream::iter(targets)
            .map(|(index, name)| async move {
                let fetched = self.repository.fetch_license(&name).await;
                (index, name, fetched)
            })
            .buffered(self.max_concurrent)
            .collect()
            .await;

        for (index, name, fetched) in results {
            match fetched {
                Ok(Some(text)) => {
                    bom.components[index].licenses = vec![LicenseNormalizer::normalize(&text)];
                    summary.enriched += 1;
                }
                Ok(None) => {
                    tracing::debug!(package = %name, "registry declares no license");
                }
                Err(e) => {
                    summary.failed += 1;
                    reporter.report_error(&format!(
                        "Warning: Failed to fetch license information for {}: {}",
                        name, e
                    ));
                }
            }
        }

        reporter.report(&format!(
            "✅ License information: {} enriched, {} failed, {} looked up",
            summary.enriched, summary.failed, summary.attempted
        ));
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sbom_generation::domain::{Component, License};
    use crate::sbom_generation::services::SbomGenerator;
    use crate::shared::Result;
    use async_trait::async_trait;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct StubRepository {
        licenses: HashMap<&'static str, Option<&'static str>>,
        requested: Mutex<Vec<String>>,
    }

    impl StubRepository {
        fn new(entries: &[(&'static str, Option<&'static str>)]) -> Self {
            Self {
                licenses: entries.iter().copied().collect(),
                requested: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl LicenseRepository for StubRepository {
        async fn fetch_license(&self, package_name: &str) -> Result<Option<String>> {
            self.requested.lock().unwrap().push(package_name.to_string());
            match self.licenses.get(package_name) {
                Some(license) => Ok(license.map(str::to_string)),
                None => anyhow::bail!("404 Not Found"),
            }
        }
    }

    #[derive(Default)]
    struct RecordingReporter {
        errors: RefCell<Vec<String>>,
    }

    impl ProgressReporter for RecordingReporter {
        fn report(&self, _message: &str) {}
        fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}
        fn report_error(&self, message: &str) {
            self.errors.borrow_mut().push(message.to_string());
        }
        fn report_completion(&self, _message: &str) {}
    }

    fn pip(name: &str) -> Component {
        Component::new(name)
            .unwrap()
            .with_version(Some("1.0".to_string()))
            .with_package_manager("pip")
    }

    #[tokio::test]
    async fn test_enriches_only_unlicensed_pip_components() {
        let mut bom = SbomGenerator::new_document("device").unwrap();
        bom.add_component(pip("requests"));
        let mut licensed = pip("flask");
        licensed.licenses = vec![License::new(Some("BSD-3-Clause".to_string()), None)];
        bom.add_component(licensed);
        bom.add_component(
            Component::new("lodash")
                .unwrap()
                .with_package_manager("npm"),
        );

        let repository = StubRepository::new(&[("requests", Some("Apache 2.0"))]);
        let use_case = EnrichLicensesUseCase::new(repository);
        let reporter = RecordingReporter::default();

        let summary = use_case.execute(&mut bom, &reporter).await;

        assert_eq!(
            summary,
            EnrichmentSummary {
                attempted: 1,
                enriched: 1,
                failed: 0
            }
        );
        assert_eq!(*use_case.repository.requested.lock().unwrap(), vec!["requests"]);
        let license = &bom.components[0].licenses[0];
        assert_eq!(license.spdx_id(), Some("Apache-2.0"));
        assert_eq!(license.name(), Some("Apache 2.0"));
        assert!(bom.components[2].licenses.is_empty());
    }

    #[tokio::test]
    async fn test_failures_are_warnings() {
        let mut bom = SbomGenerator::new_document("device").unwrap();
        bom.add_component(pip("private-pkg"));
        bom.add_component(pip("unlicensed"));
        bom.add_component(pip("click"));

        let repository =
            StubRepository::new(&[("unlicensed", None), ("click", Some("BSD-3-Clause"))]);
        let use_case = EnrichLicensesUseCase::new(repository).with_max_concurrent(2);
        let reporter = RecordingReporter::default();

        let summary = use_case.execute(&mut bom, &reporter).await;

        assert_eq!(summary.attempted, 3);
        assert_eq!(summary.enriched, 1);
        assert_eq!(summary.failed, 1);
        assert!(bom.components[0].licenses.is_empty());
        assert!(bom.components[1].licenses.is_empty());
        assert_eq!(bom.components[2].licenses[0].spdx_id(), Some("BSD-3-Clause"));

        let errors = reporter.errors.borrow();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("private-pkg"));
    }

    #[tokio::test]
    async fn test_nothing_to_enrich() {
        let mut bom = SbomGenerator::new_document("device").unwrap();
        let use_case = EnrichLicensesUseCase::new(StubRepository::new(&[]));

        let summary = use_case.execute(&mut bom, &RecordingReporter::default()).await;

        assert_eq!(summary, EnrichmentSummary::default());
        assert!(use_case.repository.requested.lock().unwrap().is_empty());
    }
}
