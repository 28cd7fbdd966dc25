use crate::adapters::outbound::scanners::BinaryFileScanner;
use crate::application::dto::BomRequest;
use crate::application::factories::ScannerRegistry;
use crate::ports::outbound::{ParseWarning, ProgressReporter, ScanOutcome, SecurityAnalyzer};
use crate::sbom_generation::domain::{BillOfMaterials, Component, ComplianceReport};
use crate::sbom_generation::services::{
    ComplianceChecker, ComplianceChecklist, ComponentDeduplicator, SbomGenerator,
};
use crate::shared::error::SbomError;
use crate::shared::Result;
use std::path::Path;

/// GenerateBomUseCase - scans one project directory into a BOM
///
/// # Type Parameters
/// * `PR` - ProgressReporter implementation
/// * `SA` - SecurityAnalyzer implementation
pub struct GenerateBomUseCase<PR, SA> {
    registry: ScannerRegistry,
    progress_reporter: PR,
    security_analyzer: SA,
}

impl<PR, SA> GenerateBomUseCase<PR, SA>
where
    PR: ProgressReporter,
    SA: SecurityAnalyzer,
{
    pub fn new(registry: ScannerRegistry, progress_reporter: PR, security_analyzer: SA) -> Self {
        Self {
            registry,
            progress_reporter,
            security_analyzer,
        }
    }

    pub fn progress_reporter(&self) -> &PR {
        &self.progress_reporter
    }

    /// Runs every applicable scanner against `root`
    ///
    /// A scanner that fails outright becomes a warning; its siblings still
    /// run. Components are deduplicated on (name, version, package manager),
    /// first occurrence wins.
    pub fn scan_project(&self, root: &Path) -> ScanOutcome {
        let mut dedup = ComponentDeduplicator::new();
        let mut outcome = ScanOutcome::default();

        for scanner in self.registry.applicable(root) {
            match scanner.extract(root) {
                Ok(scanned) => {
                    tracing::debug!(
                        scanner = scanner.name(),
                        components = scanned.components.len(),
                        warnings = scanned.warnings.len(),
                        "scanner finished"
                    );
                    outcome.components.extend(dedup.retain_new(scanned.components));
                    outcome.warnings.extend(scanned.warnings);
                }
                Err(e) => {
                    tracing::warn!(scanner = scanner.name(), error = %e, "scanner failed");
                    outcome.warnings.push(ParseWarning::new(
                        root,
                        format!("{} scanner failed: {}", scanner.name(), e),
                    ));
                }
            }
        }

        for warning in &outcome.warnings {
            self.progress_reporter
                .report_error(&format!("Warning: {}", warning));
        }
        outcome
    }

    /// Generates the BOM of a single project
    ///
    /// # Errors
    /// - [`SbomError::ProjectNotFound`] if the path does not exist
    /// - [`SbomError::InvalidProjectPath`] if it is not a directory
    pub fn generate_bom(&self, request: &BomRequest) -> Result<BillOfMaterials> {
        let project_path = request.project_path.as_path();
        Self::validate_project_path(project_path)?;

        let target_system = request
            .target_system
            .clone()
            .unwrap_or_else(|| directory_name(project_path));

        let mut bom = SbomGenerator::new_document(&target_system)?;
        bom.target_system = Some(target_system);
        bom.target_version = request.target_version.clone();
        bom.manufacturer = request.manufacturer.clone();
        bom.model_number = request.device_model.clone();
        bom.fda_submission_id = request.fda_submission_id.clone();

        self.progress_reporter.report(&format!(
            "🔍 Scanning project for components: {}",
            project_path.display()
        ));
        let outcome = self.scan_project(project_path);
        for component in outcome.components {
            bom.add_component(component);
        }
        self.progress_reporter.report(&format!(
            "✅ Detected {} component(s)",
            bom.components.len()
        ));

        if request.include_vulnerabilities {
            self.progress_reporter
                .report("🔐 Scanning for vulnerabilities...");
            bom = self.security_analyzer.scan_all_components(bom)?;
        }

        Ok(bom)
    }

    /// FDA compliance report combined with the security analysis
    pub fn validate_bom(&self, bom: &BillOfMaterials) -> ComplianceReport {
        ComplianceChecker::build_report(bom, self.security_analyzer.analyze(bom))
    }

    pub fn compliance_checklist(&self, bom: &BillOfMaterials) -> ComplianceChecklist {
        ComplianceChecker::checklist(bom)
    }

    /// Describes a single file as a `file` component with its SHA-256 hash
    pub fn scan_file(&self, path: &Path) -> Result<Component> {
        if !path.is_file() {
            return Err(SbomError::FileReadError {
                path: path.to_path_buf(),
                details: "Not a regular file".to_string(),
            }
            .into());
        }
        let root = path.parent().unwrap_or(Path::new(""));
        BinaryFileScanner::component_for_file(root, path)
    }

    fn validate_project_path(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(SbomError::ProjectNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }
        if !path.is_dir() {
            return Err(SbomError::InvalidProjectPath {
                path: path.to_path_buf(),
                reason: "Path is not a directory".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

/// Last path segment, resolving `.` and `..` first
pub(crate) fn directory_name(path: &Path) -> String {
    path.canonicalize()
        .ok()
        .as_deref()
        .unwrap_or(path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "project".to_string())
}
