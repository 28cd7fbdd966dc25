use super::generate_bom::directory_name;
use super::GenerateBomUseCase;
use crate::application::dto::{BomRequest, SolutionRequest};
use crate::ports::outbound::{ProgressReporter, ProjectDiscoverer, SecurityAnalyzer};
use crate::sbom_generation::domain::BillOfMaterials;
use crate::sbom_generation::services::{BomMerger, ProjectBoms, SolutionReport};
use crate::shared::error::SbomError;
use crate::shared::Result;

/// ScanSolutionUseCase - one BOM per project of a multi-project workspace
///
/// Projects are scanned one after another in discovery order. A project
/// that fails is reported and left out; the others are still returned.
///
/// # Type Parameters
/// * `D` - ProjectDiscoverer implementation
/// * `PR` - ProgressReporter implementation
/// * `SA` - SecurityAnalyzer implementation
pub struct ScanSolutionUseCase<D, PR, SA> {
    discoverer: D,
    generator: GenerateBomUseCase<PR, SA>,
}

impl<D, PR, SA> ScanSolutionUseCase<D, PR, SA>
where
    D: ProjectDiscoverer,
    PR: ProgressReporter,
    SA: SecurityAnalyzer,
{
    pub fn new(discoverer: D, generator: GenerateBomUseCase<PR, SA>) -> Self {
        Self {
            discoverer,
            generator,
        }
    }

    /// The single-project use case this one drives
    pub fn generator(&self) -> &GenerateBomUseCase<PR, SA> {
        &self.generator
    }

    /// Discovers the projects under the solution root and scans each one
    ///
    /// # Errors
    /// [`SbomError::ProjectNotFound`] when the solution path does not exist.
    /// Per-project failures are warnings, not errors.
    pub fn scan_solution(&self, request: &SolutionRequest) -> Result<ProjectBoms> {
        let root = request.solution_path.as_path();
        if !root.exists() {
            return Err(SbomError::ProjectNotFound {
                path: root.to_path_buf(),
            }
            .into());
        }

        let projects = self.discoverer.discover_projects(root)?;
        let reporter = self.generator.progress_reporter();
        reporter.report(&format!(
            "📂 Found {} project(s) in solution",
            projects.len()
        ));

        let total = projects.len();
        let mut project_boms = ProjectBoms::new();
        for (index, (name, path)) in projects.into_iter().enumerate() {
            reporter.report_progress(index + 1, total, Some(&name));

            let bom_request = BomRequest {
                project_path: path,
                target_system: Some(name.clone()),
                manufacturer: request.manufacturer.clone(),
                include_vulnerabilities: request.include_vulnerabilities,
                ..BomRequest::default()
            };
            match self.generator.generate_bom(&bom_request) {
                Ok(bom) => {
                    project_boms.push((name, bom));
                }
                Err(e) => {
                    tracing::warn!(project = %name, error = %e, "project scan failed");
                    reporter.report_error(&format!(
                        "Warning: Failed to scan project {}: {}",
                        name, e
                    ));
                }
            }
        }

        Ok(project_boms)
    }

    /// Merged BOM of the whole solution
    ///
    /// # Errors
    /// [`SbomError::EmptyInput`] when no project BOM is given
    pub fn build_solution_bom(
        &self,
        project_boms: &[(String, BillOfMaterials)],
        solution_name: &str,
        manufacturer: Option<&str>,
    ) -> Result<BillOfMaterials> {
        BomMerger::build_solution_bom(project_boms, solution_name, manufacturer)
    }

    pub fn solution_report(
        &self,
        project_boms: &[(String, BillOfMaterials)],
        solution_bom: &BillOfMaterials,
    ) -> SolutionReport {
        SolutionReport::build(project_boms, solution_bom)
    }

    /// Default solution name: the solution directory name
    pub fn default_solution_name(&self, request: &SolutionRequest) -> String {
        directory_name(&request.solution_path)
    }
}
