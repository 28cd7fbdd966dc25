use std::path::PathBuf;

/// BomRequest - input of the single-project generation use case
///
/// Everything except `project_path` is optional device metadata copied onto
/// the BOM as-is.
#[derive(Debug, Clone, Default)]
pub struct BomRequest {
    pub project_path: PathBuf,
    /// Defaults to the project directory name
    pub target_system: Option<String>,
    pub target_version: Option<String>,
    pub manufacturer: Option<String>,
    pub device_model: Option<String>,
    pub fda_submission_id: Option<String>,
    pub include_vulnerabilities: bool,
}

impl BomRequest {
    pub fn new(project_path: impl Into<PathBuf>) -> Self {
        Self {
            project_path: project_path.into(),
            include_vulnerabilities: true,
            ..Self::default()
        }
    }
}

/// SolutionRequest - input of the multi-project scan use case
#[derive(Debug, Clone, Default)]
pub struct SolutionRequest {
    pub solution_path: PathBuf,
    pub manufacturer: Option<String>,
    pub include_vulnerabilities: bool,
}

impl SolutionRequest {
    pub fn new(solution_path: impl Into<PathBuf>) -> Self {
        Self {
            solution_path: solution_path.into(),
            include_vulnerabilities: true,
            ..Self::default()
        }
    }
}
