use crate::adapters::outbound::filesystem::directory_walker::{any_file, has_extension};
use crate::ports::outbound::{ProjectScanner, ScanOutcome};
use crate::sbom_generation::domain::Component;
use crate::shared::error::SbomError;
use crate::shared::security::read_text_file;
use crate::shared::Result;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

const PYTHON_INDICATORS: &[&str] = &[
    "requirements.txt",
    "setup.py",
    "pyproject.toml",
    "Pipfile",
    "conda.yaml",
    "environment.yml",
];

/// `name<op>version`, optionally with extras: `uvicorn[standard]>=0.20`
static VERSIONED_REQUIREMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z0-9_.-]+)(?:\[[^\]]*\])?\s*([>=<~!]+)\s*([0-9][0-9.]*)")
        .expect("valid regex")
});

static BARE_REQUIREMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z0-9_.-]+)$").expect("valid regex"));

/// pip ecosystem: `requirements.txt` and `pyproject.toml`
#[derive(Debug, Default)]
pub struct PythonScanner;

impl PythonScanner {
    pub fn new() -> Self {
        Self
    }

    /// Parses one requirement specifier, or `None` for anything unrecognised
    /// (URLs, `-r` includes, markers without a version, ...)
    pub fn parse_requirement(line: &str) -> Option<Component> {
        let line = line.trim();

        if let Some(caps) = VERSIONED_REQUIREMENT.captures(line) {
            let name = &caps[1];
            let version = &caps[3];
            return Component::new(name).ok().map(|c| {
                c.with_version(Some(version.to_string()))
                    .with_package_manager("pip")
                    .with_package_url(format!("pkg:pypi/{}@{}", name, version))
            });
        }

        let caps = BARE_REQUIREMENT.captures(line)?;
        let name = &caps[1];
        Component::new(name).ok().map(|c| {
            c.with_package_manager("pip")
                .with_package_url(format!("pkg:pypi/{}", name))
        })
    }

    /// Parses `requirements.txt` content, skipping blank and `#` lines
    pub fn parse_requirements_txt(content: &str) -> Vec<Component> {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(Self::parse_requirement)
            .collect()
    }

    /// Parses `[project].dependencies` out of `pyproject.toml`
    pub fn parse_pyproject(content: &str, path: &Path) -> Result<Vec<Component>> {
        let document: toml::Table = toml::from_str(content).map_err(|e| SbomError::ManifestParse {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        let dependencies = document
            .get("project")
            .and_then(|project| project.get("dependencies"))
            .and_then(|deps| deps.as_array());

        Ok(dependencies
            .into_iter()
            .flatten()
            .filter_map(|dep| dep.as_str())
            .filter_map(Self::parse_requirement)
            .collect())
    }
}

impl ProjectScanner for PythonScanner {
    fn name(&self) -> &'static str {
        "Python"
    }

    fn can_handle(&self, root: &Path) -> bool {
        PYTHON_INDICATORS.iter().any(|f| root.join(f).exists())
            || any_file(root, true, |p| has_extension(p, &["py"]))
    }

    fn extract(&self, root: &Path) -> Result<ScanOutcome> {
        let mut outcome = ScanOutcome::default();

        let requirements = root.join("requirements.txt");
        if requirements.exists() {
            let parsed = read_text_file(&requirements, "requirements.txt")
                .map(|content| Self::parse_requirements_txt(&content));
            outcome.absorb(&requirements, parsed);
        }

        let pyproject = root.join("pyproject.toml");
        if pyproject.exists() {
            let parsed = read_text_file(&pyproject, "pyproject.toml")
                .and_then(|content| Self::parse_pyproject(&content, &pyproject));
            outcome.absorb(&pyproject, parsed);
        }

        tracing::debug!(
            components = outcome.components.len(),
            warnings = outcome.warnings.len(),
            "python scan finished"
        );
        Ok(outcome)
    }
}
