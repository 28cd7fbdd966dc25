use super::directory_walker::{files_in_dir, has_extension, is_ignored_dir};
use crate::adapters::outbound::scanners::XmlScope;
use crate::ports::outbound::{DiscoveredProjects, ProjectDiscoverer};
use crate::shared::security::read_text_file;
use crate::shared::Result;
use regex::Regex;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use walkdir::WalkDir;

/// Files that mark a directory as a project in generic detection
const PROJECT_INDICATORS: &[&str] = &[
    "package.json",
    "requirements.txt",
    "pyproject.toml",
    "pom.xml",
    "build.gradle",
    "Cargo.toml",
    "go.mod",
];

const GENERIC_MAX_DEPTH: usize = 3;

/// `Project("{type-guid}") = "Name", "Relative\Path.csproj", "{guid}"`
static SLN_PROJECT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"Project\("[^"]*"\)\s*=\s*"([^"]*)"\s*,\s*"([^"]*)""#).expect("valid regex")
});

/// FileSystemSolutionDiscoverer adapter for locating projects in a solution
///
/// Tries, in order: Visual Studio `.sln` files, npm workspaces, Maven
/// multi-module POMs, and finally a bounded directory walk. The first
/// convention present at the root decides; later ones are not consulted.
pub struct FileSystemSolutionDiscoverer;

impl FileSystemSolutionDiscoverer {
    pub fn new() -> Self {
        Self
    }

    fn solution_files(root: &Path) -> Vec<PathBuf> {
        files_in_dir(root, |p| has_extension(p, &["sln"]))
    }

    /// Top-level `workspaces` of the root package.json, if it declares any
    fn npm_workspaces(root: &Path) -> Option<Vec<String>> {
        let manifest = root.join("package.json");
        if !manifest.is_file() {
            return None;
        }
        let content = read_text_file(&manifest, "package.json").ok()?;
        let json: Value = serde_json::from_str(&content).ok()?;
        let workspaces = json.get("workspaces")?;
        let patterns = match workspaces {
            Value::Array(items) => items,
            Value::Object(map) => map.get("packages").and_then(Value::as_array)?,
            _ => return Some(Vec::new()),
        };
        Some(
            patterns
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
        )
    }

    /// Root pom.xml content when it declares `<modules>`
    fn maven_aggregator(root: &Path) -> Option<String> {
        let pom = root.join("pom.xml");
        if !pom.is_file() {
            return None;
        }
        let content = read_text_file(&pom, "pom.xml").ok()?;
        content.contains("<modules>").then_some(content)
    }

    fn discover_sln_projects(sln_files: &[PathBuf]) -> DiscoveredProjects {
        let mut projects = DiscoveredProjects::new();
        for sln in sln_files {
            let content = match read_text_file(sln, "solution file") {
                Ok(content) => content,
                Err(e) => {
                    tracing::warn!(
                        path = %sln.display(),
                        error = %e,
                        "could not read solution file"
                    );
                    continue;
                }
            };
            let base = sln.parent().unwrap_or(Path::new("."));
            for captures in SLN_PROJECT.captures_iter(&content) {
                let (name, relative) = (&captures[1], captures[2].replace('\\', "/"));
                if !(relative.ends_with(".csproj") || relative.ends_with(".vbproj")) {
                    continue;
                }
                let Some(project_dir) = base.join(&relative).parent().map(Path::to_path_buf) else {
                    continue;
                };
                if project_dir.is_dir() {
                    add_project(&mut projects, name, project_dir);
                } else {
                    tracing::debug!(
                        project = name,
                        path = %relative,
                        "solution entry points at a missing directory"
                    );
                }
            }
        }
        projects
    }

    fn discover_npm_workspaces(root: &Path, patterns: &[String]) -> DiscoveredProjects {
        let mut projects = DiscoveredProjects::new();
        let escaped_root = glob::Pattern::escape(&root.to_string_lossy());
        for pattern in patterns {
            let full_pattern = format!("{}/{}", escaped_root, pattern.trim_end_matches('/'));
            let paths = match glob::glob(&full_pattern) {
                Ok(paths) => paths,
                Err(e) => {
                    tracing::warn!(pattern = %pattern, error = %e, "invalid workspace pattern");
                    continue;
                }
            };
            for dir in paths.filter_map(|p| p.ok()) {
                if !dir.is_dir() || !dir.join("package.json").is_file() {
                    continue;
                }
                if let Some(name) = dir.file_name().and_then(|n| n.to_str()) {
                    add_project(&mut projects, name, dir.clone());
                }
            }
        }
        projects
    }

    fn discover_maven_modules(root: &Path, pom_content: &str) -> DiscoveredProjects {
        let mut projects = DiscoveredProjects::new();
        let document = match roxmltree::Document::parse(pom_content) {
            Ok(document) => document,
            Err(e) => {
                tracing::warn!(
                    path = %root.join("pom.xml").display(),
                    error = %e,
                    "could not parse aggregator pom.xml"
                );
                return projects;
            }
        };
        let scope = XmlScope::of(&document);
        for modules in scope.descendants(document.root_element(), "modules") {
            for module in modules.children().filter(|n| scope.is(n, "module")) {
                let Some(name) = module.text().map(str::trim).filter(|t| !t.is_empty()) else {
                    continue;
                };
                let module_dir = root.join(name);
                if module_dir.join("pom.xml").is_file() {
                    add_project(&mut projects, name, module_dir);
                }
            }
        }
        projects
    }

    fn has_indicator(dir: &Path) -> bool {
        PROJECT_INDICATORS.iter().any(|f| dir.join(f).is_file())
            || !files_in_dir(dir, |p| has_extension(p, &["csproj"])).is_empty()
    }

    /// Sub-project name: relative path with separators turned into `-`
    fn relative_name(root: &Path, dir: &Path) -> String {
        let relative = dir.strip_prefix(root).unwrap_or(dir);
        relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("-")
    }

    fn root_name(root: &Path) -> String {
        root.canonicalize()
            .ok()
            .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
            .unwrap_or_else(|| "project".to_string())
    }

    fn discover_generic(root: &Path) -> DiscoveredProjects {
        let mut projects: DiscoveredProjects = WalkDir::new(root)
            .min_depth(1)
            .max_depth(GENERIC_MAX_DEPTH)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !is_ignored_dir(e))
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_dir() && Self::has_indicator(e.path()))
            .map(|e| (Self::relative_name(root, e.path()), e.into_path()))
            .collect();

        if projects.is_empty() && Self::has_indicator(root) {
            projects.push((Self::root_name(root), root.to_path_buf()));
        }
        projects
    }
}

/// Appends unless the name is already taken
fn add_project(projects: &mut DiscoveredProjects, name: &str, dir: PathBuf) {
    if projects.iter().any(|(existing, _)| existing == name) {
        tracing::debug!(
            project = name,
            path = %dir.display(),
            "duplicate project name skipped"
        );
        return;
    }
    projects.push((name.to_string(), dir));
}

impl Default for FileSystemSolutionDiscoverer {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectDiscoverer for FileSystemSolutionDiscoverer {
    fn discover_projects(&self, root: &Path) -> Result<DiscoveredProjects> {
        let sln_files = Self::solution_files(root);
        let projects = if !sln_files.is_empty() {
            tracing::debug!(count = sln_files.len(), "detected .NET solution");
            Self::discover_sln_projects(&sln_files)
        } else if let Some(patterns) = Self::npm_workspaces(root) {
            tracing::debug!(patterns = ?patterns, "detected npm workspaces");
            Self::discover_npm_workspaces(root, &patterns)
        } else if let Some(pom) = Self::maven_aggregator(root) {
            tracing::debug!("detected Maven multi-module build");
            Self::discover_maven_modules(root, &pom)
        } else {
            Self::discover_generic(root)
        };

        tracing::debug!(count = projects.len(), root = %root.display(), "projects discovered");
        Ok(projects)
    }
}
