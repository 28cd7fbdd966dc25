use super::xml_namespace::XmlScope;
use crate::adapters::outbound::filesystem::directory_walker::{
    files_in_dir, find_files, has_extension,
};
use crate::ports::outbound::{ProjectScanner, ScanOutcome};
use crate::sbom_generation::domain::{Component, ComponentType};
use crate::shared::error::SbomError;
use crate::shared::security::read_text_file;
use crate::shared::Result;
use std::path::Path;

const PROJECT_EXTENSIONS: &[&str] = &["csproj", "vbproj", "fsproj"];
const PACKAGES_CONFIG: &str = "packages.config";

/// .NET Framework moniker codes (`net48`) and their versions
const FRAMEWORK_VERSIONS: &[(&str, &str)] = &[
    ("20", "2.0"),
    ("35", "3.5"),
    ("40", "4.0"),
    ("403", "4.0.3"),
    ("45", "4.5"),
    ("451", "4.5.1"),
    ("452", "4.5.2"),
    ("46", "4.6"),
    ("461", "4.6.1"),
    ("462", "4.6.2"),
    ("47", "4.7"),
    ("471", "4.7.1"),
    ("472", "4.7.2"),
    ("48", "4.8"),
];

/// Runtime named by a target framework moniker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: String,
}

/// NuGet ecosystem: SDK-style and legacy project files plus `packages.config`
#[derive(Debug, Default)]
pub struct DotNetScanner;

impl DotNetScanner {
    pub fn new() -> Self {
        Self
    }

    /// Maps a target framework moniker to its runtime
    ///
    /// Multi-target lists use their first entry and platform suffixes
    /// (`net8.0-windows`) are ignored.
    pub fn parse_target_framework(moniker: &str) -> Option<RuntimeInfo> {
        let moniker = moniker.split(';').next()?.trim().to_lowercase();
        let moniker = moniker.split('-').next()?;

        let runtime = |name, version: &str| {
            Some(RuntimeInfo {
                name,
                version: version.to_string(),
            })
        };

        if let Some(version) = moniker.strip_prefix("netcoreapp") {
            return runtime(".NET Core", version);
        }
        if let Some(version) = moniker.strip_prefix("netstandard") {
            return runtime(".NET Standard", version);
        }

        let code = moniker.strip_prefix("net")?;
        if code.is_empty() {
            return None;
        }
        if code.contains('.') && code.chars().all(|c| c.is_ascii_digit() || c == '.') {
            return runtime(".NET", code);
        }
        if code.chars().all(|c| c.is_ascii_digit()) {
            let version = FRAMEWORK_VERSIONS
                .iter()
                .find(|(k, _)| *k == code)
                .map(|(_, v)| v.to_string())
                .unwrap_or_else(|| {
                    code.chars()
                        .map(String::from)
                        .collect::<Vec<_>>()
                        .join(".")
                });
            return runtime(".NET Framework", &version);
        }

        None
    }

    fn nuget_component(id: &str, version: Option<&str>) -> Result<Component> {
        Ok(Component::new(id)?
            .with_version(Some(version.unwrap_or("unknown").to_string()))
            .with_package_manager("nuget")
            .with_package_url(format!("pkg:nuget/{}@{}", id, version.unwrap_or("unknown"))))
    }

    /// `PackageReference` items plus one runtime component for the project's target framework
    pub fn parse_project_file(content: &str, path: &Path) -> Result<Vec<Component>> {
        let document = roxmltree::Document::parse(content).map_err(|e| SbomError::ManifestParse {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;
        let scope = XmlScope::of(&document);
        let root = document.root_element();

        let mut components = Vec::new();
        for reference in scope.descendants(root, "PackageReference") {
            let Some(id) = reference.attribute("Include").map(str::trim).filter(|s| !s.is_empty())
            else {
                continue;
            };
            let version = reference
                .attribute("Version")
                .or_else(|| scope.child_text(reference, "Version"));
            components.push(Self::nuget_component(id, version)?);
        }

        let framework = scope
            .descendants(root, "TargetFramework")
            .next()
            .or_else(|| scope.descendants(root, "TargetFrameworks").next())
            .and_then(|node| node.text());
        if let Some(runtime) = framework.and_then(Self::parse_target_framework) {
            components.push(
                Component::new(runtime.name)?
                    .with_version(Some(runtime.version))
                    .with_type(ComponentType::Framework)
                    .with_description(format!("{} Runtime", runtime.name)),
            );
        }

        Ok(components)
    }

    /// Legacy `<package id version targetFramework>` entries; both id and version are required
    pub fn parse_packages_config(content: &str, path: &Path) -> Result<Vec<Component>> {
        let document = roxmltree::Document::parse(content).map_err(|e| SbomError::ManifestParse {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;
        let scope = XmlScope::of(&document);

        document
            .root_element()
            .children()
            .filter(|n| scope.is(n, "package"))
            .filter_map(|n| Some((n.attribute("id")?, n.attribute("version")?)))
            .map(|(id, version)| Self::nuget_component(id, Some(version)))
            .collect()
    }
}

impl ProjectScanner for DotNetScanner {
    fn name(&self) -> &'static str {
        ".NET"
    }

    fn can_handle(&self, root: &Path) -> bool {
        root.join(PACKAGES_CONFIG).is_file()
            || !files_in_dir(root, |p| {
                has_extension(p, PROJECT_EXTENSIONS) || has_extension(p, &["sln"])
            })
            .is_empty()
    }

    fn extract(&self, root: &Path) -> Result<ScanOutcome> {
        let mut outcome = ScanOutcome::default();

        for project_file in find_files(root, false, |p| has_extension(p, PROJECT_EXTENSIONS)) {
            let parsed = read_text_file(&project_file, "project file")
                .and_then(|content| Self::parse_project_file(&content, &project_file));
            outcome.absorb(&project_file, parsed);
        }

        let is_packages_config =
            |p: &Path| p.file_name().is_some_and(|name| name == PACKAGES_CONFIG);
        for config in find_files(root, false, is_packages_config) {
            let parsed = read_text_file(&config, PACKAGES_CONFIG)
                .and_then(|content| Self::parse_packages_config(&content, &config));
            outcome.absorb(&config, parsed);
        }

        Ok(outcome)
    }
}
