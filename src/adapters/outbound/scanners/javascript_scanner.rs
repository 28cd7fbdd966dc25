use crate::ports::outbound::{ProjectScanner, ScanOutcome};
use crate::sbom_generation::domain::Component;
use crate::shared::error::SbomError;
use crate::shared::security::read_text_file;
use crate::shared::Result;
use serde_json::Value;
use std::path::Path;

const JAVASCRIPT_INDICATORS: &[&str] = &[
    "package.json",
    "package-lock.json",
    "yarn.lock",
    "pnpm-lock.yaml",
];

const DEPENDENCY_SECTIONS: &[&str] = &["dependencies", "devDependencies"];

/// npm ecosystem: `package.json` runtime and dev dependencies
#[derive(Debug, Default)]
pub struct JavaScriptScanner;

impl JavaScriptScanner {
    pub fn new() -> Self {
        Self
    }

    /// `^1.2.3` / `~1.2` / `>=2.0.0` become `1.2.3` / `1.2` / `2.0.0`
    pub fn strip_range_operators(version: &str) -> &str {
        version.trim_start_matches(['^', '~', '>', '=', '<'])
    }

    pub fn parse_package_json(content: &str, path: &Path) -> Result<Vec<Component>> {
        let manifest: Value = serde_json::from_str(content).map_err(|e| SbomError::ManifestParse {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        let mut components = Vec::new();
        for section in DEPENDENCY_SECTIONS {
            let Some(entries) = manifest.get(section).and_then(Value::as_object) else {
                continue;
            };
            for (name, spec) in entries {
                let Some(spec) = spec.as_str() else {
                    tracing::debug!(package = %name, "skipping non-string version spec");
                    continue;
                };
                let component = match Component::new(name.as_str()) {
                    Ok(component) => component,
                    Err(e) => {
                        tracing::warn!(package = %name, error = %e, "skipping invalid dependency");
                        continue;
                    }
                };
                let version = Self::strip_range_operators(spec);
                let component = component
                    .with_version(Some(version.to_string()))
                    .with_package_manager("npm")
                    .with_package_url(format!("pkg:npm/{}@{}", name, version));
                components.push(component);
            }
        }

        Ok(components)
    }
}

impl ProjectScanner for JavaScriptScanner {
    fn name(&self) -> &'static str {
        "JavaScript"
    }

    fn can_handle(&self, root: &Path) -> bool {
        JAVASCRIPT_INDICATORS.iter().any(|f| root.join(f).exists())
    }

    fn extract(&self, root: &Path) -> Result<ScanOutcome> {
        let mut outcome = ScanOutcome::default();

        let package_json = root.join("package.json");
        if package_json.exists() {
            let parsed = read_text_file(&package_json, "package.json")
                .and_then(|content| Self::parse_package_json(&content, &package_json));
            outcome.absorb(&package_json, parsed);
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_strip_range_operators() {
        assert_eq!(JavaScriptScanner::strip_range_operators("^18.2.0"), "18.2.0");
        assert_eq!(JavaScriptScanner::strip_range_operators("~4.17"), "4.17");
        assert_eq!(JavaScriptScanner::strip_range_operators(">=1.0.0"), "1.0.0");
        assert_eq!(JavaScriptScanner::strip_range_operators("1.0.0"), "1.0.0");
    }

    #[test]
    fn test_parse_package_json_dependencies_then_dev() {
        let content = r#"{
            "name": "web",
            "dependencies": { "react": "^18.2.0", "lodash": "~4.17.21" },
            "devDependencies": { "jest": ">=29.0.0" }
        }"#;

        let components =
            JavaScriptScanner::parse_package_json(content, Path::new("package.json")).unwrap();

        let names: Vec<_> = components.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["react", "lodash", "jest"]);
        assert_eq!(components[0].version.as_deref(), Some("18.2.0"));
        assert_eq!(
            components[0].package_url.as_deref(),
            Some("pkg:npm/react@18.2.0")
        );
        assert_eq!(components[2].package_manager.as_deref(), Some("npm"));
    }

    #[test]
    fn test_parse_package_json_skips_invalid_names() {
        let long_name = "x".repeat(600);
        let content = format!(
            r#"{{"dependencies": {{"react": "^18.2.0", "": "1.0", "{}": "1.0"}},
                "devDependencies": {{"jest": "29.7.0"}}}}"#,
            long_name
        );

        let components =
            JavaScriptScanner::parse_package_json(&content, Path::new("package.json")).unwrap();

        let names: Vec<_> = components.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["react", "jest"]);
    }

    #[test]
    fn test_parse_package_json_scoped_package() {
        let content = r#"{"dependencies": {"@angular/core": "^16.0.0"}}"#;
        let components =
            JavaScriptScanner::parse_package_json(content, Path::new("package.json")).unwrap();
        assert_eq!(
            components[0].package_url.as_deref(),
            Some("pkg:npm/@angular/core@16.0.0")
        );
    }

    #[test]
    fn test_parse_package_json_malformed() {
        let result = JavaScriptScanner::parse_package_json("{ not json", Path::new("package.json"));
        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SbomError>(),
            Some(SbomError::ManifestParse { .. })
        ));
    }

    #[test]
    fn test_can_handle_lockfile_only() {
        let temp_dir = TempDir::new().unwrap();
        let scanner = JavaScriptScanner::new();
        assert!(!scanner.can_handle(temp_dir.path()));

        fs::write(temp_dir.path().join("yarn.lock"), "").unwrap();
        assert!(scanner.can_handle(temp_dir.path()));

        let outcome = scanner.extract(temp_dir.path()).unwrap();
        assert!(outcome.components.is_empty());
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn test_extract_malformed_package_json_is_warning() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("package.json"), "{").unwrap();

        let outcome = JavaScriptScanner::new().extract(temp_dir.path()).unwrap();
        assert!(outcome.components.is_empty());
        assert_eq!(outcome.warnings.len(), 1);
    }
}
