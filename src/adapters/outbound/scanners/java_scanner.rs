use super::xml_namespace::XmlScope;
use crate::ports::outbound::{ProjectScanner, ScanOutcome};
use crate::sbom_generation::domain::Component;
use crate::shared::error::SbomError;
use crate::shared::security::read_text_file;
use crate::shared::Result;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

const JAVA_INDICATORS: &[&str] = &[
    "pom.xml",
    "build.gradle",
    "build.gradle.kts",
    "gradle.properties",
];

const UNKNOWN_VERSION: &str = "unknown";

/// `implementation "g:a:v"`, `compile 'g:a:v'`, `api "g:a:v"`
static GRADLE_DEPENDENCY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\b(?:implementation|compile|api)\s+["']([^:"'\s]+):([^:"'\s]+):([^"']*)["']"#)
        .expect("valid regex")
});

/// Maven and Gradle builds
#[derive(Debug, Default)]
pub struct JavaScanner;

impl JavaScanner {
    pub fn new() -> Self {
        Self
    }

    fn maven_component(
        group: &str,
        artifact: &str,
        version: &str,
        manager: &str,
    ) -> Result<Component> {
        Ok(Component::new(format!("{}:{}", group, artifact))?
            .with_version(Some(version.to_string()))
            .with_namespace(group)
            .with_package_manager(manager)
            .with_package_url(format!("pkg:maven/{}/{}@{}", group, artifact, version)))
    }

    /// Every `<dependency>` in the POM with both groupId and artifactId
    pub fn parse_pom(content: &str, path: &Path) -> Result<Vec<Component>> {
        let document = roxmltree::Document::parse(content).map_err(|e| SbomError::ManifestParse {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;
        let scope = XmlScope::of(&document);

        let mut components = Vec::new();
        for dependency in scope.descendants(document.root_element(), "dependency") {
            let group = scope.child_text(dependency, "groupId");
            let artifact = scope.child_text(dependency, "artifactId");
            let (Some(group), Some(artifact)) = (group, artifact) else {
                continue;
            };
            let version = scope
                .child_text(dependency, "version")
                .unwrap_or(UNKNOWN_VERSION);
            components.push(Self::maven_component(group, artifact, version, "maven")?);
        }

        Ok(components)
    }

    pub fn parse_gradle(content: &str) -> Result<Vec<Component>> {
        GRADLE_DEPENDENCY
            .captures_iter(content)
            .map(|caps| {
                let version = match caps[3].trim() {
                    "" => UNKNOWN_VERSION,
                    v => v,
                };
                Self::maven_component(&caps[1], &caps[2], version, "gradle")
            })
            .collect()
    }
}

impl ProjectScanner for JavaScanner {
    fn name(&self) -> &'static str {
        "Java"
    }

    fn can_handle(&self, root: &Path) -> bool {
        JAVA_INDICATORS.iter().any(|f| root.join(f).exists())
    }

    fn extract(&self, root: &Path) -> Result<ScanOutcome> {
        let mut outcome = ScanOutcome::default();

        let pom = root.join("pom.xml");
        if pom.exists() {
            let parsed = read_text_file(&pom, "pom.xml")
                .and_then(|content| Self::parse_pom(&content, &pom));
            outcome.absorb(&pom, parsed);
        }

        let gradle = root.join("build.gradle");
        if gradle.exists() {
            let parsed = read_text_file(&gradle, "build.gradle")
                .and_then(|content| Self::parse_gradle(&content));
            outcome.absorb(&gradle, parsed);
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const NAMESPACED_POM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0">
  <modelVersion>4.0.0</modelVersion>
  <dependencies>
    <dependency>
      <groupId>org.springframework</groupId>
      <artifactId>spring-core</artifactId>
      <version>6.0.11</version>
    </dependency>
    <dependency>
      <groupId>junit</groupId>
      <artifactId>junit</artifactId>
    </dependency>
    <dependency>
      <artifactId>orphan</artifactId>
    </dependency>
  </dependencies>
</project>"#;

    #[test]
    fn test_parse_namespaced_pom() {
        let components = JavaScanner::parse_pom(NAMESPACED_POM, Path::new("pom.xml")).unwrap();

        assert_eq!(components.len(), 2);
        assert_eq!(components[0].name, "org.springframework:spring-core");
        assert_eq!(components[0].version.as_deref(), Some("6.0.11"));
        assert_eq!(components[0].namespace.as_deref(), Some("org.springframework"));
        assert_eq!(
            components[0].package_url.as_deref(),
            Some("pkg:maven/org.springframework/spring-core@6.0.11")
        );
        assert_eq!(components[1].version.as_deref(), Some("unknown"));
        assert_eq!(components[1].package_manager.as_deref(), Some("maven"));
    }

    #[test]
    fn test_parse_bare_pom() {
        let pom = r#"<project><dependencies><dependency>
            <groupId>com.google.guava</groupId><artifactId>guava</artifactId><version>32.1.2-jre</version>
        </dependency></dependencies></project>"#;
        let components = JavaScanner::parse_pom(pom, Path::new("pom.xml")).unwrap();
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].name, "com.google.guava:guava");
    }

    #[test]
    fn test_parse_pom_malformed() {
        assert!(JavaScanner::parse_pom("<project><dependencies>", Path::new("pom.xml")).is_err());
    }

    #[test]
    fn test_parse_gradle() {
        let gradle = r#"
dependencies {
    implementation 'com.squareup.okhttp3:okhttp:4.11.0'
    api "org.slf4j:slf4j-api:2.0.7"
    compile 'commons-io:commons-io:'
    testImplementation 'junit:junit:4.13.2'
}
"#;
        let components = JavaScanner::parse_gradle(gradle).unwrap();
        let names: Vec<_> = components.iter().map(|c| c.name.as_str()).collect();

        assert_eq!(
            names,
            vec![
                "com.squareup.okhttp3:okhttp",
                "org.slf4j:slf4j-api",
                "commons-io:commons-io"
            ]
        );
        assert_eq!(components[0].package_manager.as_deref(), Some("gradle"));
        assert_eq!(
            components[1].package_url.as_deref(),
            Some("pkg:maven/org.slf4j/slf4j-api@2.0.7")
        );
        assert_eq!(components[2].version.as_deref(), Some("unknown"));
    }

    #[test]
    fn test_extract_pom_and_gradle() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("pom.xml"), NAMESPACED_POM).unwrap();
        fs::write(
            temp_dir.path().join("build.gradle"),
            "implementation 'a.b:c:1.0'\n",
        )
        .unwrap();

        let scanner = JavaScanner::new();
        assert!(scanner.can_handle(temp_dir.path()));
        let outcome = scanner.extract(temp_dir.path()).unwrap();
        assert_eq!(outcome.components.len(), 3);
        assert!(outcome.warnings.is_empty());
    }
}
