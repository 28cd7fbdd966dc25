use super::{License, Vulnerability};
use crate::shared::error::SbomError;
use crate::shared::Result;
use serde::{Deserialize, Serialize};

/// Maximum length for component names (security limit)
const MAX_COMPONENT_NAME_LENGTH: usize = 512;

/// Kinds of software components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentType {
    #[default]
    Library,
    Framework,
    Application,
    OperatingSystem,
    Device,
    Firmware,
    File,
    Container,
}

impl ComponentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentType::Library => "library",
            ComponentType::Framework => "framework",
            ComponentType::Application => "application",
            ComponentType::OperatingSystem => "operating-system",
            ComponentType::Device => "device",
            ComponentType::Firmware => "firmware",
            ComponentType::File => "file",
            ComponentType::Container => "container",
        }
    }
}

/// Identity used for deduplication: `(name, version, package manager)`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComponentKey {
    name: String,
    version: Option<String>,
    package_manager: Option<String>,
}

/// One discovered dependency, binary artifact or runtime reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub name: String,
    pub version: Option<String>,
    #[serde(rename = "type", default)]
    pub component_type: ComponentType,
    pub namespace: Option<String>,
    pub description: Option<String>,

    pub package_manager: Option<String>,
    pub package_url: Option<String>,

    pub file_path: Option<String>,
    pub file_hash: Option<String>,

    #[serde(default)]
    pub licenses: Vec<License>,
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub vulnerabilities: Vec<Vulnerability>,

    pub supplier: Option<String>,
    pub originator: Option<String>,
    pub download_location: Option<String>,
    pub homepage: Option<String>,

    pub medical_device_class: Option<String>,
    pub regulatory_status: Option<String>,
}

impl Component {
    /// Creates a library component with only a name
    ///
    /// # Errors
    /// Returns a validation error if the name is blank or unreasonably long
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(SbomError::Validation {
                message: "Component name cannot be empty".to_string(),
            }
            .into());
        }
        if name.len() > MAX_COMPONENT_NAME_LENGTH {
            return Err(SbomError::Validation {
                message: format!(
                    "Component name is too long ({} bytes). Maximum allowed: {} bytes",
                    name.len(),
                    MAX_COMPONENT_NAME_LENGTH
                ),
            }
            .into());
        }

        Ok(Self {
            name,
            version: None,
            component_type: ComponentType::default(),
            namespace: None,
            description: None,
            package_manager: None,
            package_url: None,
            file_path: None,
            file_hash: None,
            licenses: Vec::new(),
            dependencies: Vec::new(),
            vulnerabilities: Vec::new(),
            supplier: None,
            originator: None,
            download_location: None,
            homepage: None,
            medical_device_class: None,
            regulatory_status: None,
        })
    }

    pub fn with_version(mut self, version: Option<String>) -> Self {
        self.version = version;
        self
    }

    pub fn with_type(mut self, component_type: ComponentType) -> Self {
        self.component_type = component_type;
        self
    }

    pub fn with_package_manager(mut self, package_manager: &str) -> Self {
        self.package_manager = Some(package_manager.to_string());
        self
    }

    pub fn with_package_url(mut self, package_url: String) -> Self {
        self.package_url = Some(package_url);
        self
    }

    pub fn with_namespace(mut self, namespace: &str) -> Self {
        self.namespace = Some(namespace.to_string());
        self
    }

    pub fn with_description(mut self, description: String) -> Self {
        self.description = Some(description);
        self
    }

    pub fn key(&self) -> ComponentKey {
        ComponentKey {
            name: self.name.clone(),
            version: self.version.clone(),
            package_manager: self.package_manager.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_new_defaults() {
        let component = Component::new("requests").unwrap();
        assert_eq!(component.name, "requests");
        assert_eq!(component.component_type, ComponentType::Library);
        assert!(component.version.is_none());
        assert!(component.licenses.is_empty());
    }

    #[test]
    fn test_component_new_empty_name() {
        assert!(Component::new("").is_err());
        assert!(Component::new("   ").is_err());
    }

    #[test]
    fn test_component_new_name_too_long() {
        let long_name = "a".repeat(MAX_COMPONENT_NAME_LENGTH + 1);
        assert!(Component::new(long_name).is_err());
    }

    #[test]
    fn test_component_key_equality() {
        let a = Component::new("lodash")
            .unwrap()
            .with_version(Some("4.17.21".to_string()))
            .with_package_manager("npm");
        let b = Component::new("lodash")
            .unwrap()
            .with_version(Some("4.17.21".to_string()))
            .with_package_manager("npm")
            .with_description("different metadata".to_string());
        let c = Component::new("lodash")
            .unwrap()
            .with_version(Some("4.17.21".to_string()))
            .with_package_manager("yarn");

        assert_eq!(a.key(), b.key());
        assert_ne!(a.key(), c.key());
    }

    #[test]
    fn test_component_type_serializes_kebab_case() {
        let json = serde_json::to_string(&ComponentType::OperatingSystem).unwrap();
        assert_eq!(json, "\"operating-system\"");
        assert_eq!(ComponentType::OperatingSystem.as_str(), "operating-system");
    }
}
