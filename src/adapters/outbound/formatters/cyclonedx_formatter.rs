use crate::ports::outbound::SbomFormatter;
use crate::sbom_generation::domain::{self, BillOfMaterials, ComponentType};
use crate::sbom_generation::services::TOOL_NAME;
use crate::shared::Result;
use chrono::SecondsFormat;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
struct Bom {
    #[serde(rename = "bomFormat")]
    bom_format: &'static str,
    #[serde(rename = "specVersion")]
    spec_version: &'static str,
    #[serde(rename = "serialNumber")]
    serial_number: String,
    version: u32,
    metadata: Metadata,
    components: Vec<Component>,
}

#[derive(Debug, Serialize)]
struct Metadata {
    timestamp: String,
    tools: Vec<Tool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    component: Option<MetadataComponent>,
}

#[derive(Debug, Serialize)]
struct Tool {
    vendor: &'static str,
    name: &'static str,
    version: &'static str,
}

#[derive(Debug, Serialize)]
struct MetadataComponent {
    #[serde(rename = "type")]
    component_type: &'static str,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    supplier: Option<Supplier>,
}

#[derive(Debug, Serialize)]
struct Supplier {
    name: String,
}

#[derive(Debug, Serialize)]
struct Component {
    #[serde(rename = "type")]
    component_type: &'static str,
    name: String,
    #[serde(rename = "bom-ref")]
    bom_ref: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    purl: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    supplier: Option<Supplier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    licenses: Option<Vec<License>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    vulnerabilities: Option<Vec<Vulnerability>>,
}

#[derive(Debug, Serialize)]
struct License {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
}

#[derive(Debug, Serialize)]
struct Vulnerability {
    id: String,
    source: Source,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ratings: Option<Vec<Rating>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    advisories: Option<Vec<Advisory>>,
}

#[derive(Debug, Serialize)]
struct Source {
    name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<&'static str>,
}

#[derive(Debug, Serialize)]
struct Rating {
    source: Source,
    score: f64,
    severity: String,
}

#[derive(Debug, Serialize)]
struct Advisory {
    url: String,
}

/// CycloneDxFormatter adapter for generating CycloneDX 1.4 JSON format
///
/// The serial number is derived from the BOM document id, so the document
/// is stable for a given BOM. An id that is not a UUID gets a random serial
/// instead. Vulnerabilities are listed on the component they affect.
pub struct CycloneDxFormatter;

impl CycloneDxFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Internal component type to CycloneDX vocabulary
    fn map_component_type(component_type: ComponentType) -> &'static str {
        match component_type {
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

    fn build_metadata(&self, bom: &BillOfMaterials) -> Metadata {
        let component = (bom.manufacturer.is_some() || bom.target_system.is_some()).then(|| {
            MetadataComponent {
                component_type: "application",
                name: bom
                    .target_system
                    .clone()
                    .unwrap_or_else(|| bom.document_name().to_string()),
                version: bom.target_version.clone(),
                supplier: bom.manufacturer.clone().map(|name| Supplier { name }),
            }
        });

        Metadata {
            timestamp: bom.created.to_rfc3339_opts(SecondsFormat::Secs, true),
            tools: vec![Tool {
                vendor: "FDA SBOM Generator",
                name: TOOL_NAME,
                version: env!("CARGO_PKG_VERSION"),
            }],
            component,
        }
    }

    fn build_component(&self, component: &domain::Component) -> Component {
        let licenses: Vec<License> = component
            .licenses
            .iter()
            .map(|license| License {
                id: license.spdx_id().map(str::to_string),
                name: match license.spdx_id() {
                    Some(_) => None,
                    None => license.name().map(str::to_string),
                },
                url: license.url().map(str::to_string),
            })
            .collect();

        let vulnerabilities: Vec<Vulnerability> = component
            .vulnerabilities
            .iter()
            .map(|v| self.build_vulnerability(v))
            .collect();

        Component {
            component_type: Self::map_component_type(component.component_type),
            name: component.name.clone(),
            bom_ref: format!(
                "{}@{}",
                component.name,
                component.version.as_deref().unwrap_or("unknown")
            ),
            version: component.version.clone(),
            description: component.description.clone(),
            group: component.namespace.clone(),
            purl: component.package_url.clone(),
            supplier: component.supplier.clone().map(|name| Supplier { name }),
            licenses: (!licenses.is_empty()).then_some(licenses),
            vulnerabilities: (!vulnerabilities.is_empty()).then_some(vulnerabilities),
        }
    }

    fn build_vulnerability(&self, vuln: &domain::Vulnerability) -> Vulnerability {
        Vulnerability {
            id: vuln.id.clone(),
            source: Source {
                name: "OSV",
                url: Some("https://osv.dev"),
            },
            description: vuln.description.clone(),
            ratings: vuln.score.map(|score| {
                vec![Rating {
                    source: Source {
                        name: "CVSS",
                        url: None,
                    },
                    score,
                    severity: vuln.severity.as_str().to_uppercase(),
                }]
            }),
            advisories: (!vuln.references.is_empty()).then(|| {
                vuln.references
                    .iter()
                    .map(|url| Advisory { url: url.clone() })
                    .collect()
            }),
        }
    }
}

/// `urn:uuid:` serial for a document id
fn serial_number(document_id: &str) -> String {
    let uuid = Uuid::parse_str(document_id).unwrap_or_else(|_| {
        tracing::debug!(document_id, "document id is not a UUID; using a random serial");
        Uuid::new_v4()
    });
    format!("urn:uuid:{}", uuid.hyphenated())
}

impl Default for CycloneDxFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomFormatter for CycloneDxFormatter {
    fn format(&self, bom: &BillOfMaterials) -> Result<String> {
        let document = Bom {
            bom_format: "CycloneDX",
            spec_version: "1.4",
            serial_number: serial_number(bom.document_id()),
            version: 1,
            metadata: self.build_metadata(bom),
            components: bom
                .components
                .iter()
                .map(|c| self.build_component(c))
                .collect(),
        };

        serde_json::to_string_pretty(&document).map_err(Into::into)
    }
}
