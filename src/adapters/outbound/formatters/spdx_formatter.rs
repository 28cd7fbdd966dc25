use crate::ports::outbound::SbomFormatter;
use crate::sbom_generation::domain::{self, BillOfMaterials};
use crate::sbom_generation::services::TOOL_NAME;
use crate::shared::Result;
use chrono::SecondsFormat;
use serde::Serialize;

const SPDX_VERSION: &str = "SPDX-2.3";
const DATA_LICENSE: &str = "CC0-1.0";
const DOCUMENT_SPDX_ID: &str = "SPDXRef-DOCUMENT";
const ROOT_PACKAGE_SPDX_ID: &str = "SPDXRef-Package";
const LICENSE_LIST_VERSION: &str = "3.19";
const NOASSERTION: &str = "NOASSERTION";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SpdxDocument {
    spdx_version: &'static str,
    data_license: &'static str,
    #[serde(rename = "SPDXID")]
    spdx_id: &'static str,
    name: String,
    document_namespace: String,
    creation_info: CreationInfo,
    packages: Vec<Package>,
    relationships: Vec<Relationship>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreationInfo {
    created: String,
    creators: Vec<String>,
    license_list_version: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Package {
    #[serde(rename = "SPDXID")]
    spdx_id: String,
    name: String,
    download_location: String,
    files_analyzed: bool,
    copyright_text: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    version_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    homepage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    supplier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    external_refs: Option<Vec<ExternalRef>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    license_concluded: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    license_declared: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    annotations: Option<Vec<Annotation>>,
}

impl Package {
    fn new(spdx_id: String, name: String) -> Self {
        Self {
            spdx_id,
            name,
            download_location: NOASSERTION.to_string(),
            files_analyzed: false,
            copyright_text: NOASSERTION,
            version_info: None,
            description: None,
            homepage: None,
            supplier: None,
            external_refs: None,
            license_concluded: None,
            license_declared: None,
            annotations: None,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExternalRef {
    reference_category: &'static str,
    reference_type: &'static str,
    reference_locator: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Annotation {
    annotation_type: &'static str,
    annotator: String,
    annotation_date: String,
    annotation_comment: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Relationship {
    spdx_element_id: &'static str,
    relationship_type: &'static str,
    related_spdx_element: String,
}

/// SpdxFormatter adapter for generating SPDX 2.3 JSON
///
/// One root package stands for the target system; every component becomes a
/// package the root `DEPENDS_ON`. License expressions use raw SPDX ids joined
/// with ` AND `, falling back to `LicenseRef-<name>`.
pub struct SpdxFormatter;

impl SpdxFormatter {
    pub fn new() -> Self {
        Self
    }

    fn license_expression(licenses: &[domain::License]) -> Option<String> {
        let parts: Vec<String> = licenses
            .iter()
            .filter_map(|license| match (license.spdx_id(), license.name()) {
                (Some(id), _) => Some(id.to_string()),
                (None, Some(name)) => Some(format!("LicenseRef-{}", name.replace(' ', "-"))),
                (None, None) => None,
            })
            .collect();

        (!parts.is_empty()).then(|| parts.join(" AND "))
    }

    fn vulnerability_comment(vuln: &domain::Vulnerability) -> String {
        let mut comment = format!("Vulnerability {}: {} severity", vuln.id, vuln.severity);
        if let Some(score) = vuln.score {
            comment.push_str(&format!(" (CVSS: {})", score));
        }
        comment
    }

    fn build_root_package(&self, bom: &BillOfMaterials) -> Package {
        let name = bom
            .target_system
            .clone()
            .unwrap_or_else(|| bom.document_name().to_string());
        let mut root = Package::new(ROOT_PACKAGE_SPDX_ID.to_string(), name);
        root.version_info = bom.target_version.clone();
        root.supplier = bom
            .manufacturer
            .as_ref()
            .map(|m| format!("Organization: {}", m));
        root
    }

    fn build_package(
        &self,
        index: usize,
        component: &domain::Component,
        annotation_date: &str,
    ) -> Package {
        let mut package = Package::new(
            format!("{}-{}", ROOT_PACKAGE_SPDX_ID, index + 1),
            component.name.clone(),
        );
        if let Some(location) = &component.download_location {
            package.download_location = location.clone();
        }
        package.version_info = component.version.clone();
        package.description = component.description.clone();
        package.homepage = component.homepage.clone();
        package.supplier = component
            .supplier
            .as_ref()
            .map(|s| format!("Organization: {}", s));
        package.external_refs = component.package_url.as_ref().map(|purl| {
            vec![ExternalRef {
                reference_category: "PACKAGE-MANAGER",
                reference_type: "purl",
                reference_locator: purl.clone(),
            }]
        });

        let expression = Self::license_expression(&component.licenses);
        package.license_concluded = expression.clone();
        package.license_declared = expression;

        if !component.vulnerabilities.is_empty() {
            package.annotations = Some(
                component
                    .vulnerabilities
                    .iter()
                    .map(|vuln| Annotation {
                        annotation_type: "REVIEW",
                        annotator: format!("Tool: {}", TOOL_NAME),
                        annotation_date: annotation_date.to_string(),
                        annotation_comment: Self::vulnerability_comment(vuln),
                    })
                    .collect(),
            );
        }

        package
    }
}

impl Default for SpdxFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomFormatter for SpdxFormatter {
    fn format(&self, bom: &BillOfMaterials) -> Result<String> {
        let created = bom.created.to_rfc3339_opts(SecondsFormat::Secs, true);

        let mut packages = vec![self.build_root_package(bom)];
        let mut relationships = Vec::with_capacity(bom.components.len());
        for (index, component) in bom.components.iter().enumerate() {
            let package = self.build_package(index, component, &created);
            relationships.push(Relationship {
                spdx_element_id: ROOT_PACKAGE_SPDX_ID,
                relationship_type: "DEPENDS_ON",
                related_spdx_element: package.spdx_id.clone(),
            });
            packages.push(package);
        }

        let document = SpdxDocument {
            spdx_version: SPDX_VERSION,
            data_license: DATA_LICENSE,
            spdx_id: DOCUMENT_SPDX_ID,
            name: bom.document_name().to_string(),
            document_namespace: bom.document_namespace().to_string(),
            creation_info: CreationInfo {
                created,
                creators: bom.creators.clone(),
                license_list_version: LICENSE_LIST_VERSION,
            },
            packages,
            relationships,
        };

        serde_json::to_string_pretty(&document).map_err(Into::into)
    }
}
