use crate::sbom_generation::domain::BillOfMaterials;
use crate::shared::Result;
use uuid::Uuid;

/// Tool identifier written into every document this crate creates
pub const TOOL_NAME: &str = "fda-sbom-generator";

/// Base URI for generated document namespaces
const NAMESPACE_BASE: &str = "https://sbom.example.com";

/// SbomGenerator service for creating new BOM documents
///
/// Pure business logic: a fresh UUID document id, a namespace derived from
/// it, and the creator string identifying this tool.
pub struct SbomGenerator;

impl SbomGenerator {
    /// `fda-sbom-generator-<version>`, using the compile-time crate version
    pub fn creator() -> String {
        format!("{}-{}", TOOL_NAME, env!("CARGO_PKG_VERSION"))
    }

    /// Creates an empty project BOM
    pub fn new_document(document_name: &str) -> Result<BillOfMaterials> {
        let document_id = Uuid::new_v4().to_string();
        let namespace = format!("{}/{}", NAMESPACE_BASE, document_id);

        let mut bom = BillOfMaterials::new(document_id, document_name, namespace)?;
        bom.creators.push(Self::creator());
        Ok(bom)
    }

    /// Creates an empty BOM meant to hold the union of several others
    pub fn new_merged_document(document_name: &str) -> Result<BillOfMaterials> {
        let document_id = Uuid::new_v4().to_string();
        let namespace = format!("{}/merged/{}", NAMESPACE_BASE, Uuid::new_v4());

        let mut bom = BillOfMaterials::new(document_id, document_name, namespace)?;
        bom.creators.push(format!("{}-merged", Self::creator()));
        bom.target_system = Some(document_name.to_string());
        Ok(bom)
    }
}
