use crate::sbom_generation::domain::{BillOfMaterials, SecurityAnalysis};
use crate::shared::Result;

/// SecurityAnalyzer port
///
/// Only consulted when vulnerability scanning is requested or a compliance
/// report is built.
pub trait SecurityAnalyzer {
    /// Annotates components with the vulnerabilities known for them
    fn scan_all_components(&self, bom: BillOfMaterials) -> Result<BillOfMaterials>;

    /// Summarises the vulnerabilities attached to a BOM
    fn analyze(&self, bom: &BillOfMaterials) -> SecurityAnalysis;
}
