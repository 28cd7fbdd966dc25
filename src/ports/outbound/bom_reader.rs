use crate::sbom_generation::domain::BillOfMaterials;
use crate::shared::Result;
use std::path::Path;

/// BomReader port for loading a previously exported native-JSON BOM
pub trait BomReader {
    /// # Errors
    /// Returns an error if the file cannot be read safely, is not valid
    /// JSON, or lacks a mandatory document field
    fn read_bom(&self, path: &Path) -> Result<BillOfMaterials>;
}
