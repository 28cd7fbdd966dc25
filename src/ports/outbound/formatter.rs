use crate::sbom_generation::domain::BillOfMaterials;
use crate::shared::Result;

/// SbomFormatter port for rendering a BOM into one export schema
///
/// Implementations are pure: the same BOM always renders the same document,
/// and an empty component list still yields a valid document.
pub trait SbomFormatter {
    /// Renders the BOM
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, bom: &BillOfMaterials) -> Result<String>;
}
