use crate::ports::outbound::SbomFormatter;
use crate::sbom_generation::domain::BillOfMaterials;
use crate::shared::Result;

/// JsonFormatter adapter for the native JSON format
///
/// A direct dump of the BOM entity graph; timestamps are RFC 3339.
/// [`crate::adapters::outbound::filesystem::FileSystemBomReader`] reads it back.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomFormatter for JsonFormatter {
    fn format(&self, bom: &BillOfMaterials) -> Result<String> {
        serde_json::to_string_pretty(bom).map_err(Into::into)
    }
}
