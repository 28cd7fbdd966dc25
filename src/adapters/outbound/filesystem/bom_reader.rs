use crate::ports::outbound::BomReader;
use crate::sbom_generation::domain::BillOfMaterials;
use crate::shared::error::SbomError;
use crate::shared::security::read_text_file;
use crate::shared::Result;
use std::path::Path;

/// FileSystemBomReader adapter for loading native-JSON BOM files
///
/// Applies the same file checks as manifest reading: no symbolic links,
/// regular files only, bounded size.
pub struct FileSystemBomReader;

impl FileSystemBomReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemBomReader {
    fn default() -> Self {
        Self::new()
    }
}

impl BomReader for FileSystemBomReader {
    fn read_bom(&self, path: &Path) -> Result<BillOfMaterials> {
        let content = read_text_file(path, "BOM file")?;
        let bom: BillOfMaterials =
            serde_json::from_str(&content).map_err(|e| SbomError::ManifestParse {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;
        bom.ensure_required_fields()?;
        Ok(bom)
    }
}
