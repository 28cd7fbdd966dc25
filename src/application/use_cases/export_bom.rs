use crate::application::dto::BomFormat;
use crate::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use crate::sbom_generation::domain::BillOfMaterials;
use crate::shared::Result;
use std::path::Path;

/// Renders `bom` in the named format and writes it to `output_path`
///
/// The format name is resolved before anything is rendered or written.
///
/// # Errors
/// - `SbomError::UnsupportedFormat` for an unknown format name
/// - `SbomError::OutputDirectoryNotFound` when the parent directory is missing
pub fn export_bom(bom: &BillOfMaterials, output_path: &Path, format_name: &str) -> Result<()> {
    let format: BomFormat = format_name.parse()?;
    export_bom_as(bom, output_path, format)
}

/// Same as [`export_bom`] with an already-parsed format
pub fn export_bom_as(bom: &BillOfMaterials, output_path: &Path, format: BomFormat) -> Result<()> {
    let content = FormatterFactory::create(format).format(bom)?;
    PresenterFactory::create(PresenterType::File(output_path.to_path_buf())).present(&content)?;
    tracing::debug!(format = %format, path = %output_path.display(), "BOM exported");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::filesystem::FileSystemBomReader;
    use crate::ports::outbound::BomReader;
    use crate::sbom_generation::domain::{Component, License};
    use crate::sbom_generation::services::SbomGenerator;
    use crate::shared::error::SbomError;
    use tempfile::TempDir;

    fn sample_bom() -> BillOfMaterials {
        let mut bom = SbomGenerator::new_document("device").unwrap();
        let mut component = Component::new("lodash")
            .unwrap()
            .with_version(Some("4.17.21".to_string()))
            .with_package_manager("npm");
        component.licenses = vec![License::new(Some("MIT".to_string()), Some("MIT".to_string()))];
        bom.add_component(component);
        bom
    }

    #[test]
    fn test_export_every_format() {
        let temp_dir = TempDir::new().unwrap();
        let bom = sample_bom();
        for format in BomFormat::ALL {
            let path = temp_dir.path().join(format!("device.{}", format.file_extension()));
            export_bom(&bom, &path, format.name()).unwrap();
            assert!(path.is_file());
        }
    }

    #[test]
    fn test_native_json_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("device.sbom.json");
        let bom = sample_bom();

        export_bom(&bom, &path, "json").unwrap();
        let read = FileSystemBomReader::new().read_bom(&path).unwrap();

        assert_eq!(read.components.len(), 1);
        assert_eq!(read.components[0].name, "lodash");
        assert_eq!(read.components[0].version.as_deref(), Some("4.17.21"));
        assert_eq!(read.components[0].licenses, bom.components[0].licenses);
    }

    #[test]
    fn test_unsupported_format_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("device.txt");

        let err = export_bom(&sample_bom(), &path, "markdown").unwrap_err();

        assert!(matches!(
            err.downcast_ref::<SbomError>(),
            Some(SbomError::UnsupportedFormat { .. })
        ));
        assert!(!path.exists());
    }

    #[test]
    fn test_missing_output_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing/device.spdx.json");

        let err = export_bom(&sample_bom(), &path, "spdx").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SbomError>(),
            Some(SbomError::OutputDirectoryNotFound { .. })
        ));
    }
}
