use crate::adapters::outbound::formatters::{
    CycloneDxFormatter, JsonFormatter, SpdxFormatter, SwidFormatter,
};
use crate::application::dto::BomFormat;
use crate::ports::outbound::SbomFormatter;
use crate::shared::Result;

/// Factory for creating BOM formatters
///
/// Flat format → formatter lookup. Unknown names fail with
/// `SbomError::UnsupportedFormat` before anything is rendered.
pub struct FormatterFactory;

impl FormatterFactory {
    pub fn create(format: BomFormat) -> Box<dyn SbomFormatter> {
        match format {
            BomFormat::Spdx => Box::new(SpdxFormatter::new()),
            BomFormat::CycloneDx => Box::new(CycloneDxFormatter::new()),
            BomFormat::Swid => Box::new(SwidFormatter::new()),
            BomFormat::Json => Box::new(JsonFormatter::new()),
        }
    }

    /// Looks a formatter up by its user-facing name
    ///
    /// # Examples
    /// ```
    /// use fda_sbom::application::factories::FormatterFactory;
    ///
    /// assert!(FormatterFactory::for_name("cyclonedx").is_ok());
    /// assert!(FormatterFactory::for_name("markdown").is_err());
    /// ```
    pub fn for_name(name: &str) -> Result<Box<dyn SbomFormatter>> {
        let format: BomFormat = name.parse()?;
        Ok(Self::create(format))
    }

    pub fn progress_message(format: BomFormat) -> &'static str {
        match format {
            BomFormat::Spdx => "📝 Generating SPDX 2.3 JSON output...",
            BomFormat::CycloneDx => "📝 Generating CycloneDX 1.4 JSON output...",
            BomFormat::Swid => "📝 Generating SWID tag XML output...",
            BomFormat::Json => "📝 Generating native JSON output...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sbom_generation::services::SbomGenerator;
    use crate::shared::error::SbomError;

    #[test]
    fn test_every_format_renders_empty_bom() {
        let bom = SbomGenerator::new_document("empty").unwrap();
        for format in BomFormat::ALL {
            let output = FormatterFactory::create(format).format(&bom).unwrap();
            assert!(!output.is_empty(), "{} produced no output", format);
        }
    }

    #[test]
    fn test_for_name_selects_matching_formatter() {
        let bom = SbomGenerator::new_document("device").unwrap();
        let output = FormatterFactory::for_name("swid").unwrap().format(&bom).unwrap();
        assert!(output.contains("<SoftwareIdentity"));

        let output = FormatterFactory::for_name("SPDX").unwrap().format(&bom).unwrap();
        assert!(output.contains("\"spdxVersion\": \"SPDX-2.3\""));
    }

    #[test]
    fn test_for_name_unsupported() {
        let err = FormatterFactory::for_name("pdf").err().unwrap();
        assert!(matches!(
            err.downcast_ref::<SbomError>(),
            Some(SbomError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_progress_message() {
        assert_eq!(
            FormatterFactory::progress_message(BomFormat::CycloneDx),
            "📝 Generating CycloneDX 1.4 JSON output..."
        );
    }
}
