use crate::shared::error::SbomError;

/// Export formats a BOM can be rendered to
///
/// Lives in the application layer because the CLI, the config file and the
/// formatter factory all need to agree on the names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BomFormat {
    /// SPDX 2.3 JSON (default)
    #[default]
    Spdx,
    /// CycloneDX 1.4 JSON
    CycloneDx,
    /// ISO/IEC 19770-2 SWID tag (XML)
    Swid,
    /// Native JSON dump, readable by `validate`
    Json,
}

impl BomFormat {
    pub const ALL: [BomFormat; 4] = [
        BomFormat::Spdx,
        BomFormat::CycloneDx,
        BomFormat::Swid,
        BomFormat::Json,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            BomFormat::Spdx => "spdx",
            BomFormat::CycloneDx => "cyclonedx",
            BomFormat::Swid => "swid",
            BomFormat::Json => "json",
        }
    }

    /// Compound extension used for default output file names
    pub fn file_extension(&self) -> &'static str {
        match self {
            BomFormat::Spdx => "spdx.json",
            BomFormat::CycloneDx => "cyclonedx.json",
            BomFormat::Swid => "swid.xml",
            BomFormat::Json => "sbom.json",
        }
    }
}

impl std::str::FromStr for BomFormat {
    type Err = SbomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        BomFormat::ALL
            .into_iter()
            .find(|format| format.name() == wanted)
            .ok_or_else(|| SbomError::UnsupportedFormat {
                format: s.to_string(),
            })
    }
}

impl std::fmt::Display for BomFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
