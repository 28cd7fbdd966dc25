use crate::sbom_generation::domain::License;

/// Free-text license spellings and the SPDX identifier each maps to.
///
/// Order matters: substring matching walks the table top to bottom and the
/// first hit wins.
const LICENSE_MAPPINGS: &[(&str, &str)] = &[
    ("MIT", "MIT"),
    ("MIT License", "MIT"),
    ("Apache-2.0", "Apache-2.0"),
    ("Apache License 2.0", "Apache-2.0"),
    ("Apache 2.0", "Apache-2.0"),
    ("GPL-3.0", "GPL-3.0-only"),
    ("BSD-3-Clause", "BSD-3-Clause"),
    ("ISC", "ISC"),
    ("LGPL-2.1", "LGPL-2.1-only"),
];

/// Turns raw license text from manifests and registries into [`License`] values
///
/// This is the only place the mapping table lives; scanners and license
/// enrichment both go through it.
pub struct LicenseNormalizer;

impl LicenseNormalizer {
    /// Normalizes a raw license string
    ///
    /// - blank input becomes `name = "Unknown"`
    /// - exact (case-sensitive) table hit sets the SPDX id
    /// - otherwise a case-insensitive substring hit sets the SPDX id
    /// - otherwise only the name is kept
    ///
    /// The name always carries the trimmed input text.
    pub fn normalize(raw: &str) -> License {
        let text = raw.trim();
        if text.is_empty() {
            return License::new(None, Some("Unknown".to_string()));
        }

        let spdx_id = Self::lookup_exact(text).or_else(|| Self::lookup_contains(text));
        License::new(spdx_id.map(str::to_string), Some(text.to_string()))
    }

    fn lookup_exact(text: &str) -> Option<&'static str> {
        LICENSE_MAPPINGS
            .iter()
            .find(|(key, _)| *key == text)
            .map(|(_, spdx)| *spdx)
    }

    fn lookup_contains(text: &str) -> Option<&'static str> {
        let lowered = text.to_lowercase();
        LICENSE_MAPPINGS
            .iter()
            .find(|(key, _)| lowered.contains(&key.to_lowercase()))
            .map(|(_, spdx)| *spdx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_exact_match() {
        let license = LicenseNormalizer::normalize("MIT");
        assert_eq!(license.spdx_id(), Some("MIT"));
        assert_eq!(license.name(), Some("MIT"));
    }

    #[test]
    fn test_normalize_empty_input() {
        let license = LicenseNormalizer::normalize("");
        assert_eq!(license.spdx_id(), None);
        assert_eq!(license.name(), Some("Unknown"));

        let blank = LicenseNormalizer::normalize("   ");
        assert_eq!(blank.name(), Some("Unknown"));
    }

    #[test]
    fn test_normalize_unknown_license() {
        let license = LicenseNormalizer::normalize("Something Custom");
        assert_eq!(license.spdx_id(), None);
        assert_eq!(license.name(), Some("Something Custom"));
    }

    #[test]
    fn test_normalize_free_text_variants() {
        assert_eq!(
            LicenseNormalizer::normalize("Apache License 2.0").spdx_id(),
            Some("Apache-2.0")
        );
        assert_eq!(
            LicenseNormalizer::normalize("Apache 2.0").spdx_id(),
            Some("Apache-2.0")
        );
        assert_eq!(
            LicenseNormalizer::normalize("GPL-3.0").spdx_id(),
            Some("GPL-3.0-only")
        );
        assert_eq!(
            LicenseNormalizer::normalize("LGPL-2.1").spdx_id(),
            Some("LGPL-2.1-only")
        );
    }

    #[test]
    fn test_normalize_case_insensitive_substring() {
        let license = LicenseNormalizer::normalize("the mit license (expat)");
        assert_eq!(license.spdx_id(), Some("MIT"));
        assert_eq!(license.name(), Some("the mit license (expat)"));
    }

    #[test]
    fn test_normalize_substring_first_match_wins() {
        // both keys occur; ISC sits earlier in the table
        let license = LicenseNormalizer::normalize("ISC or LGPL-2.1");
        assert_eq!(license.spdx_id(), Some("ISC"));
    }
}
