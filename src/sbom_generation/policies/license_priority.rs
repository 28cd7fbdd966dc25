use super::LicenseNormalizer;
use crate::sbom_generation::domain::License;

const OSI_CLASSIFIER_PREFIX: &str = "License :: OSI Approved :: ";

/// License-related fields a package registry reports for one release
#[derive(Debug, Clone, Default)]
pub struct RegistryLicenseFields {
    pub license: Option<String>,
    pub license_expression: Option<String>,
    pub classifiers: Vec<String>,
}

/// Precedence rules for picking one license out of registry metadata
///
/// 1. `license` (unless empty or `UNKNOWN`)
/// 2. `license_expression` (unless empty)
/// 3. the first OSI Approved classifier
pub struct LicensePriority;

impl LicensePriority {
    pub fn select_text(fields: &RegistryLicenseFields) -> Option<String> {
        fields
            .license
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty() && *l != "UNKNOWN")
            .or_else(|| {
                fields
                    .license_expression
                    .as_deref()
                    .map(str::trim)
                    .filter(|l| !l.is_empty())
            })
            .or_else(|| {
                fields
                    .classifiers
                    .iter()
                    .find_map(|c| c.strip_prefix(OSI_CLASSIFIER_PREFIX))
            })
            .map(str::to_string)
    }

    /// Selects and normalizes in one step
    pub fn select_license(fields: &RegistryLicenseFields) -> Option<License> {
        Self::select_text(fields).map(|text| LicenseNormalizer::normalize(&text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_license_field_wins() {
        let fields = RegistryLicenseFields {
            license: Some("MIT".to_string()),
            license_expression: Some("Apache-2.0".to_string()),
            classifiers: vec![],
        };
        assert_eq!(LicensePriority::select_text(&fields), Some("MIT".to_string()));
    }

    #[test]
    fn test_unknown_license_falls_back_to_expression() {
        let fields = RegistryLicenseFields {
            license: Some("UNKNOWN".to_string()),
            license_expression: Some("Apache-2.0".to_string()),
            classifiers: vec![],
        };
        assert_eq!(
            LicensePriority::select_text(&fields),
            Some("Apache-2.0".to_string())
        );
    }

    #[test]
    fn test_classifier_fallback() {
        let fields = RegistryLicenseFields {
            license: Some(String::new()),
            license_expression: None,
            classifiers: vec![
                "Programming Language :: Python :: 3".to_string(),
                "License :: OSI Approved :: BSD License".to_string(),
            ],
        };
        assert_eq!(
            LicensePriority::select_text(&fields),
            Some("BSD License".to_string())
        );
    }

    #[test]
    fn test_nothing_available() {
        assert_eq!(
            LicensePriority::select_license(&RegistryLicenseFields::default()),
            None
        );
    }

    #[test]
    fn test_select_license_normalizes() {
        let fields = RegistryLicenseFields {
            license: Some("Apache License 2.0".to_string()),
            ..Default::default()
        };
        let license = LicensePriority::select_license(&fields).unwrap();
        assert_eq!(license.spdx_id(), Some("Apache-2.0"));
    }
}
