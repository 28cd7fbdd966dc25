mod license_normalization;
mod license_priority;

pub use license_normalization::LicenseNormalizer;
pub use license_priority::{LicensePriority, RegistryLicenseFields};
