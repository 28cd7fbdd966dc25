/// Network adapters for package registry lookups
mod caching_license_repository;
mod pypi_client;

pub use caching_license_repository::CachingLicenseRepository;
pub use pypi_client::PyPiLicenseRepository;
