/// Mock implementations for testing
mod mock_license_repository;
mod mock_progress_reporter;
mod mock_security_analyzer;

pub use mock_license_repository::MockLicenseRepository;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_security_analyzer::MockSecurityAnalyzer;
