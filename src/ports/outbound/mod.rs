/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, network, console, etc.).
pub mod bom_reader;
pub mod formatter;
pub mod license_repository;
pub mod output_presenter;
pub mod progress_reporter;
pub mod project_discoverer;
pub mod project_scanner;
pub mod security_analyzer;

pub use bom_reader::BomReader;
pub use formatter::SbomFormatter;
pub use license_repository::LicenseRepository;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use project_discoverer::{DiscoveredProjects, ProjectDiscoverer};
pub use project_scanner::{ParseWarning, ProjectScanner, ScanOutcome};
pub use security_analyzer::SecurityAnalyzer;
