//! fda-sbom - SBOM generation tool for medical device software
//!
//! This library discovers the third-party components of Python, JavaScript,
//! Java and .NET projects and exports them as SPDX, CycloneDX, SWID or native
//! JSON bills of materials, together with an FDA premarket compliance check.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`sbom_generation`): components, BOMs, merging and compliance rules
//! - **Application Layer** (`application`): Use cases, request DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Scanners, formatters, file system, network and console
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use fda_sbom::prelude::*;
//! use std::path::Path;
//!
//! # fn main() -> Result<()> {
//! let use_case = GenerateBomUseCase::new(
//!     ScannerRegistry::new(),
//!     StderrProgressReporter::new(),
//!     LocalSecurityAnalyzer::new(),
//! );
//!
//! let mut request = BomRequest::new("./infusion-pump");
//! request.manufacturer = Some("Acme Medical".to_string());
//! let bom = use_case.generate_bom(&request)?;
//!
//! let report = use_case.validate_bom(&bom);
//! println!("FDA compliant: {}", report.fda_compliant);
//!
//! export_bom_as(&bom, Path::new("pump.spdx.json"), BomFormat::Spdx)?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod sbom_generation;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemBomReader, FileSystemSolutionDiscoverer, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        CycloneDxFormatter, JsonFormatter, SpdxFormatter, SwidFormatter,
    };
    pub use crate::adapters::outbound::network::{
        CachingLicenseRepository, PyPiLicenseRepository,
    };
    pub use crate::adapters::outbound::scanners::{
        BinaryFileScanner, DotNetScanner, JavaScanner, JavaScriptScanner, PythonScanner,
    };
    pub use crate::adapters::outbound::security::LocalSecurityAnalyzer;
    pub use crate::application::dto::{BomFormat, BomRequest, SolutionRequest};
    pub use crate::application::factories::{
        FormatterFactory, PresenterFactory, PresenterType, ScannerRegistry,
    };
    pub use crate::application::use_cases::{
        export_bom, export_bom_as, EnrichLicensesUseCase, EnrichmentSummary, GenerateBomUseCase,
        ScanSolutionUseCase,
    };
    pub use crate::ports::outbound::{
        BomReader, DiscoveredProjects, LicenseRepository, OutputPresenter, ParseWarning,
        ProgressReporter, ProjectDiscoverer, ProjectScanner, SbomFormatter, ScanOutcome,
        SecurityAnalyzer,
    };
    pub use crate::sbom_generation::domain::{
        BillOfMaterials, ComplianceReport, Component, ComponentType, License, SecurityAnalysis,
        Severity, Vulnerability,
    };
    pub use crate::sbom_generation::policies::LicenseNormalizer;
    pub use crate::sbom_generation::services::{
        BomMerger, ComplianceChecker, ComponentDeduplicator, ProjectBoms, SbomGenerator,
        SolutionReport,
    };
    pub use crate::shared::error::{ExitCode, SbomError};
    pub use crate::shared::Result;
}
