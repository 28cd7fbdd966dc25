mod bom_merger;
mod compliance_checker;
mod component_deduplicator;
mod sbom_generator;
mod solution_report;

pub use bom_merger::{BomMerger, ProjectBoms};
pub use compliance_checker::{ComplianceChecker, ComplianceChecklist};
pub use component_deduplicator::ComponentDeduplicator;
pub use sbom_generator::{SbomGenerator, TOOL_NAME};
pub use solution_report::{assess_risk, RiskLevel, SolutionReport};
