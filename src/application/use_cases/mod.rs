/// Use cases orchestrating domain services through the ports
mod enrich_licenses;
mod export_bom;
mod generate_bom;
mod scan_solution;

pub use enrich_licenses::{EnrichLicensesUseCase, EnrichmentSummary};
pub use export_bom::{export_bom, export_bom_as};
pub use generate_bom::GenerateBomUseCase;
pub use scan_solution::ScanSolutionUseCase;
