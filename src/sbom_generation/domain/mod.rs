pub mod bill_of_materials;
pub mod component;
pub mod compliance_report;
pub mod license;
pub mod vulnerability;

pub use bill_of_materials::BillOfMaterials;
pub use component::{Component, ComponentKey, ComponentType};
pub use compliance_report::{ComplianceReport, SecurityAnalysis};
pub use license::License;
pub use vulnerability::{Severity, Vulnerability};
