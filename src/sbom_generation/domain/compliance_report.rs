use super::Severity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Read-only compliance snapshot of a BOM
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceReport {
    pub sbom_id: String,
    pub generated_at: DateTime<Utc>,
    pub total_components: usize,
    pub total_vulnerabilities: usize,
    pub vulnerability_counts_by_severity: BTreeMap<Severity, usize>,
    pub fda_compliant: bool,
    pub compliance_issues: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Summary produced by a security analyzer for one BOM
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SecurityAnalysis {
    pub total_vulnerabilities: usize,
    pub by_severity: BTreeMap<Severity, usize>,
    pub recommendations: Vec<String>,
}
