use crate::sbom_generation::domain::{BillOfMaterials, Severity};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Overall risk level of a solution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectSummary {
    pub component_count: usize,
    pub vulnerability_count: usize,
    pub vulnerability_breakdown: BTreeMap<Severity, usize>,
    pub package_managers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolutionSummary {
    pub total_vulnerabilities: usize,
    pub vulnerability_breakdown: BTreeMap<Severity, usize>,
    pub risk_assessment: RiskLevel,
}

/// Per-project and solution-wide statistics written next to a solution BOM
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolutionReport {
    pub solution_name: String,
    pub generated_at: DateTime<Utc>,
    pub total_projects: usize,
    pub total_components: usize,
    pub projects: BTreeMap<String, ProjectSummary>,
    pub solution_summary: SolutionSummary,
}

impl SolutionReport {
    pub fn build(
        project_boms: &[(String, BillOfMaterials)],
        solution_bom: &BillOfMaterials,
    ) -> Self {
        let projects = project_boms
            .iter()
            .map(|(name, bom)| {
                let package_managers: BTreeSet<String> = bom
                    .components
                    .iter()
                    .filter_map(|c| c.package_manager.clone())
                    .collect();
                let summary = ProjectSummary {
                    component_count: bom.components.len(),
                    vulnerability_count: bom.vulnerabilities().len(),
                    vulnerability_breakdown: bom.vulnerability_count_by_severity(),
                    package_managers: package_managers.into_iter().collect(),
                };
                (name.clone(), summary)
            })
            .collect();

        let breakdown = solution_bom.vulnerability_count_by_severity();
        let solution_summary = SolutionSummary {
            total_vulnerabilities: solution_bom.vulnerabilities().len(),
            risk_assessment: assess_risk(&breakdown),
            vulnerability_breakdown: breakdown,
        };

        Self {
            solution_name: solution_bom
                .target_system
                .clone()
                .unwrap_or_else(|| solution_bom.document_name().to_string()),
            generated_at: solution_bom.created,
            total_projects: project_boms.len(),
            total_components: solution_bom.components.len(),
            projects,
            solution_summary,
        }
    }
}

/// HIGH: any critical or more than 5 high.
/// MEDIUM: any high or more than 10 medium.
/// LOW otherwise.
pub fn assess_risk(counts: &BTreeMap<Severity, usize>) -> RiskLevel {
    let count = |severity: Severity| counts.get(&severity).copied().unwrap_or(0);
    let (critical, high, medium) = (
        count(Severity::Critical),
        count(Severity::High),
        count(Severity::Medium),
    );

    if critical > 0 || high > 5 {
        RiskLevel::High
    } else if high > 0 || medium > 10 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sbom_generation::domain::{Component, Vulnerability};
    use crate::sbom_generation::services::{BomMerger, SbomGenerator};

    fn counts(pairs: &[(Severity, usize)]) -> BTreeMap<Severity, usize> {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_assess_risk() {
        assert_eq!(assess_risk(&counts(&[])), RiskLevel::Low);
        assert_eq!(assess_risk(&counts(&[(Severity::Critical, 1)])), RiskLevel::High);
        assert_eq!(assess_risk(&counts(&[(Severity::High, 6)])), RiskLevel::High);
        assert_eq!(assess_risk(&counts(&[(Severity::High, 5)])), RiskLevel::Medium);
        assert_eq!(assess_risk(&counts(&[(Severity::Medium, 11)])), RiskLevel::Medium);
        assert_eq!(assess_risk(&counts(&[(Severity::Medium, 10)])), RiskLevel::Low);
        assert_eq!(assess_risk(&counts(&[(Severity::Low, 50)])), RiskLevel::Low);
    }

    #[test]
    fn test_build_report() {
        let mut api = SbomGenerator::new_document("api").unwrap();
        let mut express = Component::new("express")
            .unwrap()
            .with_version(Some("4.18.2".to_string()))
            .with_package_manager("npm");
        express
            .vulnerabilities
            .push(Vulnerability::new("GHSA-1", Severity::Critical));
        api.add_component(express);
        api.add_component(
            Component::new("requests")
                .unwrap()
                .with_version(Some("2.28.0".to_string()))
                .with_package_manager("pip"),
        );

        let projects = vec![("api".to_string(), api)];
        let solution = BomMerger::build_solution_bom(&projects, "platform", None).unwrap();

        let report = SolutionReport::build(&projects, &solution);

        assert_eq!(report.solution_name, "platform");
        assert_eq!(report.total_projects, 1);
        assert_eq!(report.total_components, 2);
        let api_summary = &report.projects["api"];
        assert_eq!(api_summary.vulnerability_count, 1);
        assert_eq!(api_summary.package_managers, vec!["npm", "pip"]);
        assert_eq!(report.solution_summary.risk_assessment, RiskLevel::High);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["solution_summary"]["risk_assessment"], "HIGH");
        assert_eq!(json["projects"]["api"]["vulnerability_breakdown"]["critical"], 1);
    }
}
