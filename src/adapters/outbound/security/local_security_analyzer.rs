use crate::ports::outbound::SecurityAnalyzer;
use crate::sbom_generation::domain::{BillOfMaterials, SecurityAnalysis, Severity};
use crate::shared::Result;

/// LocalSecurityAnalyzer adapter that works only from data already in the BOM
///
/// No advisory database is queried: `scan_all_components` returns the BOM
/// unchanged, and `analyze` summarises whatever vulnerabilities the
/// components already carry (for example from a re-read native-JSON BOM).
pub struct LocalSecurityAnalyzer;

impl LocalSecurityAnalyzer {
    pub fn new() -> Self {
        Self
    }

    fn recommendations(by_severity: &std::collections::BTreeMap<Severity, usize>) -> Vec<String> {
        let count = |severity: Severity| by_severity.get(&severity).copied().unwrap_or(0);
        let total: usize = by_severity.values().sum();

        let mut recommendations = Vec::new();
        if count(Severity::Critical) > 0 {
            recommendations.push(format!(
                "Immediately remediate {} critical vulnerabilities",
                count(Severity::Critical)
            ));
        }
        if count(Severity::High) > 0 {
            recommendations.push(format!(
                "Prioritize remediation of {} high severity vulnerabilities",
                count(Severity::High)
            ));
        }
        if total > 0 {
            recommendations
                .push("Update affected components to versions with published fixes".to_string());
        } else {
            recommendations.push(
                "Continue monitoring components for newly disclosed vulnerabilities".to_string(),
            );
        }
        recommendations
    }
}

impl Default for LocalSecurityAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SecurityAnalyzer for LocalSecurityAnalyzer {
    fn scan_all_components(&self, bom: BillOfMaterials) -> Result<BillOfMaterials> {
        tracing::debug!(
            components = bom.components.len(),
            "no advisory source configured; keeping attached vulnerabilities"
        );
        Ok(bom)
    }

    fn analyze(&self, bom: &BillOfMaterials) -> SecurityAnalysis {
        let by_severity = bom.vulnerability_count_by_severity();
        SecurityAnalysis {
            total_vulnerabilities: bom.vulnerabilities().len(),
            recommendations: Self::recommendations(&by_severity),
            by_severity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sbom_generation::domain::{Component, Vulnerability};
    use crate::sbom_generation::services::SbomGenerator;

    fn bom_with(vulnerabilities: Vec<Vulnerability>) -> BillOfMaterials {
        let mut bom = SbomGenerator::new_document("device").unwrap();
        let mut component = Component::new("openssl").unwrap();
        component.vulnerabilities = vulnerabilities;
        bom.add_component(component);
        bom
    }

    #[test]
    fn test_scan_is_pass_through() {
        let bom = bom_with(vec![Vulnerability::new("CVE-1", Severity::Low)]);
        let scanned = LocalSecurityAnalyzer::new().scan_all_components(bom.clone()).unwrap();
        assert_eq!(scanned, bom);
    }

    #[test]
    fn test_analyze_counts_every_severity() {
        let bom = bom_with(vec![
            Vulnerability::new("CVE-1", Severity::Critical),
            Vulnerability::new("CVE-2", Severity::High),
            Vulnerability::new("CVE-3", Severity::High),
        ]);
        let analysis = LocalSecurityAnalyzer::new().analyze(&bom);

        assert_eq!(analysis.total_vulnerabilities, 3);
        assert_eq!(analysis.by_severity.len(), Severity::ALL.len());
        assert_eq!(analysis.by_severity[&Severity::Critical], 1);
        assert_eq!(analysis.by_severity[&Severity::High], 2);
        assert_eq!(analysis.by_severity[&Severity::Info], 0);
        assert_eq!(analysis.recommendations.len(), 3);
        assert!(analysis.recommendations[0].contains("1 critical"));
        assert!(analysis.recommendations[1].contains("2 high"));
    }

    #[test]
    fn test_analyze_clean_bom() {
        let analysis = LocalSecurityAnalyzer::new().analyze(&bom_with(vec![]));
        assert_eq!(analysis.total_vulnerabilities, 0);
        assert_eq!(analysis.recommendations.len(), 1);
        assert!(analysis.recommendations[0].starts_with("Continue monitoring"));
    }
}
