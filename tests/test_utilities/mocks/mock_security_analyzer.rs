use fda_sbom::prelude::*;
use std::collections::HashMap;

/// Mock SecurityAnalyzer attaching canned vulnerabilities by component name
#[derive(Default)]
pub struct MockSecurityAnalyzer {
    pub known: HashMap<String, Vec<Vulnerability>>,
}

impl MockSecurityAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vulnerability(mut self, component: &str, id: &str, severity: Severity) -> Self {
        self.known
            .entry(component.to_string())
            .or_default()
            .push(Vulnerability::new(id, severity));
        self
    }
}

impl SecurityAnalyzer for MockSecurityAnalyzer {
    fn scan_all_components(&self, mut bom: BillOfMaterials) -> Result<BillOfMaterials> {
        for component in &mut bom.components {
            if let Some(vulns) = self.known.get(&component.name) {
                component.vulnerabilities.extend(vulns.iter().cloned());
            }
        }
        Ok(bom)
    }

    fn analyze(&self, bom: &BillOfMaterials) -> SecurityAnalysis {
        SecurityAnalysis {
            total_vulnerabilities: bom.vulnerabilities().len(),
            by_severity: bom.vulnerability_count_by_severity(),
            recommendations: Vec::new(),
        }
    }
}
