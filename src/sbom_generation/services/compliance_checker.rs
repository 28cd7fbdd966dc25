use crate::sbom_generation::domain::{BillOfMaterials, ComplianceReport, SecurityAnalysis};
use chrono::Utc;
use serde::Serialize;

const NON_COMPLIANT_RECOMMENDATION: &str = "Address FDA compliance issues before submission";
const RISK_ASSESSMENT_RECOMMENDATION: &str =
    "Document risk assessment for all identified vulnerabilities";

/// Named yes/no checks an FDA reviewer looks at
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComplianceChecklist {
    pub document_has_unique_id: bool,
    pub document_has_name: bool,
    pub document_has_namespace: bool,
    pub document_has_creator: bool,
    pub has_target_system: bool,
    pub has_manufacturer: bool,
    pub has_components: bool,
    pub all_components_have_versions: bool,
    pub all_components_have_licenses: bool,
    pub has_package_urls: bool,
}

impl ComplianceChecklist {
    /// `(label, passed)` pairs in display order
    pub fn items(&self) -> Vec<(&'static str, bool)> {
        vec![
            ("Document has unique ID", self.document_has_unique_id),
            ("Document has name", self.document_has_name),
            ("Document has namespace", self.document_has_namespace),
            ("Document has creator", self.document_has_creator),
            ("Has target system", self.has_target_system),
            ("Has manufacturer", self.has_manufacturer),
            ("Has components", self.has_components),
            ("All components have versions", self.all_components_have_versions),
            ("All components have licenses", self.all_components_have_licenses),
            ("Package URLs present", self.has_package_urls),
        ]
    }
}

/// FDA premarket submission checks on a BOM
pub struct ComplianceChecker;

impl ComplianceChecker {
    /// Lists every compliance problem; an empty list means compliant
    pub fn validate_fda_compliance(bom: &BillOfMaterials) -> Vec<String> {
        let mut issues = Vec::new();

        if bom.document_id().is_empty() {
            issues.push("Document ID is required".to_string());
        }
        if bom.document_name().is_empty() {
            issues.push("Document name is required".to_string());
        }
        if !has_text(&bom.manufacturer) {
            issues.push("Manufacturer is required for FDA compliance".to_string());
        }
        if bom.components.is_empty() {
            issues.push("SBOM must contain at least one component".to_string());
        }

        for component in &bom.components {
            if !has_text(&component.version) {
                issues.push(format!("Component version is required for {}", component.name));
            }
            if component.licenses.is_empty() {
                issues.push(format!(
                    "License information is required for {}",
                    component.name
                ));
            }
        }

        issues
    }

    /// Combines compliance issues with a security analysis into a report
    pub fn build_report(bom: &BillOfMaterials, analysis: SecurityAnalysis) -> ComplianceReport {
        let compliance_issues = Self::validate_fda_compliance(bom);
        let fda_compliant = compliance_issues.is_empty();

        let mut recommendations = analysis.recommendations;
        if !fda_compliant {
            recommendations.insert(0, NON_COMPLIANT_RECOMMENDATION.to_string());
        }
        if analysis.total_vulnerabilities > 0 {
            recommendations.push(RISK_ASSESSMENT_RECOMMENDATION.to_string());
        }

        ComplianceReport {
            sbom_id: bom.document_id().to_string(),
            generated_at: Utc::now(),
            total_components: bom.components.len(),
            total_vulnerabilities: analysis.total_vulnerabilities,
            vulnerability_counts_by_severity: analysis.by_severity,
            fda_compliant,
            compliance_issues,
            recommendations,
        }
    }

    pub fn checklist(bom: &BillOfMaterials) -> ComplianceChecklist {
        let components = &bom.components;

        ComplianceChecklist {
            document_has_unique_id: !bom.document_id().is_empty(),
            document_has_name: !bom.document_name().is_empty(),
            document_has_namespace: !bom.document_namespace().is_empty(),
            document_has_creator: !bom.creators.is_empty(),
            has_target_system: has_text(&bom.target_system),
            has_manufacturer: has_text(&bom.manufacturer),
            has_components: !components.is_empty(),
            // vacuously true for an empty component list
            all_components_have_versions: components.iter().all(|c| has_text(&c.version)),
            all_components_have_licenses: components.iter().all(|c| !c.licenses.is_empty()),
            has_package_urls: components
                .iter()
                .filter(|c| c.package_manager.is_some())
                .all(|c| has_text(&c.package_url)),
        }
    }
}

fn has_text(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}
