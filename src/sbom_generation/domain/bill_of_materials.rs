use super::{Component, Severity, Vulnerability};
use crate::shared::error::SbomError;
use crate::shared::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregate record of every component discovered for a project or solution
///
/// The three document identity fields are fixed at construction; everything
/// else is open for the pipeline to fill in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillOfMaterials {
    document_id: String,
    document_name: String,
    document_namespace: String,
    #[serde(default = "Utc::now")]
    pub created: DateTime<Utc>,

    #[serde(default)]
    pub creators: Vec<String>,

    pub target_system: Option<String>,
    pub target_version: Option<String>,

    #[serde(default)]
    pub components: Vec<Component>,
    /// Parent project name to child component or project names
    #[serde(default)]
    pub relationships: BTreeMap<String, Vec<String>>,

    pub fda_submission_id: Option<String>,
    pub device_identification: Option<String>,
    pub manufacturer: Option<String>,
    pub model_number: Option<String>,

    pub validation_date: Option<DateTime<Utc>>,
    pub validation_status: Option<String>,
    pub compliance_notes: Option<String>,
}

impl BillOfMaterials {
    /// Creates an empty BOM stamped with the current time
    ///
    /// # Errors
    /// Returns [`SbomError::Validation`] when any document identity field is blank
    pub fn new(
        document_id: impl Into<String>,
        document_name: impl Into<String>,
        document_namespace: impl Into<String>,
    ) -> Result<Self> {
        let bom = Self {
            document_id: document_id.into(),
            document_name: document_name.into(),
            document_namespace: document_namespace.into(),
            created: Utc::now(),
            creators: Vec::new(),
            target_system: None,
            target_version: None,
            components: Vec::new(),
            relationships: BTreeMap::new(),
            fda_submission_id: None,
            device_identification: None,
            manufacturer: None,
            model_number: None,
            validation_date: None,
            validation_status: None,
            compliance_notes: None,
        };
        bom.ensure_required_fields()?;
        Ok(bom)
    }

    /// Re-checks the document identity fields, e.g. after deserialisation
    pub fn ensure_required_fields(&self) -> Result<()> {
        let required = [
            ("document_id", &self.document_id),
            ("document_name", &self.document_name),
            ("document_namespace", &self.document_namespace),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(SbomError::Validation {
                    message: format!("BOM field '{}' is required", field),
                }
                .into());
            }
        }
        Ok(())
    }

    pub fn document_id(&self) -> &str {
        &self.document_id
    }

    pub fn document_name(&self) -> &str {
        &self.document_name
    }

    pub fn document_namespace(&self) -> &str {
        &self.document_namespace
    }

    pub fn add_component(&mut self, component: Component) {
        self.components.push(component);
    }

    pub fn component_by_name(&self, name: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.name == name)
    }

    /// All vulnerabilities across all components, in component order
    pub fn vulnerabilities(&self) -> Vec<&Vulnerability> {
        self.components
            .iter()
            .flat_map(|c| c.vulnerabilities.iter())
            .collect()
    }

    /// Vulnerability counts for every severity, zero-filled
    pub fn vulnerability_count_by_severity(&self) -> BTreeMap<Severity, usize> {
        let mut counts: BTreeMap<Severity, usize> =
            Severity::ALL.iter().map(|s| (*s, 0)).collect();
        for vuln in self.vulnerabilities() {
            *counts.entry(vuln.severity).or_insert(0) += 1;
        }
        counts
    }
}
