use super::{ComponentDeduplicator, SbomGenerator};
use crate::sbom_generation::domain::BillOfMaterials;
use crate::shared::error::SbomError;
use crate::shared::Result;

/// Project name and BOM pairs, in scan order
pub type ProjectBoms = Vec<(String, BillOfMaterials)>;

/// Combines several BOMs into one
pub struct BomMerger;

impl BomMerger {
    /// Merges `boms` into a new document named `merged_name`
    ///
    /// `manufacturer` and `fda_submission_id` come from the first source that
    /// defines them. Components are concatenated in source order and
    /// deduplicated across BOM boundaries.
    ///
    /// # Errors
    /// Returns [`SbomError::EmptyInput`] when `boms` is empty
    pub fn merge<'a, I>(boms: I, merged_name: &str) -> Result<BillOfMaterials>
    where
        I: IntoIterator<Item = &'a BillOfMaterials>,
    {
        let mut boms = boms.into_iter().peekable();
        if boms.peek().is_none() {
            return Err(SbomError::EmptyInput {
                operation: "merge".to_string(),
            }
            .into());
        }

        let mut merged = SbomGenerator::new_merged_document(merged_name)?;
        let mut dedup = ComponentDeduplicator::new();

        for bom in boms {
            if merged.manufacturer.is_none() {
                merged.manufacturer = bom.manufacturer.clone();
            }
            if merged.fda_submission_id.is_none() {
                merged.fda_submission_id = bom.fda_submission_id.clone();
            }
            for component in dedup.retain_new(bom.components.iter().cloned()) {
                merged.add_component(component);
            }
        }

        Ok(merged)
    }

    /// Builds the consolidated BOM of a solution
    ///
    /// Merges the project BOMs in the order given, names the target system
    /// after the solution and records which component names each project
    /// contributed. `manufacturer` overrides the merged one when set.
    pub fn build_solution_bom(
        project_boms: &[(String, BillOfMaterials)],
        solution_name: &str,
        manufacturer: Option<&str>,
    ) -> Result<BillOfMaterials> {
        let mut merged = Self::merge(project_boms.iter().map(|(_, bom)| bom), solution_name)?;

        merged.target_system = Some(solution_name.to_string());
        if let Some(manufacturer) = manufacturer {
            merged.manufacturer = Some(manufacturer.to_string());
        }

        merged.relationships = project_boms
            .iter()
            .map(|(project, bom)| {
                let names = bom.components.iter().map(|c| c.name.clone()).collect();
                (project.clone(), names)
            })
            .collect();

        Ok(merged)
    }
}
