use crate::ports::outbound::SbomFormatter;
use crate::sbom_generation::domain::BillOfMaterials;
use crate::sbom_generation::services::SbomGenerator;
use crate::shared::Result;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;

const SWID_NAMESPACE: &str = "http://standards.iso.org/iso/19770/-2/2015/schema.xsd";
const ENTITY_ROLE: &str = "tagCreator softwareCreator";

/// SwidFormatter adapter for generating ISO/IEC 19770-2 SWID tags
///
/// `xmlns` is written as an ordinary attribute of the root element; child
/// elements are unprefixed.
pub struct SwidFormatter;

impl SwidFormatter {
    pub fn new() -> Self {
        Self
    }

    fn element<'a>(name: &'a str, attributes: &[(&str, &str)]) -> BytesStart<'a> {
        let mut element = BytesStart::new(name);
        for attribute in attributes {
            element.push_attribute(*attribute);
        }
        element
    }
}

impl Default for SwidFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomFormatter for SwidFormatter {
    fn format(&self, bom: &BillOfMaterials) -> Result<String> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

        let mut root_attributes = vec![
            ("xmlns", SWID_NAMESPACE),
            ("tagId", bom.document_id()),
            ("name", bom.document_name()),
            ("tagVersion", "0"),
            ("corpus", "false"),
            ("patch", "false"),
            ("supplemental", "false"),
        ];
        if let Some(version) = bom.target_version.as_deref() {
            root_attributes.push(("version", version));
        }
        writer.write_event(Event::Start(Self::element("SoftwareIdentity", &root_attributes)))?;

        writer.write_event(Event::Empty(Self::element(
            "Entity",
            &[
                ("name", bom.manufacturer.as_deref().unwrap_or("Unknown")),
                ("role", ENTITY_ROLE),
            ],
        )))?;

        let generator = SbomGenerator::creator();
        writer.write_event(Event::Empty(Self::element(
            "Meta",
            &[("generator", generator.as_str())],
        )))?;

        if !bom.components.is_empty() {
            writer.write_event(Event::Start(BytesStart::new("Payload")))?;
            for component in &bom.components {
                let name = component.name.as_str();
                writer.write_event(Event::Start(Self::element("Directory", &[("name", name)])))?;

                let mut file_attributes = vec![("name", name)];
                if let Some(version) = component.version.as_deref() {
                    file_attributes.push(("version", version));
                }
                if let Some(hash) = component.file_hash.as_deref() {
                    file_attributes.push(("SHA256", hash));
                }
                writer.write_event(Event::Empty(Self::element("File", &file_attributes)))?;

                writer.write_event(Event::End(BytesEnd::new("Directory")))?;
            }
            writer.write_event(Event::End(BytesEnd::new("Payload")))?;
        }

        for component in &bom.components {
            writer.write_event(Event::Empty(Self::element(
                "Link",
                &[
                    ("href", component.package_url.as_deref().unwrap_or("")),
                    ("rel", "component"),
                ],
            )))?;
        }

        writer.write_event(Event::End(BytesEnd::new("SoftwareIdentity")))?;
        Ok(String::from_utf8(writer.into_inner())?)
    }
}
