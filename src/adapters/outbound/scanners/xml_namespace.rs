use roxmltree::{Document, Node};

/// Element lookups qualified by the document's default namespace
///
/// Maven POMs and MSBuild projects may or may not declare a default
/// namespace. The namespace is read once from the root element and every
/// lookup compares both local name and namespace URI, so a POM with the
/// Maven namespace and a bare POM resolve the same paths.
#[derive(Debug, Clone, Default)]
pub struct XmlScope {
    namespace: Option<String>,
}

impl XmlScope {
    pub fn of(document: &Document<'_>) -> Self {
        Self {
            namespace: document
                .root_element()
                .tag_name()
                .namespace()
                .map(str::to_string),
        }
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Whether `node` is the element `<local_name>` in the document namespace
    pub fn is(&self, node: &Node<'_, '_>, local_name: &str) -> bool {
        node.is_element()
            && node.tag_name().name() == local_name
            && node.tag_name().namespace() == self.namespace.as_deref()
    }

    /// All descendant elements named `local_name`, document order
    pub fn descendants<'a, 'input>(
        &self,
        node: Node<'a, 'input>,
        local_name: &'a str,
    ) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
        let scope = self.clone();
        node.descendants().filter(move |n| scope.is(n, local_name))
    }

    /// First direct child element named `local_name`
    pub fn child<'a, 'input>(
        &self,
        node: Node<'a, 'input>,
        local_name: &str,
    ) -> Option<Node<'a, 'input>> {
        node.children().find(|n| self.is(n, local_name))
    }

    /// Trimmed, non-empty text of the first child element named `local_name`
    pub fn child_text<'a>(&self, node: Node<'a, '_>, local_name: &str) -> Option<&'a str> {
        self.child(node, local_name)
            .and_then(|n| n.text())
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAVEN_NS: &str = "http://maven.apache.org/POM/4.0.0";

    #[test]
    fn test_detects_default_namespace() {
        let xml = format!(r#"<project xmlns="{}"><version>1</version></project>"#, MAVEN_NS);
        let doc = Document::parse(&xml).unwrap();
        let scope = XmlScope::of(&doc);

        assert_eq!(scope.namespace(), Some(MAVEN_NS));
        assert_eq!(scope.child_text(doc.root_element(), "version"), Some("1"));
    }

    #[test]
    fn test_bare_document() {
        let doc = Document::parse("<project><a><b>x</b></a><b>y</b></project>").unwrap();
        let scope = XmlScope::of(&doc);

        assert_eq!(scope.namespace(), None);
        let texts: Vec<_> = scope
            .descendants(doc.root_element(), "b")
            .filter_map(|n| n.text())
            .collect();
        assert_eq!(texts, vec!["x", "y"]);
    }

    #[test]
    fn test_foreign_namespace_not_matched() {
        let xml = r#"<project xmlns="urn:a" xmlns:o="urn:o"><o:version>2</o:version></project>"#;
        let doc = Document::parse(xml).unwrap();
        let scope = XmlScope::of(&doc);

        assert_eq!(scope.child_text(doc.root_element(), "version"), None);
    }

    #[test]
    fn test_child_text_ignores_blank() {
        let doc = Document::parse("<p><version>   </version></p>").unwrap();
        let scope = XmlScope::of(&doc);
        assert_eq!(scope.child_text(doc.root_element(), "version"), None);
    }
}
