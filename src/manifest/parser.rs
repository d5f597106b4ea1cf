//! XML reader for manifests

use super::{Attributes, AttributedEntry, Element, ManifestDocument, ManifestNode, Section};
use crate::error::{Result, manifest::parse_failed};

impl ManifestDocument {
    /// Parse manifest XML. `origin` names the file in error messages.
    ///
    /// Comments and processing instructions are dropped. A `<!DOCTYPE>` is
    /// accepted, as older manifests still carry one. An element with child
    /// elements becomes a [`Section`] (stray text between children is ignored);
    /// any other element becomes a text leaf with its text trimmed.
    pub fn parse(xml: &str, origin: &str) -> Result<ManifestDocument> {
        let options = roxmltree::ParsingOptions {
            allow_dtd: true,
            ..roxmltree::ParsingOptions::default()
        };
        let document = roxmltree::Document::parse_with_options(xml, options)
            .map_err(|e| parse_failed(origin, e.to_string()))?;
        Ok(ManifestDocument {
            root: convert(document.root_element()),
        })
    }

    /// Tag name of the root element
    pub fn root_tag(&self) -> &str {
        &self.root.tag
    }
}

fn convert(node: roxmltree::Node<'_, '_>) -> Element {
    let tag = node.tag_name().name().to_string();
    let attributes: Attributes = node
        .attributes()
        .map(|attr| (attr.name().to_string(), attr.value().to_string()))
        .collect();

    let children: Vec<Element> = node.children().filter(roxmltree::Node::is_element).map(convert).collect();

    let body = if !children.is_empty() {
        ManifestNode::Section(Section {
            attributes,
            entries: children,
        })
    } else {
        let text: String = node
            .children()
            .filter(roxmltree::Node::is_text)
            .filter_map(|child| child.text())
            .collect();
        let text = text.trim().to_string();
        if attributes.is_empty() {
            ManifestNode::Text(text)
        } else {
            ManifestNode::Attributed(AttributedEntry { attributes, text })
        }
    };

    Element::new(tag, body)
}
