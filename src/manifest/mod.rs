//! Extension manifest tree
//!
//! A manifest is read into a small closed tree: every element is either plain
//! text (`<filename>a.php</filename>`), text with attributes
//! (`<language tag="en-GB">en-GB.ini</language>`), or a section holding further
//! elements in document order (`<files folder="site">...</files>`). The
//! resolver pattern-matches over this tree and never looks at raw XML.

mod parser;

use std::collections::BTreeMap;

/// Element attributes, keyed by local name
pub type Attributes = BTreeMap<String, String>;

/// A parsed manifest element body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestNode {
    /// Text-only element without attributes
    Text(String),
    /// Text-only element carrying attributes
    Attributed(AttributedEntry),
    /// Element with child elements
    Section(Section),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributedEntry {
    pub attributes: Attributes,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub attributes: Attributes,
    pub entries: Vec<Element>,
}

/// A named element: the tag plus its body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub node: ManifestNode,
}

/// A whole manifest document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestDocument {
    pub root: Element,
}

impl ManifestNode {
    /// Attribute value, if this node carries attributes
    pub fn attribute(&self, key: &str) -> Option<&str> {
        let attributes = match self {
            ManifestNode::Text(_) => return None,
            ManifestNode::Attributed(entry) => &entry.attributes,
            ManifestNode::Section(section) => &section.attributes,
        };
        attributes.get(key).map(String::as_str)
    }

    /// Text content of a leaf node
    pub fn text(&self) -> Option<&str> {
        match self {
            ManifestNode::Text(text) => Some(text),
            ManifestNode::Attributed(entry) => Some(&entry.text),
            ManifestNode::Section(_) => None,
        }
    }

    /// Child elements; empty for leaf nodes
    pub fn entries(&self) -> &[Element] {
        match self {
            ManifestNode::Section(section) => &section.entries,
            ManifestNode::Text(_) | ManifestNode::Attributed(_) => &[],
        }
    }

    /// Child nodes with the given tag, in document order
    pub fn children<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a ManifestNode> + 'a {
        self.entries()
            .iter()
            .filter(move |element| element.tag == tag)
            .map(|element| &element.node)
    }
}

impl Element {
    pub fn new(tag: impl Into<String>, node: ManifestNode) -> Self {
        Self {
            tag: tag.into(),
            node,
        }
    }
}
