//! Extension kinds
//!
//! The closed set of installable units. The kind decides the manifest file
//! name and every path rule in [`crate::resolver::paths`].

use std::fmt;
use std::str::FromStr;

use crate::error::{PackagerError, config::unsupported_kind};

/// Category of an installable extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ExtensionKind {
    Component,
    Module,
    Plugin,
    Template,
    Language,
    File,
    Library,
    Package,
}

impl ExtensionKind {
    /// Every kind, in declaration order
    pub const ALL: [ExtensionKind; 8] = [
        ExtensionKind::Component,
        ExtensionKind::Module,
        ExtensionKind::Plugin,
        ExtensionKind::Template,
        ExtensionKind::Language,
        ExtensionKind::File,
        ExtensionKind::Library,
        ExtensionKind::Package,
    ];

    /// Lowercase name as written in task options and manifests
    pub fn as_str(self) -> &'static str {
        match self {
            ExtensionKind::Component => "component",
            ExtensionKind::Module => "module",
            ExtensionKind::Plugin => "plugin",
            ExtensionKind::Template => "template",
            ExtensionKind::Language => "language",
            ExtensionKind::File => "file",
            ExtensionKind::Library => "library",
            ExtensionKind::Package => "package",
        }
    }

    /// Whether a descriptor of this kind is unusable without a group
    pub fn requires_group(self) -> bool {
        matches!(self, ExtensionKind::Plugin)
    }
}

impl fmt::Display for ExtensionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExtensionKind {
    type Err = PackagerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExtensionKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| unsupported_kind(s))
    }
}
