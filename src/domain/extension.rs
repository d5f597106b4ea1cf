//! Extension descriptor

use super::ExtensionKind;

/// Group value that selects the administrator-side variant of a module,
/// template or language pack
pub const ADMIN_GROUP: &str = "admin";

/// The extension being packaged: kind, name and optional group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionDescriptor {
    pub kind: ExtensionKind,
    pub name: String,
    pub group: Option<String>,
}

impl ExtensionDescriptor {
    pub fn new(kind: ExtensionKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            group: None,
        }
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Whether the group marks this as an administrator extension
    pub fn is_admin_group(&self) -> bool {
        self.group.as_deref() == Some(ADMIN_GROUP)
    }

    /// Group as a path segment; empty when absent
    pub fn group_segment(&self) -> &str {
        self.group.as_deref().unwrap_or_default()
    }
}
