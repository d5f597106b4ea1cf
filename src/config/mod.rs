//! Task options and resolved configuration
//!
//! [`RawOptions`] is what a user writes (task file or command line); every
//! field is optional. [`Configuration::resolve`] turns merged options into the
//! immutable set of site paths the resolver needs, and
//! [`ExtensionDescriptor::from_options`] validates the extension selection.

pub mod task_file;

pub use task_file::TaskFile;

use serde::Deserialize;

use crate::domain::{ExtensionDescriptor, ExtensionKind};
use crate::error::{
    Result,
    config::{missing_group, missing_option},
};
use crate::path_utils::normalize_base;

/// Default site root
pub const DEFAULT_ROOT: &str = ".";

/// Default staging directory
pub const DEFAULT_DESTINATION: &str = "./dest";

/// Options as written by the user, before defaults are applied
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RawOptions {
    #[serde(alias = "joomla")]
    pub root: Option<String>,
    #[serde(alias = "dest")]
    pub destination: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub name: Option<String>,
    pub group: Option<String>,
    pub administrator: Option<String>,
    pub libraries: Option<String>,
    pub plugins: Option<String>,
    pub templates: Option<String>,
    pub manifests: Option<String>,
    pub admin_templates: Option<String>,
}

impl RawOptions {
    /// Field-wise merge; values set in `overrides` win
    #[must_use]
    pub fn merge(self, overrides: RawOptions) -> RawOptions {
        RawOptions {
            root: overrides.root.or(self.root),
            destination: overrides.destination.or(self.destination),
            kind: overrides.kind.or(self.kind),
            name: overrides.name.or(self.name),
            group: overrides.group.or(self.group),
            administrator: overrides.administrator.or(self.administrator),
            libraries: overrides.libraries.or(self.libraries),
            plugins: overrides.plugins.or(self.plugins),
            templates: overrides.templates.or(self.templates),
            manifests: overrides.manifests.or(self.manifests),
            admin_templates: overrides.admin_templates.or(self.admin_templates),
        }
    }

    /// Whether these options select an extension on their own
    pub fn selects_extension(&self) -> bool {
        self.kind.is_some() || self.name.is_some()
    }
}

/// Resolved site paths for one packaging run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub root: String,
    pub destination: String,
    pub administrator_path: String,
    pub libraries_path: String,
    pub plugins_path: String,
    pub templates_path: String,
    pub manifests_path: String,
    pub admin_templates_path: String,
}

impl Configuration {
    /// Apply defaults to raw options. Never fails.
    ///
    /// Runs in two passes: `root` and `destination` first, then everything
    /// derived from `root`, then `admin_templates_path`, which derives from the
    /// already resolved (possibly overridden) `administrator_path`.
    pub fn resolve(raw: &RawOptions) -> Configuration {
        let root = base_or(raw.root.as_deref(), DEFAULT_ROOT);
        let destination = base_or(raw.destination.as_deref(), DEFAULT_DESTINATION);

        let derived = |value: Option<&str>, dir: &str| match value {
            Some(path) => normalize_base(path),
            None => format!("{}/{}", root, dir),
        };

        let administrator_path = derived(raw.administrator.as_deref(), "administrator");
        let libraries_path = derived(raw.libraries.as_deref(), "libraries");
        let plugins_path = derived(raw.plugins.as_deref(), "plugins");
        let templates_path = derived(raw.templates.as_deref(), "templates");
        let manifests_path = derived(raw.manifests.as_deref(), "manifests");

        let admin_templates_path = match raw.admin_templates.as_deref() {
            Some(path) => normalize_base(path),
            None => format!("{}/templates", administrator_path),
        };

        Configuration {
            root,
            destination,
            administrator_path,
            libraries_path,
            plugins_path,
            templates_path,
            manifests_path,
            admin_templates_path,
        }
    }
}

fn base_or(value: Option<&str>, default: &str) -> String {
    normalize_base(value.unwrap_or(default))
}

impl ExtensionDescriptor {
    /// Validate the extension selection in merged options
    pub fn from_options(raw: &RawOptions) -> Result<ExtensionDescriptor> {
        let kind_value = non_empty(raw.kind.as_deref()).ok_or_else(|| missing_option("type"))?;
        let kind: ExtensionKind = kind_value.parse()?;
        let name = non_empty(raw.name.as_deref()).ok_or_else(|| missing_option("name"))?;
        let group = non_empty(raw.group.as_deref());

        if kind.requires_group() && group.is_none() {
            return Err(missing_group(kind.as_str(), name));
        }

        let descriptor = ExtensionDescriptor::new(kind, name);
        Ok(match group {
            Some(group) => descriptor.with_group(group),
            None => descriptor,
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
