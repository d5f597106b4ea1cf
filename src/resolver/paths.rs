//! Kind-specific path rules
//!
//! The three kind tables live side by side here and must stay consistent when
//! a kind is added:
//!
//! | kind      | manifest file         | extension root (manifest location)               | files base path                                      |
//! |-----------|-----------------------|--------------------------------------------------|------------------------------------------------------|
//! | component | `{name}.xml`          | `administrator/components/com_{name}`            | same as extension root                               |
//! | module    | `mod_{name}.xml`      | `(admin group ? administrator : root)/modules/mod_{name}` | `(admin ? administrator : root)/modules/mod_{name}` |
//! | plugin    | `{name}.xml`          | `plugins/{group}/{name}`                         | same as extension root                               |
//! | template  | `templateDetails.xml` | `(admin group ? adminTemplates : templates)/{name}` | `(admin ? adminTemplates : templates)/{name}`     |
//! | language  | `install.xml`         | `(admin group ? administrator : root)/language/{name}` | `(admin ? administrator : root)/language/{name}` |
//! | file      | `{name}.xml`          | `manifests/files`                                | `root`                                               |
//! | library   | `{name}.xml`          | `manifests/libraries`                            | `libraries`                                          |
//! | package   | `{name}.xml`          | `manifests/packages`                             | empty                                                |
//!
//! In the files column "admin" means the `<administration>` section is being
//! mapped or the group is `admin`.

use crate::config::Configuration;
use crate::domain::{ExtensionDescriptor, ExtensionKind};

/// File name of the manifest for an extension
pub fn manifest_filename(kind: ExtensionKind, name: &str) -> String {
    match kind {
        ExtensionKind::Component
        | ExtensionKind::Plugin
        | ExtensionKind::File
        | ExtensionKind::Library
        | ExtensionKind::Package => format!("{}.xml", name),
        ExtensionKind::Module => format!("mod_{}.xml", name),
        ExtensionKind::Template => "templateDetails.xml".to_string(),
        ExtensionKind::Language => "install.xml".to_string(),
    }
}

/// Directory holding the extension's manifest
pub fn extension_root(descriptor: &ExtensionDescriptor, config: &Configuration) -> String {
    let name = &descriptor.name;
    let admin = descriptor.is_admin_group();

    match descriptor.kind {
        ExtensionKind::Component => {
            format!("{}/components/com_{}", config.administrator_path, name)
        }
        ExtensionKind::Module => {
            format!("{}/modules/mod_{}", site_or_admin(admin, config), name)
        }
        ExtensionKind::Plugin => {
            format!("{}/{}/{}", config.plugins_path, descriptor.group_segment(), name)
        }
        ExtensionKind::Template => {
            format!("{}/{}", templates_base(admin, config), name)
        }
        ExtensionKind::Language => {
            format!("{}/language/{}", site_or_admin(admin, config), name)
        }
        ExtensionKind::File => format!("{}/files", config.manifests_path),
        ExtensionKind::Library => format!("{}/libraries", config.manifests_path),
        ExtensionKind::Package => format!("{}/packages", config.manifests_path),
    }
}

/// Base directory for `<files>` entries.
///
/// `admin` is forced on while mapping the `<administration>` section; an
/// `admin` group turns it on for the whole manifest.
pub fn files_path(descriptor: &ExtensionDescriptor, admin: bool, config: &Configuration) -> String {
    let name = &descriptor.name;
    let admin = admin || descriptor.is_admin_group();

    match descriptor.kind {
        ExtensionKind::Component => {
            format!("{}/components/com_{}", config.administrator_path, name)
        }
        ExtensionKind::Module => {
            format!("{}/modules/mod_{}", site_or_admin(admin, config), name)
        }
        ExtensionKind::Plugin => {
            format!("{}/{}/{}", config.plugins_path, descriptor.group_segment(), name)
        }
        ExtensionKind::Template => {
            format!("{}/{}", templates_base(admin, config), name)
        }
        ExtensionKind::Language => {
            format!("{}/language/{}", site_or_admin(admin, config), name)
        }
        ExtensionKind::File => config.root.clone(),
        ExtensionKind::Library => config.libraries_path.clone(),
        ExtensionKind::Package => String::new(),
    }
}

/// Base directory for `<languages>` entries
pub fn languages_path(admin: bool, config: &Configuration) -> String {
    format!("{}/language", site_or_admin(admin, config))
}

/// Base directory for `<media>` entries
pub fn media_path(config: &Configuration) -> String {
    format!("{}/media", config.root)
}

fn site_or_admin(admin: bool, config: &Configuration) -> &str {
    if admin {
        &config.administrator_path
    } else {
        &config.root
    }
}

fn templates_base(admin: bool, config: &Configuration) -> &str {
    if admin {
        &config.admin_templates_path
    } else {
        &config.templates_path
    }
}
