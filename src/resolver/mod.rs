//! Manifest-to-mapping resolver
//!
//! Turns a parsed manifest plus the extension descriptor and site paths into
//! the ordered list of `(source, destination)` pairs to copy. Sections are
//! mapped in this order:
//!
//! 1. every `<files>` section, against the site files path
//! 2. every `<languages>` section, against the site language folder
//! 3. every `<media>` section, against `{root}/media`
//! 4. every `<administration>` section: its `<files>` then its `<languages>`,
//!    against the administrator-side paths
//!
//! Sections of one kind and the entries inside them keep document order.
//! [`build_mapping`] is pure; [`plan`] adds the manifest read and the trailing
//! entry for the manifest file itself.

pub mod paths;
mod sections;

use std::fs;

use tracing::debug;

use crate::config::Configuration;
use crate::domain::{ExtensionDescriptor, MappingEntry};
use crate::error::{Result, manifest};
use crate::manifest::ManifestDocument;

pub use paths::{extension_root, files_path, languages_path, manifest_filename, media_path};

/// Root element every manifest must have
pub const MANIFEST_ROOT: &str = "extension";

const FILES_SECTION: &str = "files";
const LANGUAGES_SECTION: &str = "languages";
const MEDIA_SECTION: &str = "media";
const ADMINISTRATION_SECTION: &str = "administration";

/// Map a parsed manifest to copy instructions.
///
/// Fails with `MalformedManifest` when the root is not `<extension>` and with
/// `MalformedLanguageEntry` for a `<language>` without a `tag`; no partial
/// mapping is returned in either case.
pub fn build_mapping(
    document: &ManifestDocument,
    descriptor: &ExtensionDescriptor,
    config: &Configuration,
) -> Result<Vec<MappingEntry>> {
    if document.root_tag() != MANIFEST_ROOT {
        return Err(manifest::malformed(document.root_tag()));
    }
    let extension = &document.root.node;
    let mut mapping = Vec::new();

    let site_files = files_path(descriptor, false, config);
    for section in extension.children(FILES_SECTION) {
        mapping.extend(sections::map_files(section, &site_files));
    }

    let site_languages = languages_path(false, config);
    for section in extension.children(LANGUAGES_SECTION) {
        mapping.extend(sections::map_languages(section, &site_languages)?);
    }

    let media = media_path(config);
    for section in extension.children(MEDIA_SECTION) {
        mapping.extend(sections::map_media(section, &media));
    }

    let admin_files = files_path(descriptor, true, config);
    let admin_languages = languages_path(true, config);
    for administration in extension.children(ADMINISTRATION_SECTION) {
        for section in administration.children(FILES_SECTION) {
            mapping.extend(sections::map_files(section, &admin_files));
        }
        for section in administration.children(LANGUAGES_SECTION) {
            mapping.extend(sections::map_languages(section, &admin_languages)?);
        }
    }

    Ok(mapping)
}

/// Full path of the installed manifest
pub fn manifest_path(descriptor: &ExtensionDescriptor, config: &Configuration) -> String {
    format!(
        "{}/{}",
        extension_root(descriptor, config),
        manifest_filename(descriptor.kind, &descriptor.name)
    )
}

/// Entry copying the manifest itself to the package root
pub fn manifest_entry(descriptor: &ExtensionDescriptor, config: &Configuration) -> MappingEntry {
    let filename = manifest_filename(descriptor.kind, &descriptor.name);
    MappingEntry::new(
        format!("{}/{}", extension_root(descriptor, config), filename),
        format!("/{}", filename),
    )
}

/// Read and parse the installed manifest
pub fn load_manifest(
    descriptor: &ExtensionDescriptor,
    config: &Configuration,
) -> Result<ManifestDocument> {
    let path = manifest_path(descriptor, config);
    debug!(manifest = %path, "Reading manifest");
    let xml = fs::read_to_string(&path).map_err(|e| manifest::read_failed(&path, e.to_string()))?;
    ManifestDocument::parse(&xml, &path)
}

/// Reject entries whose destination climbs out of the staging root
pub fn check_destinations(mapping: &[MappingEntry]) -> Result<()> {
    match mapping
        .iter()
        .find(|entry| entry.destination.split('/').any(|part| part == ".."))
    {
        Some(entry) => Err(manifest::escaping_destination(&entry.destination)),
        None => Ok(()),
    }
}

/// Complete copy plan: manifest payload followed by the manifest file itself
pub fn plan(descriptor: &ExtensionDescriptor, config: &Configuration) -> Result<Vec<MappingEntry>> {
    let document = load_manifest(descriptor, config)?;
    let mut mapping = build_mapping(&document, descriptor, config)?;
    check_destinations(&mapping)?;
    mapping.push(manifest_entry(descriptor, config));
    debug!(
        extension = %descriptor.name,
        kind = %descriptor.kind,
        entries = mapping.len(),
        "Resolved mapping"
    );
    Ok(mapping)
}
