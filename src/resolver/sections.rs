//! Per-section entry mapping
//!
//! Each function maps one section instance against an explicit base path.

use crate::domain::MappingEntry;
use crate::error::{Result, manifest::malformed_language_entry};
use crate::manifest::ManifestNode;
use crate::path_utils::{basename, join};

const FILENAME_TAG: &str = "filename";
const FOLDER_TAG: &str = "folder";
const LANGUAGE_TAG: &str = "language";

/// Map a `<files>` section.
///
/// `<filename>` and `<folder>` entries copy the same way; the section's
/// `folder` attribute prefixes every destination.
pub(super) fn map_files(section: &ManifestNode, base: &str) -> Vec<MappingEntry> {
    let prefix = prefix_attribute(section, "folder");
    payload_entries(section)
        .map(|name| MappingEntry::new(join(base, name), join(&prefix, name)))
        .collect()
}

/// Map a `<languages>` section.
///
/// The source is always `{base}/{tag}/{basename}` since the installed locale
/// folder is flat; the destination keeps the declared path. Every entry needs
/// a `tag`; tagged entries without a filename are skipped.
pub(super) fn map_languages(section: &ManifestNode, base: &str) -> Result<Vec<MappingEntry>> {
    let prefix = prefix_attribute(section, "folder");
    section
        .children(LANGUAGE_TAG)
        .filter_map(|entry| {
            let filename = entry.text().unwrap_or_default();
            let tag = match entry.attribute("tag").map(str::trim) {
                Some(tag) if !tag.is_empty() => tag,
                _ => return Some(Err(malformed_language_entry(filename))),
            };
            if filename.is_empty() {
                return None;
            }

            Some(Ok(MappingEntry::new(
                format!("{}/{}/{}", base, tag, basename(filename)),
                join(&prefix, filename),
            )))
        })
        .collect()
}

/// Map a `<media>` section.
///
/// The section's `destination` attribute selects a sub-directory of the media
/// base on the *source* side; `folder` prefixes the output as for files.
pub(super) fn map_media(section: &ManifestNode, base: &str) -> Vec<MappingEntry> {
    let source_prefix = prefix_attribute(section, "destination");
    let prefix = prefix_attribute(section, "folder");
    let source_base = format!("{}{}", base, source_prefix);
    payload_entries(section)
        .map(|name| MappingEntry::new(join(&source_base, name), join(&prefix, name)))
        .collect()
}

/// `/{value}` for a non-empty attribute, otherwise empty
fn prefix_attribute(section: &ManifestNode, key: &str) -> String {
    match section.attribute(key).map(|value| value.trim().trim_matches('/')) {
        Some(value) if !value.is_empty() => format!("/{}", value),
        _ => String::new(),
    }
}

/// Non-empty `<filename>`/`<folder>` texts in document order
fn payload_entries(section: &ManifestNode) -> impl Iterator<Item = &str> {
    section
        .entries()
        .iter()
        .filter(|element| element.tag == FILENAME_TAG || element.tag == FOLDER_TAG)
        .filter_map(|element| element.node.text())
        .filter(|name| !name.is_empty())
}
