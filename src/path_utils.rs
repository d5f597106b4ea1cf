//! Path string helpers
//!
//! Mapping entries are plain strings joined with `/` so that the same manifest
//! produces byte-identical mappings on every platform. These helpers keep that
//! normalisation in one place.

/// Normalise a user-supplied base directory.
///
/// Backslashes become forward slashes and trailing slashes are removed, so
/// `"/site/"` and `"/site"` derive the same paths. The filesystem root `"/"`
/// becomes the empty string; joining `"/administrator"` onto it still yields
/// an absolute path.
///
/// # Examples
///
/// ```
/// use extpack::path_utils::normalize_base;
///
/// assert_eq!(normalize_base("/var/www/site/"), "/var/www/site");
/// assert_eq!(normalize_base(".\\site"), "./site");
/// assert_eq!(normalize_base("/"), "");
/// ```
pub fn normalize_base(path: &str) -> String {
    path.replace('\\', "/").trim_end_matches('/').to_string()
}

/// Join path segments with a single `/`.
///
/// The base is used verbatim (it may be empty for package manifests, which
/// reference paths from the site root directly).
pub fn join(base: &str, tail: &str) -> String {
    format!("{}/{}", base, tail)
}

/// Last `/`-separated component of a manifest filename.
///
/// # Examples
///
/// ```
/// use extpack::path_utils::basename;
///
/// assert_eq!(basename("en-GB/en-GB.mod_foo.ini"), "en-GB.mod_foo.ini");
/// assert_eq!(basename("mod_foo.ini"), "mod_foo.ini");
/// ```
pub fn basename(filename: &str) -> &str {
    let trimmed = filename.trim_end_matches('/');
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}
