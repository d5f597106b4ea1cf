//! Error type tests

#![allow(clippy::expect_used)]

use std::path::Path;

use crate::error::PackagerError;
use crate::error::config::{
    missing_group, missing_option, parse_failed as task_file_parse_failed,
    read_failed as task_file_read_failed, target_not_found, unsupported_kind,
};
use crate::error::fs::{copy_failed, io_error, missing_sources};
use crate::error::manifest::{
    escaping_destination, malformed, malformed_language_entry, parse_failed as manifest_parse_failed,
    read_failed as manifest_read_failed,
};
use miette::Diagnostic;

macro_rules! test_error_contains {
    ($test_name:ident, $err:expr, $($contains:expr),+ $(,)?) => {
        #[test]
        fn $test_name() {
            let err = $err;
            let error_string = err.to_string();
            $(
                assert!(error_string.contains($contains),
                    "Error message should contain '{}', got: {}",
                    $contains,
                    error_string
                );
            )+
        }
    };
}

#[test]
fn test_unsupported_kind_display() {
    let err = unsupported_kind("widget");
    assert_eq!(err.to_string(), "Invalid option value: type 'widget'");
}

#[test]
fn test_error_code() {
    let err = malformed("install");
    assert_eq!(
        err.code().map(|c| c.to_string()),
        Some("extpack::manifest::malformed".to_string())
    );
}

#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: PackagerError = io_err.into();
    assert!(matches!(err, PackagerError::IoError { .. }));
}

#[test]
fn test_yaml_error_conversion() {
    let parse_result: std::result::Result<serde_yaml::Value, _> =
        serde_yaml::from_str("invalid: yaml: content: [unclosed");
    let err: PackagerError = parse_result.expect_err("yaml should not parse").into();
    assert!(matches!(err, PackagerError::TaskFileParseFailed { .. }));
}

test_error_contains!(
    test_missing_option_error,
    missing_option("name"),
    "Missing required option",
    "name"
);

test_error_contains!(
    test_missing_group_error,
    missing_group("plugin", "bar"),
    "'bar'",
    "plugin",
    "requires a group"
);

test_error_contains!(
    test_task_file_read_failed_error,
    task_file_read_failed("extpack.yaml", "permission denied"),
    "Failed to read task file",
    "extpack.yaml"
);

test_error_contains!(
    test_task_file_parse_failed_error,
    task_file_parse_failed("extpack.yaml", "bad indentation"),
    "Failed to parse task file",
    "bad indentation"
);

test_error_contains!(
    test_target_not_found_error,
    target_not_found("nope"),
    "Target 'nope' not found"
);

test_error_contains!(
    test_manifest_read_failed_error,
    manifest_read_failed("/site/mod_foo.xml", "No such file"),
    "Failed to read manifest",
    "/site/mod_foo.xml"
);

test_error_contains!(
    test_manifest_parse_failed_error,
    manifest_parse_failed("/site/mod_foo.xml", "unexpected end of stream"),
    "Failed to parse manifest"
);

test_error_contains!(
    test_malformed_manifest_error,
    malformed("install"),
    "Malformed XML",
    "<extension> missing"
);

test_error_contains!(
    test_malformed_language_entry_error,
    malformed_language_entry("en-GB.mod_foo.ini"),
    "<language> tag must contain a 'tag' attribute",
    "en-GB.mod_foo.ini"
);

test_error_contains!(
    test_copy_failed_error,
    copy_failed(
        Path::new("/site/a.php"),
        Path::new("./dest/a.php"),
        &std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    ),
    "Failed to copy",
    "/site/a.php",
    "denied"
);

test_error_contains!(
    test_missing_sources_error,
    missing_sources(vec![
        "/site/a.php".to_string(),
        "/site/b.php".to_string(),
        "/site/language/en-GB/en-GB.mod_foo.ini".to_string(),
    ]),
    "3 mapped source file(s) do not exist",
    "/site/a.php, /site/b.php, /site/language/en-GB/en-GB.mod_foo.ini"
);

test_error_contains!(test_io_error, io_error("disk full"), "IO error: disk full");

test_error_contains!(
    test_escaping_destination_error,
    escaping_destination("/../../x"),
    "escapes the staging directory",
    "/../../x"
);
