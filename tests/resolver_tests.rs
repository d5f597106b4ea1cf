//! Resolver tests against the public library API

mod common;

use extpack::resolver::{self, extension_root, manifest_entry, manifest_filename};
use extpack::{
    Configuration, ExtensionDescriptor, ExtensionKind, ManifestDocument, MappingEntry,
    PackagerError, RawOptions, build_mapping,
};

fn config_for(root: &str) -> Configuration {
    Configuration::resolve(&RawOptions {
        root: Some(root.to_string()),
        ..RawOptions::default()
    })
}

fn parse(xml: &str) -> ManifestDocument {
    ManifestDocument::parse(xml, "manifest.xml").expect("manifest should parse")
}

#[test]
fn test_component_end_to_end_mapping() {
    let config = config_for("/site");
    let descriptor = ExtensionDescriptor::new(ExtensionKind::Component, "hello");
    let document = parse("<extension><files><filename>hello.php</filename></files></extension>");

    let mut mapping = build_mapping(&document, &descriptor, &config).expect("mapping");
    mapping.push(manifest_entry(&descriptor, &config));

    assert_eq!(
        mapping,
        vec![
            MappingEntry::new("/site/administrator/components/com_hello/hello.php", "/hello.php"),
            MappingEntry::new("/site/administrator/components/com_hello/hello.xml", "/hello.xml"),
        ]
    );
}

#[test]
fn test_plugin_services_folder() {
    let config = config_for("/site");
    let descriptor = ExtensionDescriptor::new(ExtensionKind::Plugin, "bar").with_group("system");
    let document = parse(
        r#"<extension><files folder="services"><filename>provider.php</filename></files></extension>"#,
    );

    let mapping = build_mapping(&document, &descriptor, &config).expect("mapping");

    assert_eq!(
        mapping,
        vec![MappingEntry::new(
            "/site/plugins/system/bar/provider.php",
            "/services/provider.php"
        )]
    );
}

#[test]
fn test_admin_module_lives_under_administrator() {
    let config = config_for("/site");
    let descriptor = ExtensionDescriptor::new(ExtensionKind::Module, "baz").with_group("admin");

    assert_eq!(
        extension_root(&descriptor, &config),
        "/site/administrator/modules/mod_baz"
    );
    assert_eq!(
        manifest_entry(&descriptor, &config),
        MappingEntry::new("/site/administrator/modules/mod_baz/mod_baz.xml", "/mod_baz.xml")
    );

    let document = parse("<extension><files><filename>mod_baz.php</filename></files></extension>");
    let mapping = build_mapping(&document, &descriptor, &config).expect("mapping");
    assert_eq!(mapping[0].source, "/site/administrator/modules/mod_baz/mod_baz.php");
}

#[test]
fn test_manifest_filenames_for_every_kind() {
    let expected = [
        "foo.xml",
        "mod_foo.xml",
        "foo.xml",
        "templateDetails.xml",
        "install.xml",
        "foo.xml",
        "foo.xml",
        "foo.xml",
    ];
    for (kind, expected) in ExtensionKind::ALL.into_iter().zip(expected) {
        assert_eq!(manifest_filename(kind, "foo"), expected, "kind {kind}");
    }
}

#[test]
fn test_build_mapping_is_deterministic() {
    let config = config_for("/site");
    let descriptor = ExtensionDescriptor::new(ExtensionKind::Component, "hello");
    let document = parse(common::HELLO_COMPONENT_MANIFEST);

    let first = build_mapping(&document, &descriptor, &config).expect("mapping");
    let second = build_mapping(&document, &descriptor, &config).expect("mapping");

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).expect("json"),
        serde_json::to_string(&second).expect("json")
    );
}

#[test]
fn test_full_component_order() {
    let config = config_for("/site");
    let descriptor = ExtensionDescriptor::new(ExtensionKind::Component, "hello");
    let document = parse(common::HELLO_COMPONENT_MANIFEST);

    let mapping = build_mapping(&document, &descriptor, &config).expect("mapping");

    assert_eq!(
        mapping,
        vec![
            MappingEntry::new("/site/administrator/components/com_hello/hello.php", "/site/hello.php"),
            MappingEntry::new("/site/administrator/components/com_hello/views", "/site/views"),
            MappingEntry::new(
                "/site/language/en-GB/en-GB.com_hello.ini",
                "/site/language/en-GB/en-GB.com_hello.ini"
            ),
            MappingEntry::new("/site/media/com_hello/css", "/media/css"),
            MappingEntry::new(
                "/site/administrator/components/com_hello/admin.hello.php",
                "/admin/admin.hello.php"
            ),
            MappingEntry::new(
                "/site/administrator/language/en-GB/en-GB.com_hello.sys.ini",
                "/admin/language/en-GB/en-GB.com_hello.sys.ini"
            ),
        ]
    );
}

#[test]
fn test_language_without_tag_is_rejected() {
    let config = config_for("/site");
    let descriptor = ExtensionDescriptor::new(ExtensionKind::Module, "foo");
    let document = parse(
        "<extension><languages><language>en-GB.mod_foo.ini</language></languages></extension>",
    );

    let result = build_mapping(&document, &descriptor, &config);

    assert!(matches!(result, Err(PackagerError::MalformedLanguageEntry { .. })));
}

#[test]
fn test_missing_extension_root_is_malformed() {
    let config = config_for("/site");
    let descriptor = ExtensionDescriptor::new(ExtensionKind::Component, "hello");
    let document = parse(r#"<install type="component"><files><filename>a.php</filename></files></install>"#);

    let result = build_mapping(&document, &descriptor, &config);

    assert!(matches!(result, Err(PackagerError::MalformedManifest { .. })));
}

#[test]
fn test_library_and_file_bases() {
    let config = config_for("/site");
    let document = parse("<extension><files><folder>vendor</folder></files></extension>");

    let library = ExtensionDescriptor::new(ExtensionKind::Library, "acme");
    let file = ExtensionDescriptor::new(ExtensionKind::File, "extras");

    assert_eq!(
        build_mapping(&document, &library, &config).expect("mapping"),
        vec![MappingEntry::new("/site/libraries/vendor", "/vendor")]
    );
    assert_eq!(
        build_mapping(&document, &file, &config).expect("mapping"),
        vec![MappingEntry::new("/site/vendor", "/vendor")]
    );
    assert_eq!(
        manifest_entry(&library, &config),
        MappingEntry::new("/site/manifests/libraries/acme.xml", "/acme.xml")
    );
}

#[test]
fn test_admin_template_uses_admin_templates_path() {
    let config = Configuration::resolve(&RawOptions {
        root: Some("/site".to_string()),
        administrator: Some("/admin".to_string()),
        ..RawOptions::default()
    });
    let descriptor = ExtensionDescriptor::new(ExtensionKind::Template, "atum").with_group("admin");
    let document = parse("<extension><files><filename>index.php</filename></files></extension>");

    assert_eq!(
        manifest_entry(&descriptor, &config),
        MappingEntry::new("/admin/templates/atum/templateDetails.xml", "/templateDetails.xml")
    );
    assert_eq!(
        build_mapping(&document, &descriptor, &config).expect("mapping"),
        vec![MappingEntry::new("/admin/templates/atum/index.php", "/index.php")]
    );
}

#[test]
fn test_plan_reads_installed_manifest() {
    let site = common::TestSite::new();
    site.write_file(
        "administrator/components/com_hello/hello.xml",
        common::HELLO_COMPONENT_MANIFEST,
    );
    let config = config_for(&site.root_str());
    let descriptor = ExtensionDescriptor::new(ExtensionKind::Component, "hello");

    let mapping = resolver::plan(&descriptor, &config).expect("plan");

    assert_eq!(mapping.len(), 7);
    let last = mapping.last().expect("manifest entry");
    assert_eq!(last.destination, "/hello.xml");
    assert!(last.source.ends_with("/administrator/components/com_hello/hello.xml"));
}

#[test]
fn test_plan_reports_unparseable_manifest() {
    let site = common::TestSite::new();
    site.write_file("modules/mod_foo/mod_foo.xml", "<extension><files>");
    let config = config_for(&site.root_str());
    let descriptor = ExtensionDescriptor::new(ExtensionKind::Module, "foo");

    let result = resolver::plan(&descriptor, &config);

    assert!(matches!(result, Err(PackagerError::ManifestParseFailed { .. })));
}

#[test]
fn test_empty_tagged_language_entry_maps_nothing() {
    let config = config_for("/site");
    let descriptor = ExtensionDescriptor::new(ExtensionKind::Module, "foo");
    let document = parse(
        r#"<extension><files><filename/></files><languages><language tag="en-GB"></language></languages></extension>"#,
    );

    let mapping = build_mapping(&document, &descriptor, &config).expect("mapping");

    assert!(mapping.is_empty(), "unexpected entries: {mapping:?}");
}
