//! Snapshot tests for wrapper-header generation.
//!
//! These tests verify that the generated header matches expected output.
//! Run `cargo insta review` to update snapshots when making intentional changes.

use shimgen_analysis::Pipeline;
use shimgen_emit::Generator;
use shimgen_registry::FilterConfig;

/// Run the full pipeline on a registry snapshot and render the header.
fn generate(registry_toml: &str, filter_toml: Option<&str>) -> String {
    let registry = shimgen_registry::parse_str(registry_toml).expect("Failed to parse registry");
    let filter = filter_toml
        .map(|content| {
            FilterConfig::parse_str_with_filename(content, "filter.toml")
                .expect("Failed to parse filter")
        })
        .unwrap_or_default();
    let ctx = Pipeline::new()
        .run(registry, filter)
        .expect("pipeline should succeed");
    Generator::new(&ctx).preview().content
}

const EXAMPLE: &str = r#"
[api]
name = "vulkan"
header = "vulkan/vulkan.h"

[[structs]]
name = "Extent"
members = [
    { name = "width", type = "uint32_t" },
    { name = "height", type = "uint32_t" },
]

[[structs]]
name = "ImageInfo"
members = [
    { name = "extent", type = "Extent", struct = true },
    { name = "image", type = "Image", handle = true },
]

[[structs]]
name = "SubmitInfo"
members = [{ name = "info", type = "ImageInfo", struct = true }]

[[commands]]
name = "GetImageInfo"
params = [
    { name = "device", type = "Device", handle = true },
    { name = "info", type = "ImageInfo", struct = true, direction = "out" },
]
"#;

const EMPTY: &str = r#"
[api]
name = "vulkan"
header = "vulkan/vulkan.h"
"#;

#[test]
fn test_example_header() {
    let header = generate(EXAMPLE, None);
    insta::assert_snapshot!("example_header", header);
}

#[test]
fn test_emission_is_deterministic() {
    let first = generate(EXAMPLE, None);
    let second = generate(EXAMPLE, None);
    assert_eq!(first, second);
}

#[test]
fn test_fixed_category_order() {
    let header = generate(EXAMPLE, None);

    let pnext = header.find("void UnwrapPNextStructHandles").unwrap();
    let create = header
        .find("void CreateWrappedStructHandles(ImageInfo*")
        .unwrap();
    let create_array = header.find("void CreateWrappedStructArrayHandles").unwrap();
    let unwrap_array = header.find("void UnwrapStructArrayHandles").unwrap();
    let rewrap_array = header.find("void RewrapStructArrayHandles").unwrap();
    let image_unwrap = header.find("void UnwrapStructHandles(const ImageInfo*").unwrap();
    let submit_unwrap = header
        .find("void UnwrapStructHandles(const SubmitInfo*")
        .unwrap();

    // Dispatch pair, create-wrapped declarations, array helpers, then the
    // per-struct pairs in registry declaration order.
    assert!(pnext < create);
    assert!(create < create_array);
    assert!(create_array < unwrap_array);
    assert!(unwrap_array < rewrap_array);
    assert!(rewrap_array < image_unwrap);
    assert!(image_unwrap < submit_unwrap);
}

#[test]
fn test_handle_free_structs_get_no_declarations() {
    let header = generate(EXAMPLE, None);
    assert!(!header.contains("const Extent*"));
    assert!(!header.contains("CreateWrappedStructHandles(Extent*"));
}

#[test]
fn test_degenerate_registry_keeps_unconditional_declarations() {
    let header = generate(EMPTY, None);

    assert_eq!(header.matches("void UnwrapPNextStructHandles").count(), 1);
    assert_eq!(header.matches("void RewrapPNextStructHandles").count(), 1);
    assert_eq!(header.matches("template <typename T>").count(), 3);
    assert_eq!(header.matches("UnwrapStructHandles(const").count(), 0);
    assert_eq!(header.matches("CreateWrappedStructHandles(").count(), 1); // array helper body only
}

#[test]
fn test_unconditional_declarations_emitted_once_for_any_registry() {
    let header = generate(EXAMPLE, None);

    assert_eq!(header.matches("void UnwrapPNextStructHandles").count(), 1);
    assert_eq!(header.matches("void RewrapPNextStructHandles").count(), 1);
    assert_eq!(header.matches("template <typename T>").count(), 3);
}

#[test]
fn test_alias_structs_emit_no_declarations_of_their_own() {
    let header = generate(
        r#"
        [api]
        name = "vulkan"
        header = "vulkan/vulkan.h"

        [[structs]]
        name = "ImageInfo"
        members = [{ name = "image", type = "Image", handle = true }]

        [[structs]]
        name = "ImageInfoKHR"
        alias = "ImageInfo"
        "#,
        None,
    );

    assert!(header.contains("UnwrapStructHandles(const ImageInfo*"));
    assert!(!header.contains("ImageInfoKHR"));
}

#[test]
fn test_platform_gated_struct_is_guarded() {
    let header = generate(
        r#"
        [api]
        name = "vulkan"
        header = "vulkan/vulkan.h"

        [[structs]]
        name = "Win32SurfaceInfo"
        platform = "win32"
        members = [{ name = "surface", type = "Surface", handle = true }]
        "#,
        Some(
            r#"
            [platform-defines]
            win32 = "API_USE_PLATFORM_WIN32"
            "#,
        ),
    );

    insta::assert_snapshot!("platform_guarded_header", header);
}

#[test]
fn test_skip_filter_removes_declarations_only() {
    let header = generate(EXAMPLE, Some(r#"skip-structs = ["ImageInfo"]"#));

    assert!(!header.contains("UnwrapStructHandles(const ImageInfo*"));
    assert!(header.contains("UnwrapStructHandles(const SubmitInfo*"));
    // ImageInfo is still an output structure.
    assert!(header.contains("CreateWrappedStructHandles(ImageInfo*"));
}
