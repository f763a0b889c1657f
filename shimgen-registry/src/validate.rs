//! Validation utilities for registry identifiers.

use miette::SourceSpan;

/// Find the span of a declared name in the TOML source.
///
/// Registry names appear as quoted string values (`name = "ImageInfo"` or
/// `alias = "ImageInfo"`); the span covers the text between the quotes of
/// the first occurrence.
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    let quoted = format!("\"{}\"", name);
    if let Some(pos) = src.find(&quoted) {
        // +1 to skip the opening quote
        return Some(SourceSpan::from((pos + 1, name.len())));
    }

    // Fallback: just find the name anywhere (less precise)
    src.find(name)
        .map(|pos| SourceSpan::from((pos, name.len())))
}

/// Validate that a name is a C identifier, as registry type and command
/// names must be. Returns None if valid, Some(reason) if invalid.
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    for c in chars {
        if !c.is_ascii_alphanumeric() && c != '_' {
            return Some("name must contain only letters, numbers, and underscores");
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers() {
        assert!(validate_identifier("ImageInfo").is_none());
        assert!(validate_identifier("VkImageCreateInfo").is_none());
        assert!(validate_identifier("uint32_t").is_none());
        assert!(validate_identifier("_reserved").is_none());
    }

    #[test]
    fn test_invalid_identifiers() {
        assert!(validate_identifier("").is_some());
        assert!(validate_identifier("2ndInfo").is_some());
        assert!(validate_identifier("Image-Info").is_some());
        assert!(validate_identifier("Image Info").is_some());
        assert!(validate_identifier("Image*").is_some());
    }

    #[test]
    fn test_find_name_span() {
        let src = r#"[[structs]]
name = "ImageInfo"
"#;
        let span = find_name_span(src, "ImageInfo").unwrap();
        assert_eq!(span.offset(), 20); // position of 'I' inside the quotes
        assert_eq!(span.len(), 9);
    }

    #[test]
    fn test_find_name_span_prefers_quoted() {
        let src = "# ImageInfo appears in a comment first\nname = \"ImageInfo\"\n";
        let span = find_name_span(src, "ImageInfo").unwrap();
        let quoted = &src[span.offset()..span.offset() + span.len()];
        assert_eq!(quoted, "ImageInfo");
        assert_eq!(&src[span.offset() - 1..span.offset()], "\"");
    }
}
