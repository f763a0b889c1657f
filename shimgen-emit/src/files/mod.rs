//! Generated file templates.

/// Header comment stamped on every generated file.
pub const GENERATED_HEADER: &str = "// Generated by shimgen - DO NOT EDIT";

mod wrappers_header;

pub use wrappers_header::{HandleStruct, WrappersHeader};
