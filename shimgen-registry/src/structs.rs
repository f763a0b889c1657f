//! Structure declarations from the registry snapshot.

use serde::Deserialize;

/// A structure definition as declared in the registry.
///
/// A structure is either a concrete definition with an ordered member list,
/// or an alias that is exactly equivalent to another, pre-existing
/// definition. Aliases carry no members of their own.
#[derive(Debug, Clone, Deserialize)]
pub struct StructDecl {
    /// Structure type name, unique within a registry snapshot.
    pub name: String,
    /// Target name when this definition is an alias.
    #[serde(default)]
    pub alias: Option<String>,
    /// Ordered member list (empty for aliases).
    #[serde(default)]
    pub members: Vec<Member>,
    /// Platform key gating this structure (see the filter's platform defines).
    #[serde(default)]
    pub platform: Option<String>,
}

impl StructDecl {
    /// Returns true if this definition is an alias of another structure.
    pub fn is_alias(&self) -> bool {
        self.alias.is_some()
    }
}

/// A named field within a structure definition.
#[derive(Debug, Clone, Deserialize)]
pub struct Member {
    /// Member name.
    pub name: String,
    /// Base type name, with pointer/array decoration stripped.
    #[serde(rename = "type")]
    pub ty: String,
    /// Whether the base type is a structure known to the registry.
    #[serde(rename = "struct", default)]
    pub is_struct: bool,
    /// Whether the base type is an opaque handle.
    #[serde(rename = "handle", default)]
    pub is_handle: bool,
}
