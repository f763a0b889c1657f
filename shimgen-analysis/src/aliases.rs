//! Alias chain resolution.

use std::collections::{HashMap, HashSet};

use shimgen_registry::Registry;

use crate::AnalysisError;

/// Alias names collapsed to their canonical targets.
///
/// Structure definitions may alias other definitions, and an alias target
/// may itself be an alias. Collapsing every chain once, before containment
/// analysis runs, guarantees termination and means no query ever re-derives
/// a chain.
#[derive(Debug, Default, Clone)]
pub struct AliasTable {
    targets: HashMap<String, String>,
}

impl AliasTable {
    /// Collapse every alias chain in the registry to its concrete target.
    ///
    /// Fails if a chain leaves the registry or loops back on itself.
    pub fn build(registry: &Registry) -> Result<Self, Box<AnalysisError>> {
        let edges: HashMap<&str, &str> = registry
            .structs
            .iter()
            .filter_map(|s| Some((s.name.as_str(), s.alias.as_deref()?)))
            .collect();

        let mut targets = HashMap::new();
        for decl in registry.structs.iter().filter(|s| s.is_alias()) {
            let alias = decl.name.as_str();
            let mut seen = HashSet::from([alias]);
            let mut current = edges[alias];
            while let Some(&next) = edges.get(current) {
                if !seen.insert(current) {
                    return Err(Box::new(AnalysisError::AliasCycle {
                        alias: alias.to_string(),
                    }));
                }
                current = next;
            }
            if registry.get_struct(current).is_none() {
                return Err(Box::new(AnalysisError::MissingAliasTarget {
                    alias: alias.to_string(),
                    target: current.to_string(),
                }));
            }
            targets.insert(alias.to_string(), current.to_string());
        }

        Ok(Self { targets })
    }

    /// Resolve a name to its canonical target; non-alias names map to themselves.
    pub fn canonical<'a>(&'a self, name: &'a str) -> &'a str {
        self.targets.get(name).map(String::as_str).unwrap_or(name)
    }

    /// Returns true if the name is an alias.
    pub fn is_alias(&self, name: &str) -> bool {
        self.targets.contains_key(name)
    }

    /// Number of aliases in the table.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Returns true if the registry declared no aliases.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_registry(content: &str) -> Registry {
        shimgen_registry::parse_str(content).expect("Failed to parse test registry")
    }

    #[test]
    fn test_alias_chain_collapses_to_concrete_target() {
        let registry = parse_registry(
            r#"
            [api]
            name = "vulkan"
            header = "vulkan/vulkan.h"

            [[structs]]
            name = "ImageInfo"

            [[structs]]
            name = "ImageInfoKHR"
            alias = "ImageInfo"

            [[structs]]
            name = "ImageInfoEXT"
            alias = "ImageInfoKHR"
            "#,
        );

        let table = AliasTable::build(&registry).expect("build should succeed");
        assert_eq!(table.len(), 2);
        assert_eq!(table.canonical("ImageInfoKHR"), "ImageInfo");
        assert_eq!(table.canonical("ImageInfoEXT"), "ImageInfo");
        assert_eq!(table.canonical("ImageInfo"), "ImageInfo");
        assert!(table.is_alias("ImageInfoEXT"));
        assert!(!table.is_alias("ImageInfo"));
    }

    #[test]
    fn test_missing_alias_target() {
        let registry = parse_registry(
            r#"
            [api]
            name = "vulkan"
            header = "vulkan/vulkan.h"

            [[structs]]
            name = "ImageInfoKHR"
            alias = "ImageInfo"
            "#,
        );

        let err = AliasTable::build(&registry).unwrap_err();
        assert_eq!(
            *err,
            AnalysisError::MissingAliasTarget {
                alias: "ImageInfoKHR".into(),
                target: "ImageInfo".into(),
            }
        );
    }

    #[test]
    fn test_alias_cycle() {
        let registry = parse_registry(
            r#"
            [api]
            name = "vulkan"
            header = "vulkan/vulkan.h"

            [[structs]]
            name = "A"
            alias = "B"

            [[structs]]
            name = "B"
            alias = "A"
            "#,
        );

        let err = AliasTable::build(&registry).unwrap_err();
        assert!(matches!(*err, AnalysisError::AliasCycle { .. }));
    }

    #[test]
    fn test_unknown_name_is_its_own_canonical() {
        let table = AliasTable::default();
        assert_eq!(table.canonical("Anything"), "Anything");
        assert!(table.is_empty());
    }
}
