//! Handle-containment analysis over the structure graph.

use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;
use shimgen_registry::{Registry, StructDecl};

use crate::{AliasTable, AnalysisError};

/// Mapping from structure name to "contains handles", directly or through
/// any nested structure member at any depth.
///
/// The map is total over the registry's non-alias structures and never
/// mutated after analysis completes. Queries on alias names answer with the
/// target's result. Iteration follows registry declaration order.
#[derive(Debug, Default, Clone)]
pub struct ContainmentMap {
    entries: IndexMap<String, bool>,
    aliases: AliasTable,
}

impl ContainmentMap {
    /// Analyze the full registry and produce the completed map.
    ///
    /// Structures reference each other in arbitrary declaration order, so a
    /// referenced structure that has not been evaluated yet is evaluated on
    /// demand rather than assumed handle-free. A member whose declared type
    /// is a structure name absent from the registry is a data-integrity
    /// fault in the upstream registry and aborts the analysis.
    pub fn build(registry: &Registry, aliases: AliasTable) -> Result<Self, Box<AnalysisError>> {
        let mut memo = HashMap::new();
        let mut in_progress = HashSet::new();
        let mut entries = IndexMap::new();

        for decl in registry.concrete_structs() {
            let outcome = evaluate(decl, registry, &aliases, &mut memo, &mut in_progress)?;
            entries.insert(decl.name.clone(), outcome.contains);
        }

        Ok(Self { entries, aliases })
    }

    /// Whether the named structure contains handles. Alias names answer
    /// with their target's result; unknown names answer `None`.
    pub fn contains_handles(&self, name: &str) -> Option<bool> {
        self.entries.get(self.aliases.canonical(name)).copied()
    }

    /// Resolve a name to its canonical (non-alias) form.
    pub fn canonical<'a>(&'a self, name: &'a str) -> &'a str {
        self.aliases.canonical(name)
    }

    /// Returns true if the name is an alias.
    pub fn is_alias(&self, name: &str) -> bool {
        self.aliases.is_alias(name)
    }

    /// Iterate all analyzed structures in registry declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.entries.iter().map(|(name, &v)| (name.as_str(), v))
    }

    /// Iterate the structures that contain handles, in declaration order.
    pub fn handle_structs(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(_, &v)| v)
            .map(|(name, _)| name.as_str())
    }

    /// Number of analyzed (non-alias) structures.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the registry declared no structures.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Result of evaluating one structure.
///
/// `complete` is false when the evaluation crossed a back-edge to a
/// structure still on the evaluation stack; such results hold for the
/// current query but must not be memoized.
#[derive(Clone, Copy)]
struct Outcome {
    contains: bool,
    complete: bool,
}

/// Memoized recursive evaluation of a single structure.
///
/// A back-edge to a structure currently under evaluation contributes no
/// containment on that path; the structure's own evaluation completes from
/// the remaining members and is re-derived at its own top-level visit.
fn evaluate(
    decl: &StructDecl,
    registry: &Registry,
    aliases: &AliasTable,
    memo: &mut HashMap<String, bool>,
    in_progress: &mut HashSet<String>,
) -> Result<Outcome, Box<AnalysisError>> {
    if let Some(&known) = memo.get(decl.name.as_str()) {
        return Ok(Outcome {
            contains: known,
            complete: true,
        });
    }
    if !in_progress.insert(decl.name.clone()) {
        return Ok(Outcome {
            contains: false,
            complete: false,
        });
    }

    let mut contains = false;
    let mut complete = true;
    for member in &decl.members {
        if member.is_handle {
            contains = true;
        } else if member.is_struct {
            let target = aliases.canonical(&member.ty);
            let Some(nested) = registry.get_struct(target) else {
                return Err(Box::new(AnalysisError::MissingType {
                    structure: decl.name.clone(),
                    member: member.name.clone(),
                    ty: member.ty.clone(),
                }));
            };
            let nested = evaluate(nested, registry, aliases, memo, in_progress)?;
            contains |= nested.contains;
            complete &= nested.complete;
        }
    }

    in_progress.remove(decl.name.as_str());
    if complete {
        memo.insert(decl.name.clone(), contains);
    }
    Ok(Outcome { contains, complete })
}
