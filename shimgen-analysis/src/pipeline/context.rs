//! Analysis context passed through pipeline phases.

use shimgen_registry::{FilterConfig, Registry};

use super::diagnostic::Diagnostic;
use crate::{AliasTable, ContainmentMap, OutputStructSet};

/// Per-pass state owned by one pipeline run.
///
/// Each generation pass constructs a fresh context from a registry
/// snapshot; no state crosses passes. Phases populate their slot and later
/// phases read it.
#[derive(Debug)]
pub struct AnalysisContext {
    /// The registry snapshot being analyzed.
    pub registry: Registry,
    /// The visibility filter for the current pass.
    pub filter: FilterConfig,
    /// Collapsed alias chains (populated by ResolvePhase, consumed by ContainPhase).
    pub aliases: Option<AliasTable>,
    /// Completed containment map (populated by ContainPhase).
    pub containment: Option<ContainmentMap>,
    /// Output structures requiring handle-creation wrapping (populated by CollectPhase).
    pub output_structs: Option<OutputStructSet>,
    /// Diagnostics collected during analysis.
    pub diagnostics: Vec<Diagnostic>,
}

impl AnalysisContext {
    /// Create a new analysis context for one generation pass.
    pub fn new(registry: Registry, filter: FilterConfig) -> Self {
        Self {
            registry,
            filter,
            aliases: None,
            containment: None,
            output_structs: None,
            diagnostics: Vec::new(),
        }
    }

    /// Check if any warning diagnostics have been recorded.
    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    /// Count the number of warning diagnostics.
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_warning())
            .count()
    }

    /// Get the completed containment map.
    ///
    /// # Panics
    ///
    /// Panics if the map has not been set (i.e., ContainPhase hasn't run).
    pub fn containment(&self) -> &ContainmentMap {
        self.containment
            .as_ref()
            .expect("containment map not set - did ContainPhase run?")
    }

    /// Get the collected output structures.
    ///
    /// # Panics
    ///
    /// Panics if the set has not been built (i.e., CollectPhase hasn't run).
    pub fn output_structs(&self) -> &OutputStructSet {
        self.output_structs
            .as_ref()
            .expect("output set not built - did CollectPhase run?")
    }
}
