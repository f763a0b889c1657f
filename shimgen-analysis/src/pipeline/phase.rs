//! Pipeline phase trait.

use eyre::Result;

use super::AnalysisContext;

/// A phase in the analysis pipeline.
///
/// Phases are executed in order by the pipeline. Each phase reads the
/// context slots populated by earlier phases and fills its own.
///
/// Built-in phases:
/// - `ResolvePhase` - collapses alias chains to canonical targets
/// - `ContainPhase` - builds the handle-containment map
/// - `CollectPhase` - collects output structures from command signatures
pub trait Phase: Send + Sync {
    /// The name of this phase (used in diagnostics).
    fn name(&self) -> &'static str;

    /// A human-readable description of what this phase does.
    fn description(&self) -> &'static str;

    /// Run this phase on the analysis context.
    ///
    /// # Errors
    ///
    /// Returns an error on data-integrity faults in the registry; non-fatal
    /// findings are recorded as diagnostics instead.
    fn run(&self, ctx: &mut AnalysisContext) -> Result<()>;
}
