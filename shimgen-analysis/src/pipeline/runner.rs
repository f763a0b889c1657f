//! Pipeline orchestrator.

use eyre::Result;
use shimgen_registry::{FilterConfig, Registry};

use super::{
    AnalysisContext, Phase,
    phases::{CollectPhase, ContainPhase, ResolvePhase},
};

/// The analysis pipeline orchestrator.
///
/// Runs the built-in phases (resolve, contain, collect) strictly in order -
/// containment must be total before command parameters are classified, and
/// both must be complete before anything is emitted - followed by any user
/// phases.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new();
/// let ctx = pipeline.run(registry, filter)?;
/// let generator = Generator::new(&ctx);
/// ```
pub struct Pipeline {
    phases: Vec<Box<dyn Phase>>,
}

impl Pipeline {
    /// Create a new pipeline with the default built-in phases.
    pub fn new() -> Self {
        Self { phases: Vec::new() }
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Run the pipeline on a registry snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if any phase hits a data-integrity fault; nothing
    /// is emitted for a pass that fails partway.
    pub fn run(&self, registry: Registry, filter: FilterConfig) -> Result<AnalysisContext> {
        let mut ctx = AnalysisContext::new(registry, filter);

        // Built-in phases in execution order
        let builtin_phases: Vec<Box<dyn Phase>> = vec![
            Box::new(ResolvePhase),
            Box::new(ContainPhase),
            Box::new(CollectPhase),
        ];

        for phase in builtin_phases.iter().chain(self.phases.iter()) {
            phase.run(&mut ctx)?;
        }

        Ok(ctx)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
