//! Contain phase - builds the handle-containment map.

use eyre::Result;

use crate::{
    ContainmentMap,
    pipeline::{AnalysisContext, Phase},
};

/// Phase that analyzes the structure graph for handle containment.
///
/// Must run after `ResolvePhase`; the collapsed alias table moves into the
/// completed map so later queries on alias names answer with their target's
/// result.
pub struct ContainPhase;

impl Phase for ContainPhase {
    fn name(&self) -> &'static str {
        "contain"
    }

    fn description(&self) -> &'static str {
        "Analyze structures for handle containment"
    }

    fn run(&self, ctx: &mut AnalysisContext) -> Result<()> {
        let aliases = ctx
            .aliases
            .take()
            .ok_or_else(|| eyre::eyre!("alias table not set - ContainPhase must run after ResolvePhase"))?;

        ctx.containment = Some(ContainmentMap::build(&ctx.registry, aliases)?);
        Ok(())
    }
}
