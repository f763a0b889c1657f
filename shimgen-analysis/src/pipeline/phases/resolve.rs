//! Resolve phase - collapses alias chains to canonical targets.

use eyre::Result;

use crate::{
    AliasTable,
    pipeline::{AnalysisContext, Phase},
};

/// Phase that collapses every alias chain once, before containment runs.
///
/// Containment analysis and output collection then resolve any alias name
/// with a single lookup instead of re-following chains per query.
pub struct ResolvePhase;

impl Phase for ResolvePhase {
    fn name(&self) -> &'static str {
        "resolve"
    }

    fn description(&self) -> &'static str {
        "Collapse alias chains to canonical targets"
    }

    fn run(&self, ctx: &mut AnalysisContext) -> Result<()> {
        ctx.aliases = Some(AliasTable::build(&ctx.registry)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use shimgen_registry::FilterConfig;

    use super::*;

    #[test]
    fn test_resolve_phase_populates_table() {
        let registry = shimgen_registry::parse_str(
            r#"
            [api]
            name = "vulkan"
            header = "vulkan/vulkan.h"

            [[structs]]
            name = "ImageInfo"

            [[structs]]
            name = "ImageInfoKHR"
            alias = "ImageInfo"
            "#,
        )
        .unwrap();
        let mut ctx = AnalysisContext::new(registry, FilterConfig::default());

        assert!(ctx.aliases.is_none());

        ResolvePhase.run(&mut ctx).expect("resolve should succeed");

        let table = ctx.aliases.as_ref().unwrap();
        assert_eq!(table.canonical("ImageInfoKHR"), "ImageInfo");
    }

    #[test]
    fn test_resolve_phase_fails_on_broken_alias() {
        let registry = shimgen_registry::parse_str(
            r#"
            [api]
            name = "vulkan"
            header = "vulkan/vulkan.h"

            [[structs]]
            name = "ImageInfoKHR"
            alias = "Missing"
            "#,
        )
        .unwrap();
        let mut ctx = AnalysisContext::new(registry, FilterConfig::default());

        let result = ResolvePhase.run(&mut ctx);
        assert!(result.is_err());
    }
}
