//! Collect phase - gathers output structures from command signatures.

use eyre::Result;

use crate::{
    AnalysisError, OutputStructSet,
    pipeline::{AnalysisContext, Diagnostic, Phase},
};

/// Phase that scans command parameters for output structures.
///
/// A structure is collected when a parameter is output-direction, its base
/// type is a structure, and that structure contains handles. Collection
/// follows command scan order, so emission is stable across runs.
pub struct CollectPhase;

impl Phase for CollectPhase {
    fn name(&self) -> &'static str {
        "collect"
    }

    fn description(&self) -> &'static str {
        "Collect output structures requiring handle-creation wrapping"
    }

    fn run(&self, ctx: &mut AnalysisContext) -> Result<()> {
        let AnalysisContext {
            registry,
            filter,
            containment,
            diagnostics,
            ..
        } = ctx;
        let containment = containment
            .as_ref()
            .ok_or_else(|| eyre::eyre!("containment map not set - CollectPhase must run after ContainPhase"))?;

        for name in &filter.skip_structs {
            if registry.get_struct(name).is_none() {
                diagnostics.push(Diagnostic::warning(
                    "collect",
                    format!("filter skips unknown structure '{}'", name),
                ));
            }
        }
        for name in &filter.skip_commands {
            if !registry.commands.iter().any(|c| &c.name == name) {
                diagnostics.push(Diagnostic::warning(
                    "collect",
                    format!("filter skips unknown command '{}'", name),
                ));
            }
        }
        for decl in &registry.structs {
            if let Some(platform) = &decl.platform
                && filter.platform_define(platform).is_none()
            {
                diagnostics.push(Diagnostic::warning(
                    "collect",
                    format!(
                        "structure '{}' has platform '{}' with no configured define; its declarations will be unguarded",
                        decl.name, platform
                    ),
                ));
            }
        }

        let mut set = OutputStructSet::default();
        for cmd in registry
            .commands
            .iter()
            .filter(|c| filter.command_visible(&c.name))
        {
            for param in &cmd.params {
                if !(param.is_output() && param.is_struct) {
                    continue;
                }

                let canonical = containment.canonical(&param.ty);
                match containment.contains_handles(canonical) {
                    Some(true) => {
                        if canonical != param.ty {
                            diagnostics.push(Diagnostic::info(
                                "collect",
                                format!(
                                    "output parameter '{}' of '{}' uses alias '{}'; recorded as '{}'",
                                    param.name, cmd.name, param.ty, canonical
                                ),
                            ));
                        }
                        set.insert(canonical);
                    }
                    Some(false) => {}
                    None => {
                        return Err(Box::new(AnalysisError::MissingParamType {
                            command: cmd.name.clone(),
                            param: param.name.clone(),
                            ty: param.ty.clone(),
                        })
                        .into());
                    }
                }
            }
        }

        ctx.output_structs = Some(set);
        Ok(())
    }
}
