use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use serde::Serialize;
use shimgen_analysis::{AnalysisContext, Diagnostic, Pipeline, Severity};
use shimgen_registry::{FilterConfig, RegistryFile};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the registry snapshot (defaults to ./registry.toml)
    #[arg(short, long, default_value = "registry.toml")]
    pub registry: PathBuf,

    /// Optional visibility filter (skip lists, platform defines)
    #[arg(short, long)]
    pub filter: Option<PathBuf>,

    /// Emit a machine-readable JSON report
    #[arg(long)]
    pub json: bool,
}

/// Machine-readable summary of one analysis pass.
#[derive(Serialize)]
struct CheckReport<'a> {
    api: &'a str,
    structs: usize,
    aliases: usize,
    commands: usize,
    handle_structs: Vec<&'a str>,
    output_structs: Vec<&'a str>,
    diagnostics: &'a [Diagnostic],
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let registry_file = RegistryFile::open(&self.registry).unwrap_or_exit();
        let filter = match &self.filter {
            Some(path) => FilterConfig::open(path).unwrap_or_exit(),
            None => FilterConfig::default(),
        };

        let ctx = Pipeline::new()
            .run(registry_file.registry().clone(), filter)
            .wrap_err("Analysis failed")?;

        if self.json {
            return self.print_json(&ctx);
        }

        for diag in &ctx.diagnostics {
            match diag.severity {
                Severity::Warning => eprintln!("{}", diag),
                Severity::Info => println!("{}", diag),
            }
        }
        if ctx.has_warnings() {
            println!();
        }

        println!("✓ {} is valid\n", self.registry.display());

        let registry = &ctx.registry;
        println!(
            "  {} ({} structs, {} aliases, {} commands)\n",
            registry.api.name,
            registry.structs.len(),
            registry.alias_count(),
            registry.commands.len()
        );

        let containment = ctx.containment();
        let handle_count = containment.handle_structs().count();
        println!(
            "  {} structure{} containing handles:",
            handle_count,
            if handle_count == 1 { "" } else { "s" }
        );
        for name in containment.handle_structs() {
            println!("    {}", name);
        }

        let outputs = ctx.output_structs();
        if !outputs.is_empty() {
            println!(
                "\n  {} output structure{}:",
                outputs.len(),
                if outputs.len() == 1 { "" } else { "s" }
            );
            for name in outputs.iter() {
                println!("    {}", name);
            }
        }

        Ok(())
    }

    fn print_json(&self, ctx: &AnalysisContext) -> Result<()> {
        let containment = ctx.containment();
        let report = CheckReport {
            api: &ctx.registry.api.name,
            structs: ctx.registry.structs.len(),
            aliases: ctx.registry.alias_count(),
            commands: ctx.registry.commands.len(),
            handle_structs: containment.handle_structs().collect(),
            output_structs: ctx.output_structs().iter().collect(),
            diagnostics: &ctx.diagnostics,
        };

        println!("{}", serde_json::to_string_pretty(&report)?);
        Ok(())
    }
}
