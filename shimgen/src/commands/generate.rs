use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use shimgen_analysis::Pipeline;
use shimgen_emit::Generator;
use shimgen_registry::{FilterConfig, RegistryFile};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the registry snapshot (defaults to ./registry.toml)
    #[arg(short, long, default_value = "registry.toml")]
    pub registry: PathBuf,

    /// Optional visibility filter (skip lists, platform defines)
    #[arg(short, long)]
    pub filter: Option<PathBuf>,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Preview the generated header without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let registry_file = RegistryFile::open(&self.registry).unwrap_or_exit();
        let filter = match &self.filter {
            Some(path) => FilterConfig::open(path).unwrap_or_exit(),
            None => FilterConfig::default(),
        };

        let ctx = Pipeline::new()
            .run(registry_file.registry().clone(), filter)
            .wrap_err("Analysis failed")?;

        for diag in &ctx.diagnostics {
            eprintln!("{}", diag);
        }

        let generator = Generator::new(&ctx);

        if self.dry_run {
            let preview = generator.preview();
            println!("── {} ──", preview.path);
            println!("{}", preview.content);
            return Ok(());
        }

        let result = generator
            .generate(&self.output)
            .wrap_err("Failed to generate header")?;

        let api = &ctx.registry.api;
        println!("{} ({} structs, {} commands)", api.name, ctx.registry.structs.len(), ctx.registry.commands.len());
        println!();
        println!("Generated: {}", result.written.display());
        println!("  {} structures with handle members (unwrap/rewrap)", result.handle_structs);
        println!("  {} output structures (create-wrapped)", result.output_structs);

        Ok(())
    }
}
