use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use shimgen_registry::RegistryFile;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct InfoCommand {
    /// Path to the registry snapshot (defaults to ./registry.toml)
    #[arg(short, long, default_value = "registry.toml")]
    pub registry: PathBuf,
}

impl InfoCommand {
    /// Run the info command
    pub fn run(&self) -> Result<()> {
        let registry_file = RegistryFile::open(&self.registry).unwrap_or_exit();
        let registry = registry_file.registry();

        println!("{}", registry_file.path().display());
        println!();
        println!("  api:      {}", registry.api.name);
        println!("  header:   {}", registry.api.header);
        println!("  namespace: {}", registry.api.namespace.join("::"));
        println!();
        println!("  structs:  {}", registry.structs.len());
        println!("  aliases:  {}", registry.alias_count());
        println!("  commands: {}", registry.commands.len());

        Ok(())
    }
}
