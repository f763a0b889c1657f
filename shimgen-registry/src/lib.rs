// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! API registry snapshot parsing and validation for shimgen.
//!
//! A registry snapshot is a TOML document describing, for one graphics API,
//! its structure definitions (name, alias-of, ordered member list with base
//! type and handle/struct flags) and command signatures (name, ordered
//! parameter list with base type, direction, struct flag). The snapshot is
//! the single input to a generation pass:
//!
//! ```text
//! registry.toml → shimgen-registry (parsing) → shimgen-analysis → shimgen-emit
//! ```

mod api;
mod commands;
mod error;
mod file;
mod filter;
mod structs;
mod validate;

use std::{collections::HashSet, path::Path};

pub use api::ApiConfig;
pub use commands::{CommandDecl, Direction, Param};
pub use error::{Error, Result};
pub use file::RegistryFile;
pub use filter::FilterConfig;
use serde::Deserialize;
pub use structs::{Member, StructDecl};

/// Root of a registry snapshot.
#[derive(Debug, Clone, Deserialize)]
pub struct Registry {
    /// API metadata.
    pub api: ApiConfig,

    /// Structure definitions in declaration order.
    #[serde(default)]
    pub structs: Vec<StructDecl>,

    /// Command signatures in declaration order.
    #[serde(default)]
    pub commands: Vec<CommandDecl>,
}

impl Registry {
    /// Look up a structure definition by name.
    pub fn get_struct(&self, name: &str) -> Option<&StructDecl> {
        self.structs.iter().find(|s| s.name == name)
    }

    /// Iterate the non-alias structure definitions in declaration order.
    pub fn concrete_structs(&self) -> impl Iterator<Item = &StructDecl> {
        self.structs.iter().filter(|s| !s.is_alias())
    }

    /// Number of alias definitions in the snapshot.
    pub fn alias_count(&self) -> usize {
        self.structs.iter().filter(|s| s.is_alias()).count()
    }

    /// Validate the snapshot after parsing.
    pub fn validate(&self, src: &str, filename: &str) -> Result<()> {
        let mut seen_structs = HashSet::new();
        for decl in &self.structs {
            validate_name(&decl.name, "structure", src, filename)?;
            if !seen_structs.insert(decl.name.as_str()) {
                return Err(Error::duplicate_name(
                    &decl.name,
                    "structure",
                    src,
                    filename,
                    validate::find_name_span(src, &decl.name),
                ));
            }

            if decl.is_alias() && !decl.members.is_empty() {
                return Err(Error::validation_at(
                    format!("alias '{}' must not declare members", decl.name),
                    src,
                    filename,
                    validate::find_name_span(src, &decl.name).unwrap_or_else(|| (0, 0).into()),
                ));
            }

            for member in &decl.members {
                if member.is_struct && member.is_handle {
                    return Err(Error::validation_at(
                        format!(
                            "member '{}.{}' cannot be both a structure and a handle",
                            decl.name, member.name
                        ),
                        src,
                        filename,
                        validate::find_name_span(src, &member.name)
                            .unwrap_or_else(|| (0, 0).into()),
                    ));
                }
                if member.ty.is_empty() {
                    return Err(Error::validation(
                        format!("member '{}.{}' has an empty type", decl.name, member.name),
                        src,
                        filename,
                    ));
                }
            }
        }

        let mut seen_commands = HashSet::new();
        for cmd in &self.commands {
            validate_name(&cmd.name, "command", src, filename)?;
            if !seen_commands.insert(cmd.name.as_str()) {
                return Err(Error::duplicate_name(
                    &cmd.name,
                    "command",
                    src,
                    filename,
                    validate::find_name_span(src, &cmd.name),
                ));
            }

            for param in &cmd.params {
                if param.is_struct && param.is_handle {
                    return Err(Error::validation_at(
                        format!(
                            "parameter '{}' of '{}' cannot be both a structure and a handle",
                            param.name, cmd.name
                        ),
                        src,
                        filename,
                        validate::find_name_span(src, &param.name)
                            .unwrap_or_else(|| (0, 0).into()),
                    ));
                }
            }
        }

        Ok(())
    }
}

/// Validate that a name is a C identifier.
fn validate_name(name: &str, context: &str, src: &str, filename: &str) -> Result<()> {
    if let Some(reason) = validate::validate_identifier(name) {
        return Err(Error::invalid_identifier(
            name,
            context,
            reason,
            src,
            filename,
            validate::find_name_span(src, name),
        ));
    }
    Ok(())
}

/// Parse a registry snapshot from the given path
pub fn parse_file(path: impl AsRef<Path>) -> Result<Registry> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        Box::new(Error::Io {
            path: path.to_path_buf(),
            source: e,
        })
    })?;
    let filename = path.display().to_string();
    parse_str_with_filename(&content, &filename)
}

/// Parse a registry snapshot from a string (uses "registry.toml" as default filename)
pub fn parse_str(content: &str) -> Result<Registry> {
    parse_str_with_filename(content, "registry.toml")
}

/// Parse a registry snapshot from a string with a custom filename for error reporting
pub fn parse_str_with_filename(content: &str, filename: &str) -> Result<Registry> {
    let registry: Registry =
        toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;

    registry.validate(content, filename)?;
    Ok(registry)
}
