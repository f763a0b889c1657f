//! Visibility filter configuration.
//!
//! The filter decides which registry names are eligible for emission in the
//! current generation pass. Skipped structures still participate in
//! containment analysis, because visible structures may nest them; they only
//! lose their own declarations.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::{Error, Result};

/// Filter configuration loaded from an optional TOML side file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FilterConfig {
    /// Structure names excluded from declaration emission.
    #[serde(default)]
    pub skip_structs: Vec<String>,
    /// Command names excluded from output-structure collection.
    #[serde(default)]
    pub skip_commands: Vec<String>,
    /// Platform key to preprocessor define, for platform-gated structures.
    #[serde(default)]
    pub platform_defines: HashMap<String, String>,
}

impl FilterConfig {
    /// Open and parse a filter file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path: PathBuf = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        Self::parse_str_with_filename(&content, &filename)
    }

    /// Parse a filter config from a string with a filename for error reporting.
    pub fn parse_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::parse(e, content, filename))
    }

    /// Returns true if the structure survives the filter.
    pub fn struct_visible(&self, name: &str) -> bool {
        !self.skip_structs.iter().any(|s| s == name)
    }

    /// Returns true if the command survives the filter.
    pub fn command_visible(&self, name: &str) -> bool {
        !self.skip_commands.iter().any(|c| c == name)
    }

    /// Look up the preprocessor define guarding a platform key.
    pub fn platform_define(&self, platform: &str) -> Option<&str> {
        self.platform_defines.get(platform).map(String::as_str)
    }
}
