use std::path::{Path, PathBuf};

use crate::{Registry, Result};

/// A registry snapshot file with both raw content and parsed registry.
///
/// Keeping the raw content alongside the parsed snapshot lets downstream
/// errors cite the real file with source spans.
pub struct RegistryFile {
    path: PathBuf,
    content: String,
    registry: Registry,
}

impl RegistryFile {
    /// Open and parse a registry snapshot file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let registry = crate::parse_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            registry,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed registry snapshot.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_open_parses_registry() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("registry.toml");
        fs::write(
            &path,
            r#"
            [api]
            name = "vulkan"
            header = "vulkan/vulkan.h"

            [[structs]]
            name = "Extent"
            members = [{ name = "width", type = "uint32_t" }]
            "#,
        )
        .unwrap();

        let file = RegistryFile::open(&path).expect("open should succeed");
        assert_eq!(file.registry().api.name, "vulkan");
        assert_eq!(file.registry().structs.len(), 1);
        assert!(file.content().contains("Extent"));
    }

    #[test]
    fn test_open_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = RegistryFile::open(temp.path().join("missing.toml"));
        assert!(result.is_err());
    }
}
