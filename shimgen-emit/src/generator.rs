use std::path::{Path, PathBuf};

use eyre::Result;
use shimgen_analysis::AnalysisContext;

use crate::{
    GeneratedFile,
    files::{HandleStruct, WrappersHeader},
};

/// A generated file previewed without touching disk.
#[derive(Debug, Clone)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

/// Summary of one generation pass.
#[derive(Debug, Clone)]
pub struct GenerateResult {
    /// Path of the written header.
    pub written: PathBuf,
    /// Number of structures that received unwrap/rewrap declarations.
    pub handle_structs: usize,
    /// Number of output structures that received create-wrapped declarations.
    pub output_structs: usize,
}

/// Declaration emitter consuming a completed analysis pass.
///
/// The context's containment map and output set are frozen before the
/// generator sees them; the same context always renders byte-identical
/// output.
pub struct Generator<'a> {
    ctx: &'a AnalysisContext,
}

impl<'a> Generator<'a> {
    pub fn new(ctx: &'a AnalysisContext) -> Self {
        Self { ctx }
    }

    /// Preview the generated header without writing to disk
    pub fn preview(&self) -> PreviewFile {
        let header = self.wrappers_header();
        PreviewFile {
            path: header
                .path(Path::new(""))
                .to_string_lossy()
                .into_owned(),
            content: header.render(),
        }
    }

    /// Generate the wrapper header into the specified output directory
    pub fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let header = self.wrappers_header();
        let written = header.write(output_dir)?;

        Ok(GenerateResult {
            written,
            handle_structs: self.visible_handle_structs().len(),
            output_structs: self.ctx.output_structs().len(),
        })
    }

    fn wrappers_header(&self) -> WrappersHeader {
        let api = &self.ctx.registry.api;

        WrappersHeader::new(
            api.header.clone(),
            api.namespace.clone(),
            self.ctx.output_structs().iter().map(String::from).collect(),
            self.visible_handle_structs(),
        )
    }

    /// Handle-carrying structures that survive the visibility filter, in
    /// registry declaration order.
    fn visible_handle_structs(&self) -> Vec<HandleStruct> {
        let containment = self.ctx.containment();
        let filter = &self.ctx.filter;

        self.ctx
            .registry
            .concrete_structs()
            .filter(|decl| filter.struct_visible(&decl.name))
            .filter(|decl| containment.contains_handles(&decl.name) == Some(true))
            .map(|decl| HandleStruct {
                name: decl.name.clone(),
                guard: decl
                    .platform
                    .as_deref()
                    .and_then(|p| filter.platform_define(p))
                    .map(String::from),
            })
            .collect()
    }
}
