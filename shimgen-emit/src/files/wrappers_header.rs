use std::path::{Path, PathBuf};

use crate::{CodeBuilder, GeneratedFile, decls};

use super::GENERATED_HEADER;

/// A handle-carrying structure scheduled for declaration emission.
#[derive(Debug, Clone)]
pub struct HandleStruct {
    /// Structure type name.
    pub name: String,
    /// Preprocessor define guarding the declarations, for platform-gated
    /// structures.
    pub guard: Option<String>,
}

/// The generated wrapper-declaration header.
///
/// Emission order is fixed: the two polymorphic-dispatch declarations, the
/// create-wrapped declarations for output structures, the three generic
/// array helpers, then the unwrap/rewrap pair for every visible
/// handle-carrying structure in registry declaration order. The dispatch
/// pair and the array helpers appear exactly once per pass, even when no
/// structure contains handles.
pub struct WrappersHeader {
    api_header: String,
    namespace: Vec<String>,
    output_structs: Vec<String>,
    handle_structs: Vec<HandleStruct>,
}

impl WrappersHeader {
    pub fn new(
        api_header: impl Into<String>,
        namespace: Vec<String>,
        output_structs: Vec<String>,
        handle_structs: Vec<HandleStruct>,
    ) -> Self {
        Self {
            api_header: api_header.into(),
            namespace,
            output_structs,
            handle_structs,
        }
    }
}

impl GeneratedFile for WrappersHeader {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("generated_struct_handle_wrappers.h")
    }

    fn render(&self) -> String {
        let mut builder = CodeBuilder::cpp()
            .line(GENERATED_HEADER)
            .line("#pragma once")
            .blank()
            .line("#include \"encode/custom_struct_handle_wrappers.h\"")
            .line("#include \"encode/handle_wrapper_util.h\"")
            .line("#include \"format/platform_types.h\"")
            .line("#include \"util/defines.h\"")
            .blank()
            .line(&format!("#include \"{}\"", self.api_header))
            .blank()
            .each(&self.namespace, |b, ns| {
                b.line(&format!("namespace {} {{", ns))
            })
            .blank()
            .line(decls::UNWRAP_PNEXT_DECL)
            .line(decls::REWRAP_PNEXT_DECL)
            .blank()
            .each(&self.output_structs, |b, name| {
                b.line(&decls::create_wrapped_decl(name))
            })
            .when(!self.output_structs.is_empty(), |b| b.blank());

        builder = decls::create_wrapped_array_template(builder).blank();
        builder = decls::unwrap_array_template(builder).blank();
        builder = decls::rewrap_array_template(builder);

        builder
            .each(&self.handle_structs, |b, hs| {
                let b = b.blank();
                let b = match &hs.guard {
                    Some(guard) => b.line(&format!("#if defined({})", guard)),
                    None => b,
                };
                let b = b
                    .line(&decls::unwrap_decl(&hs.name))
                    .line(&decls::rewrap_decl(&hs.name));
                match &hs.guard {
                    Some(_) => b.line("#endif"),
                    None => b,
                }
            })
            .blank()
            .each(self.namespace.iter().rev(), |b, ns| {
                b.line(&format!("}} // namespace {}", ns))
            })
            .build()
    }
}
