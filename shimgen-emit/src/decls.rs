//! Declaration shapes for the generated wrapper header.
//!
//! Every signature here is a compatibility contract with the downstream
//! body generator and hand-written wrapper implementations; the text must
//! stay byte-stable across generation runs for a fixed registry input.

use crate::CodeBuilder;

/// Polymorphic dispatch over extension-chain values whose runtime type is
/// identified by type tag, emitted once per pass regardless of registry
/// content.
pub(crate) const UNWRAP_PNEXT_DECL: &str = "void UnwrapPNextStructHandles(const void* value, HandleStore* handle_store, HandleArrayStore* handle_array_store, HandleArrayUnwrapMemory* handle_unwrap_memory);";

pub(crate) const REWRAP_PNEXT_DECL: &str = "void RewrapPNextStructHandles(const void* value, HandleStore::const_iterator* handle_store_iter, HandleArrayStore::const_iterator* handle_array_store_iter);";

/// Unwrap declaration for one handle-carrying structure.
pub(crate) fn unwrap_decl(name: &str) -> String {
    format!(
        "void UnwrapStructHandles(const {}* value, HandleStore* handle_store, HandleArrayStore* handle_array_store, HandleArrayUnwrapMemory* handle_unwrap_memory);",
        name
    )
}

/// Rewrap declaration for one handle-carrying structure.
pub(crate) fn rewrap_decl(name: &str) -> String {
    format!(
        "void RewrapStructHandles(const {}* value, HandleStore::const_iterator* handle_store_iter, HandleArrayStore::const_iterator* handle_array_store_iter);",
        name
    )
}

/// Create-wrapped-handles declaration for one output structure.
pub(crate) fn create_wrapped_decl(name: &str) -> String {
    format!(
        "void CreateWrappedStructHandles({}* value, PFN_GetHandleId get_id);",
        name
    )
}

/// One generic array helper: null-check, then delegate element-wise to the
/// single-struct operation.
fn array_template(builder: CodeBuilder, signature: &str, element_call: &str) -> CodeBuilder {
    builder
        .line("template <typename T>")
        .line(signature)
        .brace_block(|b| {
            b.line("if (value != nullptr)").brace_block(|b| {
                b.line("for (size_t i = 0; i < len; ++i)")
                    .brace_block(|b| b.line(element_call))
            })
        })
}

pub(crate) fn create_wrapped_array_template(builder: CodeBuilder) -> CodeBuilder {
    array_template(
        builder,
        "void CreateWrappedStructArrayHandles(T* value, size_t len, PFN_GetHandleId get_id)",
        "CreateWrappedStructHandles(&value[i], get_id);",
    )
}

pub(crate) fn unwrap_array_template(builder: CodeBuilder) -> CodeBuilder {
    array_template(
        builder,
        "void UnwrapStructArrayHandles(T* value, size_t len, HandleStore* handle_store, HandleArrayStore* handle_array_store, HandleArrayUnwrapMemory* handle_unwrap_memory)",
        "UnwrapStructHandles(&value[i], handle_store, handle_array_store, handle_unwrap_memory);",
    )
}

pub(crate) fn rewrap_array_template(builder: CodeBuilder) -> CodeBuilder {
    array_template(
        builder,
        "void RewrapStructArrayHandles(T* value, size_t len, HandleStore::const_iterator* handle_store_iter, HandleArrayStore::const_iterator* handle_array_store_iter)",
        "RewrapStructHandles(&value[i], handle_store_iter, handle_array_store_iter);",
    )
}
