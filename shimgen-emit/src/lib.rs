//! Wrapper-declaration emitter for shimgen.
//!
//! Consumes a completed analysis pass and produces the C++ header declaring
//! the wrap/unwrap/rewrap functions the capture layer implements:
//!
//! - the two polymorphic extension-chain dispatch declarations,
//! - a create-wrapped-handles declaration per output structure,
//! - three generic array helpers applying the single-struct operations
//!   element-wise,
//! - an unwrap/rewrap declaration pair per handle-carrying structure.
//!
//! Only declarations are produced (plus the inline array helper bodies);
//! implementation bodies belong to the downstream body generator.

mod builder;
mod decls;
mod file;
pub mod files;
mod generator;

pub use builder::{CodeBuilder, Indent};
pub use file::GeneratedFile;
pub use files::GENERATED_HEADER;
pub use generator::{GenerateResult, Generator, PreviewFile};
