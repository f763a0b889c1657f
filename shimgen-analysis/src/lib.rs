//! Handle-containment analysis pipeline for shimgen.
//!
//! Given a registry snapshot, this crate determines which structures
//! transitively contain opaque resource handles and which of those are
//! populated by the API through output parameters. The emitter consumes the
//! completed results:
//!
//! ```text
//! registry → resolve (aliases) → contain (handle map) → collect (outputs) → emit
//! ```
//!
//! All state lives on one [`AnalysisContext`] per generation pass; the
//! containment map is built once and never mutated after analysis, and the
//! output set is frozen before emission.

mod aliases;
mod containment;
mod error;
mod outputs;
pub mod pipeline;

pub use aliases::AliasTable;
pub use containment::ContainmentMap;
pub use error::AnalysisError;
pub use outputs::OutputStructSet;
pub use pipeline::{AnalysisContext, Diagnostic, Phase, Pipeline, Severity};
